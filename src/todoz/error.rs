use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodozError {
    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error("Todo not found: {0}")]
    TodoNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, TodozError>;
