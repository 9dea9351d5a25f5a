use crate::error::{Result, TodozError};
use crate::model::{Deleted, Document};

pub fn run(doc: &mut Document, id: &str) -> Result<Deleted> {
    let initial_len = doc.lists.len();
    doc.lists.retain(|l| l.id != id);

    if doc.lists.len() == initial_len {
        return Err(TodozError::ListNotFound(id.to_string()));
    }
    Ok(Deleted::ok())
}
