use crate::error::{Result, TodozError};
use crate::model::{Document, TodoList};

pub fn run(doc: &Document, id: &str) -> Result<TodoList> {
    doc.find_list(id)
        .cloned()
        .ok_or_else(|| TodozError::ListNotFound(id.to_string()))
}
