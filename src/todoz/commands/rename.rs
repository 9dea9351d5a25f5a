use crate::commands::ListInput;
use crate::error::{Result, TodozError};
use crate::model::{Document, TodoList};

pub fn run(doc: &mut Document, id: &str, input: ListInput) -> Result<TodoList> {
    let list = doc
        .find_list_mut(id)
        .ok_or_else(|| TodozError::ListNotFound(id.to_string()))?;
    list.name = input.name;
    Ok(list.clone())
}
