use crate::commands::ListInput;
use crate::model::{Document, TodoList};

pub fn run(doc: &mut Document, input: ListInput) -> TodoList {
    let list = TodoList::new(input.name);
    doc.lists.push(list.clone());
    list
}
