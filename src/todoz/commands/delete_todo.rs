use crate::error::{Result, TodozError};
use crate::model::{Deleted, Document};

pub fn run(doc: &mut Document, list_id: &str, todo_id: &str) -> Result<Deleted> {
    let list = doc
        .find_list_mut(list_id)
        .ok_or_else(|| TodozError::ListNotFound(list_id.to_string()))?;

    // An absent todos sequence reads as empty: nothing to delete
    let Some(todos) = list.todos.as_mut() else {
        return Err(TodozError::TodoNotFound(todo_id.to_string()));
    };

    let initial_len = todos.len();
    todos.retain(|t| t.id != todo_id);

    if todos.len() == initial_len {
        return Err(TodozError::TodoNotFound(todo_id.to_string()));
    }
    Ok(Deleted::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::DocumentFixture;

    #[test]
    fn deleting_twice_reports_not_found() {
        let mut doc = DocumentFixture::new()
            .with_list("l1", "Groceries")
            .with_todo("l1", "t1", "milk")
            .with_todo("l1", "t2", "eggs")
            .build();

        assert_eq!(run(&mut doc, "l1", "t1").unwrap(), Deleted::ok());
        assert!(matches!(
            run(&mut doc, "l1", "t1"),
            Err(TodozError::TodoNotFound(_))
        ));
        assert_eq!(doc.lists[0].todos().len(), 1);
        assert_eq!(doc.lists[0].todos()[0].id, "t2");
    }

    #[test]
    fn missing_list_is_not_found() {
        let mut doc = Document::new();
        assert!(matches!(
            run(&mut doc, "nope", "t1"),
            Err(TodozError::ListNotFound(_))
        ));
    }

    #[test]
    fn list_without_todos_reports_todo_not_found() {
        let mut doc = DocumentFixture::new().with_bare_list("l1", "Legacy").build();
        assert!(matches!(
            run(&mut doc, "l1", "t1"),
            Err(TodozError::TodoNotFound(_))
        ));
        assert!(doc.lists[0].todos.is_none());
    }
}
