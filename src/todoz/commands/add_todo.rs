use crate::commands::TodoInput;
use crate::error::{Result, TodozError};
use crate::model::{Document, Todo};

pub fn run(doc: &mut Document, list_id: &str, input: TodoInput) -> Result<Todo> {
    let list = doc
        .find_list_mut(list_id)
        .ok_or_else(|| TodozError::ListNotFound(list_id.to_string()))?;

    let todo = Todo::new(input.text, input.completed);
    list.todos_mut().push(todo.clone());
    Ok(todo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::DocumentFixture;

    #[test]
    fn completed_defaults_to_false() {
        let mut doc = DocumentFixture::new().with_list("l1", "Groceries").build();
        let todo = run(&mut doc, "l1", TodoInput::new("milk")).unwrap();

        assert_eq!(todo.text, "milk");
        assert!(!todo.completed);
        assert_eq!(doc.lists[0].todos(), &[todo]);
    }

    #[test]
    fn keeps_supplied_completed_flag() {
        let mut doc = DocumentFixture::new().with_list("l1", "Groceries").build();
        let todo = run(&mut doc, "l1", TodoInput::new("eggs").completed(true)).unwrap();
        assert!(todo.completed);
    }

    #[test]
    fn initializes_absent_todos() {
        let mut doc = DocumentFixture::new().with_bare_list("l1", "Legacy").build();
        assert!(doc.lists[0].todos.is_none());

        run(&mut doc, "l1", TodoInput::new("milk")).unwrap();
        assert_eq!(doc.lists[0].todos.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn appends_in_order() {
        let mut doc = DocumentFixture::new().with_list("l1", "Groceries").build();
        run(&mut doc, "l1", TodoInput::new("milk")).unwrap();
        run(&mut doc, "l1", TodoInput::new("eggs")).unwrap();

        let texts: Vec<_> = doc.lists[0].todos().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["milk", "eggs"]);
    }

    #[test]
    fn missing_list_is_not_found() {
        let mut doc = Document::new();
        let err = run(&mut doc, "nope", TodoInput::new("milk")).unwrap_err();
        assert!(matches!(err, TodozError::ListNotFound(_)));
    }
}
