use crate::commands::TodoPatch;
use crate::error::{Result, TodozError};
use crate::model::{Document, Todo};
use serde_json::Value;

/// Overlay `patch` onto the todo, key by key. Supplied keys overwrite,
/// everything else keeps its prior value. This includes `id`.
pub fn run(doc: &mut Document, list_id: &str, todo_id: &str, patch: TodoPatch) -> Result<Todo> {
    let list = doc
        .find_list_mut(list_id)
        .ok_or_else(|| TodozError::ListNotFound(list_id.to_string()))?;

    let todo = list
        .todos
        .as_mut()
        .and_then(|todos| todos.iter_mut().find(|t| t.id == todo_id))
        .ok_or_else(|| TodozError::TodoNotFound(todo_id.to_string()))?;

    // Work on a copy so a bad key leaves the stored todo untouched
    let mut updated = todo.clone();
    apply_patch(&mut updated, patch)?;
    *todo = updated.clone();
    Ok(updated)
}

fn apply_patch(todo: &mut Todo, patch: TodoPatch) -> Result<()> {
    for (key, value) in patch {
        match key.as_str() {
            "id" => todo.id = expect_string(&key, value)?,
            "text" => todo.text = expect_string(&key, value)?,
            "completed" => match value {
                Value::Bool(b) => todo.completed = b,
                _ => return Err(wrong_type(&key, "a boolean")),
            },
            _ => {
                todo.extra.insert(key, value);
            }
        }
    }
    Ok(())
}

fn expect_string(key: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(wrong_type(key, "a string")),
    }
}

fn wrong_type(key: &str, expected: &str) -> TodozError {
    TodozError::InvalidInput(format!("`{}` must be {}", key, expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::DocumentFixture;
    use serde_json::json;

    fn patch(value: Value) -> TodoPatch {
        match value {
            Value::Object(map) => map,
            _ => panic!("patch must be an object"),
        }
    }

    fn fixture() -> Document {
        DocumentFixture::new()
            .with_list("l1", "Groceries")
            .with_todo("l1", "t1", "milk")
            .build()
    }

    #[test]
    fn merges_only_supplied_fields() {
        let mut doc = fixture();
        let todo = run(&mut doc, "l1", "t1", patch(json!({"completed": true}))).unwrap();

        assert_eq!(todo.id, "t1");
        assert_eq!(todo.text, "milk");
        assert!(todo.completed);
        assert_eq!(doc.lists[0].todos()[0], todo);
    }

    #[test]
    fn unknown_keys_are_kept() {
        let mut doc = fixture();
        let todo = run(&mut doc, "l1", "t1", patch(json!({"due": "friday"}))).unwrap();
        assert_eq!(todo.extra.get("due"), Some(&json!("friday")));
    }

    #[test]
    fn id_can_be_overwritten() {
        let mut doc = fixture();
        let todo = run(&mut doc, "l1", "t1", patch(json!({"id": "renamed"}))).unwrap();
        assert_eq!(todo.id, "renamed");
        assert_eq!(doc.lists[0].todos()[0].id, "renamed");
    }

    #[test]
    fn wrongly_typed_field_changes_nothing() {
        let mut doc = fixture();
        let before = doc.clone();

        let err = run(
            &mut doc,
            "l1",
            "t1",
            patch(json!({"text": "bread", "completed": "yes"})),
        )
        .unwrap_err();
        assert!(matches!(&err, TodozError::InvalidInput(msg) if msg == "`completed` must be a boolean"));
        assert_eq!(doc, before);
    }

    #[test]
    fn missing_list_and_missing_todo() {
        let mut doc = fixture();
        assert!(matches!(
            run(&mut doc, "nope", "t1", TodoPatch::new()),
            Err(TodozError::ListNotFound(_))
        ));
        assert!(matches!(
            run(&mut doc, "l1", "nope", TodoPatch::new()),
            Err(TodozError::TodoNotFound(_))
        ));
    }

    #[test]
    fn list_without_todos_reports_todo_not_found() {
        let mut doc = DocumentFixture::new().with_bare_list("l1", "Legacy").build();
        assert!(matches!(
            run(&mut doc, "l1", "t1", TodoPatch::new()),
            Err(TodozError::TodoNotFound(_))
        ));
    }
}
