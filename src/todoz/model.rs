use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Generate a fresh identifier for a list or a todo.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// The whole persisted dataset. This is the unit of consistency: it is
/// loaded and written back as one piece.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub lists: Vec<TodoList>,
    /// Top-level keys other than `lists`, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_list(&self, id: &str) -> Option<&TodoList> {
        self.lists.iter().find(|l| l.id == id)
    }

    pub fn find_list_mut(&mut self, id: &str) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|l| l.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: String,
    #[serde(default)]
    pub name: String,
    // Absent until the first todo is added to a list that was stored without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todos: Option<Vec<Todo>>,
    /// Keys written by other tools, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TodoList {
    pub fn new(name: String) -> Self {
        Self {
            id: new_id(),
            name,
            todos: Some(Vec::new()),
            extra: Map::new(),
        }
    }

    /// Todos in insertion order; an absent sequence reads as empty.
    pub fn todos(&self) -> &[Todo] {
        self.todos.as_deref().unwrap_or_default()
    }

    pub fn todos_mut(&mut self) -> &mut Vec<Todo> {
        self.todos.get_or_insert_with(Vec::new)
    }

    pub fn summary(&self) -> ListSummary {
        ListSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// The `{id, name}` projection returned by the list index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// Any other keys a client merged in through an update.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Todo {
    pub fn new(text: String, completed: bool) -> Self {
        Self {
            id: new_id(),
            text,
            completed,
            extra: Map::new(),
        }
    }
}

/// Response body for successful deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub success: bool,
}

impl Deleted {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
