//! # Commands
//!
//! Business logic for every operation, one module per operation. Commands
//! work on an in-memory [`Document`](crate::model::Document) and never
//! touch storage; loading and persisting is the API facade's job.

use serde::Deserialize;
use serde_json::{Map, Value};

pub mod add_todo;
pub mod create;
pub mod delete;
pub mod delete_todo;
pub mod get;
pub mod list;
pub mod rename;
pub mod update_todo;

/// Body of a create-list or rename-list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListInput {
    #[serde(default)]
    pub name: String,
}

impl ListInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Body of an add-todo request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TodoInput {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Partial todo fields, overlaid key by key onto an existing todo.
pub type TodoPatch = Map<String, Value>;
