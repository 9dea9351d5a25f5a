//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every todoz operation, whatever transport sits on top.
//!
//! ## Role and Responsibilities
//!
//! Every method brackets one command:
//! 1. load the full document from the store
//! 2. run the command against it
//! 3. flush the document back, **only** if the command succeeded
//!
//! A failed command (not found, bad input) never writes.
//!
//! ## Concurrency
//!
//! By default nothing guards the load→flush window, so two overlapping calls
//! can interleave and the last flush wins for the whole document. With
//! [`TodoApi::serialized`] a single mutex covers the whole sequence instead.
//!
//! ## Generic Over DocumentStore
//!
//! `TodoApi<S: DocumentStore>` is generic over the storage backend:
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`

use crate::commands::{self, ListInput, TodoInput, TodoPatch};
use crate::error::{Result, TodozError};
use crate::model::{Deleted, Document, ListSummary, Todo, TodoList};
use crate::store::DocumentStore;
use std::sync::{Mutex, MutexGuard};

/// The main API facade for todoz operations.
pub struct TodoApi<S: DocumentStore> {
    store: S,
    write_lock: Option<Mutex<()>>,
}

impl<S: DocumentStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: None,
        }
    }

    /// Serialize every load→mutate→flush sequence behind one lock.
    pub fn serialized(mut self) -> Self {
        self.write_lock = Some(Mutex::new(()));
        self
    }

    pub fn is_serialized(&self) -> bool {
        self.write_lock.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_lists(&self) -> Result<Vec<ListSummary>> {
        self.read(|doc| Ok(commands::list::run(doc)))
    }

    pub fn create_list(&self, input: ListInput) -> Result<TodoList> {
        self.write(|doc| Ok(commands::create::run(doc, input)))
    }

    /// Fetch a list. The document is flushed back unchanged afterwards.
    pub fn get_list(&self, id: &str) -> Result<TodoList> {
        self.write(|doc| commands::get::run(doc, id))
    }

    pub fn rename_list(&self, id: &str, input: ListInput) -> Result<TodoList> {
        self.write(|doc| commands::rename::run(doc, id, input))
    }

    pub fn delete_list(&self, id: &str) -> Result<Deleted> {
        self.write(|doc| commands::delete::run(doc, id))
    }

    pub fn add_todo(&self, list_id: &str, input: TodoInput) -> Result<Todo> {
        self.write(|doc| commands::add_todo::run(doc, list_id, input))
    }

    pub fn update_todo(&self, list_id: &str, todo_id: &str, patch: TodoPatch) -> Result<Todo> {
        self.write(|doc| commands::update_todo::run(doc, list_id, todo_id, patch))
    }

    pub fn delete_todo(&self, list_id: &str, todo_id: &str) -> Result<Deleted> {
        self.write(|doc| commands::delete_todo::run(doc, list_id, todo_id))
    }

    fn read<T>(&self, op: impl FnOnce(&Document) -> Result<T>) -> Result<T> {
        let _guard = self.lock()?;
        let doc = self.store.load()?;
        op(&doc)
    }

    fn write<T>(&self, op: impl FnOnce(&mut Document) -> Result<T>) -> Result<T> {
        let _guard = self.lock()?;
        let mut doc = self.store.load()?;
        let out = op(&mut doc)?;
        self.store.flush(&doc)?;
        Ok(out)
    }

    fn lock(&self) -> Result<Option<MutexGuard<'_, ()>>> {
        self.write_lock
            .as_ref()
            .map(|m| {
                m.lock()
                    .map_err(|_| TodozError::Internal("Write lock poisoned".to_string()))
            })
            .transpose()
    }
}
