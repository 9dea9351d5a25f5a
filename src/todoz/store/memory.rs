use super::DocumentStore;
use crate::error::{Result, TodozError};
use crate::model::Document;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    doc: Mutex<Document>,
    flushes: AtomicUsize,
    simulate_write_error: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(doc: Document) -> Self {
        Self {
            doc: Mutex::new(doc),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Number of successful flushes so far.
    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }

    /// A copy of the currently persisted document.
    pub fn snapshot(&self) -> Result<Document> {
        self.load()
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self) -> Result<Document> {
        let doc = self
            .doc
            .lock()
            .map_err(|_| TodozError::Store("In-memory store lock poisoned".to_string()))?;
        Ok(doc.clone())
    }

    fn flush(&self, new_doc: &Document) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(TodozError::Store("Simulated write error".to_string()));
        }
        let mut doc = self
            .doc
            .lock()
            .map_err(|_| TodozError::Store("In-memory store lock poisoned".to_string()))?;
        *doc = new_doc.clone();
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::model::{Todo, TodoList};

    pub struct DocumentFixture {
        pub doc: Document,
    }

    impl Default for DocumentFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DocumentFixture {
        pub fn new() -> Self {
            Self {
                doc: Document::new(),
            }
        }

        pub fn with_list(mut self, id: &str, name: &str) -> Self {
            let mut list = TodoList::new(name.to_string());
            list.id = id.to_string();
            self.doc.lists.push(list);
            self
        }

        /// A list as it would look when stored before it ever held a todo.
        pub fn with_bare_list(mut self, id: &str, name: &str) -> Self {
            self.doc.lists.push(TodoList {
                id: id.to_string(),
                name: name.to_string(),
                todos: None,
                extra: Default::default(),
            });
            self
        }

        pub fn with_todo(mut self, list_id: &str, todo_id: &str, text: &str) -> Self {
            let mut todo = Todo::new(text.to_string(), false);
            todo.id = todo_id.to_string();
            if let Some(list) = self.doc.find_list_mut(list_id) {
                list.todos_mut().push(todo);
            }
            self
        }

        pub fn build(self) -> Document {
            self.doc
        }

        pub fn into_store(self) -> InMemoryStore {
            InMemoryStore::with_document(self.doc)
        }
    }
}
