//! # Storage Layer
//!
//! The whole dataset lives in one [`Document`]. A store only knows how to
//! hand out a fresh copy of it and how to replace it wholesale; there are no
//! partial writes and no locking at this level.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one pretty-printed JSON file.
//! - [`memory::InMemoryStore`]: No persistence, used by tests.
//!
//! ## Storage Format
//!
//! ```text
//! todo_data.json
//! {
//!   "lists": [
//!     { "id": "...", "name": "...", "todos": [ { "id": "...", "text": "...", "completed": false } ] }
//!   ]
//! }
//! ```

use crate::error::Result;
use crate::model::Document;

pub mod fs;
pub mod memory;

/// Abstract interface for whole-document persistence.
///
/// Implementations are shared across request tasks, so both methods take
/// `&self`.
pub trait DocumentStore: Send + Sync {
    /// Read the full document. A missing or empty backing store yields an
    /// empty document.
    fn load(&self) -> Result<Document>;

    /// Replace the persisted document with `doc`.
    fn flush(&self, doc: &Document) -> Result<()>;

    /// Load-or-initialize, then persist, so the backing store exists.
    fn init(&self) -> Result<Document> {
        let doc = self.load()?;
        self.flush(&doc)?;
        Ok(doc)
    }
}
