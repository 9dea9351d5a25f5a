use super::DocumentStore;
use crate::error::{Result, TodozError};
use crate::model::Document;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent).map_err(TodozError::Io)
            }
            _ => Ok(()),
        }
    }

    fn tmp_path(&self) -> Result<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                TodozError::Store(format!("Invalid data file path: {}", self.path.display()))
            })?;
        Ok(self
            .path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4())))
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<Document> {
        if !self.path.exists() {
            return Ok(Document::new());
        }
        let content = fs::read_to_string(&self.path).map_err(TodozError::Io)?;
        if content.trim().is_empty() {
            return Ok(Document::new());
        }
        // A literal `null` document is treated like an empty file.
        let doc: Option<Document> =
            serde_json::from_str(&content).map_err(TodozError::Serialization)?;
        Ok(doc.unwrap_or_default())
    }

    fn flush(&self, doc: &Document) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(doc).map_err(TodozError::Serialization)?;

        // Write to a sibling then rename so readers never see a half-written file
        let tmp_file = self.tmp_path()?;
        fs::write(&tmp_file, content).map_err(TodozError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(TodozError::Io(e));
        }
        Ok(())
    }
}
