//! File-backed store for native tools.
//!
//! The whole store is one JSON object on disk. It is read once when opened
//! and rewritten after every mutation. When a rewrite fails the mutation is
//! kept in memory, so the process keeps observing its own writes even though
//! the next process will not.

#[cfg(test)]
#[path = "file_store_test.rs"]
mod file_store_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::store::{BackingStore, StorageWriteFailure};

/// JSON-file implementation of [`BackingStore`].
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RefCell<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file starts an empty store. An unreadable or malformed file
    /// also starts empty; it is overwritten on the first successful write.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "store file is not a string map; starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "store file unreadable; starting empty");
                BTreeMap::new()
            }
        };
        debug!(path = %path.display(), keys = entries.len(), "store opened");
        Self { path, entries: RefCell::new(entries) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }

    fn persist(&self) -> Result<(), StorageWriteFailure> {
        let io = |source: std::io::Error| StorageWriteFailure::Io { path: self.path.clone(), source };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io)?;
        }
        let raw = serde_json::to_string_pretty(&*self.entries.borrow())
            .map_err(|e| io(std::io::Error::other(e)))?;
        std::fs::write(&self.path, raw).map_err(io)
    }
}

impl BackingStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageWriteFailure> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self.persist()
    }

    fn remove(&self, key: &str) {
        if self.entries.borrow_mut().remove(key).is_none() {
            return;
        }
        if let Err(e) = self.persist() {
            warn!(key, error = %e, "removal not persisted");
        }
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
        if let Err(e) = self.persist() {
            warn!(error = %e, "clear not persisted");
        }
    }
}
