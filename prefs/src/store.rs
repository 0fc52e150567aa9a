//! Durable string key-value storage behind every preference.
//!
//! DESIGN
//! ======
//! `BackingStore` mirrors the browser's origin-scoped storage: synchronous,
//! string keyed, string valued. Reads never fail (a missing or unreadable
//! entry is simply absent) and removals are idempotent. Writes report
//! `StorageWriteFailure` instead of panicking so callers can keep running on
//! in-memory state and decide later whether to surface a warning.
//!
//! All methods take `&self`; implementations that hold data use interior
//! mutability so one store can be shared by several providers.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

/// Error returned when a write does not persist.
#[derive(Debug, thiserror::Error)]
pub enum StorageWriteFailure {
    /// Storage is disabled or not present in this environment.
    #[error("storage unavailable")]
    Unavailable,
    /// Storing the value would exceed the medium's quota.
    #[error("storage quota exceeded writing `{key}`")]
    QuotaExceeded { key: String },
    /// The file backing the store could not be written.
    #[error("failed to write store file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Synchronous, string-keyed durable storage.
pub trait BackingStore {
    /// Return the stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageWriteFailure`] when the value was not persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageWriteFailure>;

    /// Delete `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str);

    /// Delete every key in the store.
    fn clear(&self);
}

impl<S: BackingStore + ?Sized> BackingStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageWriteFailure> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

impl<S: BackingStore + ?Sized> BackingStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageWriteFailure> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

impl<S: BackingStore + ?Sized> BackingStore for Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageWriteFailure> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-process store with an optional byte quota.
///
/// The quota counts key and value bytes across all entries, the way browser
/// storage budgets an origin. A disabled store rejects every write.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    quota: Option<usize>,
    disabled: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that refuses writes once `bytes` would be exceeded.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self { quota: Some(bytes), ..Self::default() }
    }

    /// Store that behaves like storage turned off by the user.
    #[must_use]
    pub fn disabled() -> Self {
        Self { disabled: true, ..Self::default() }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Bytes used by keys and values.
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.entries.borrow().iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl BackingStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageWriteFailure> {
        if self.disabled {
            return Err(StorageWriteFailure::Unavailable);
        }
        if let Some(quota) = self.quota {
            let existing = self.entries.borrow().get(key).map_or(0, |v| key.len() + v.len());
            let projected = self.used_bytes() - existing + key.len() + value.len();
            if projected > quota {
                return Err(StorageWriteFailure::QuotaExceeded { key: key.to_owned() });
            }
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}
