//! Browser `localStorage` as a [`BackingStore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The preference providers persist through this store in the browser. Each
//! call looks `window.localStorage` up again, so the handle is a zero-sized
//! `Copy` value that can be cloned into every provider.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser there is no storage: reads are absent and writes fail
//! with `Unavailable`, which callers already treat as session-only state.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use prefs::{BackingStore, StorageWriteFailure};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl BackingStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageWriteFailure> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageWriteFailure::Unavailable)?;
            // setItem only throws QuotaExceededError once storage is reachable.
            storage
                .set_item(key, value)
                .map_err(|_| StorageWriteFailure::QuotaExceeded { key: key.to_owned() })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageWriteFailure::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.clear();
            }
        }
    }
}
