//! `window.sessionStorage` backend for the session store

use portal_core::{SessionStorage, StorageError};
use web_sys::Storage;

/// Tab-scoped browser storage. Stateless; every call looks the storage up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserSessionStorage;

fn session_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl SessionStorage for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        session_storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let Some(storage) = session_storage() else {
            tracing::warn!("sessionStorage unavailable, cannot write {}", key);
            return Err(StorageError::Unavailable);
        };
        storage.set_item(key, value).map_err(|e| {
            tracing::warn!("Failed to write {} to sessionStorage: {:?}", key, e);
            StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            }
        })
    }

    fn remove_item(&self, key: &str) {
        let Some(storage) = session_storage() else {
            tracing::warn!("sessionStorage unavailable, cannot remove {}", key);
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!("Failed to remove {} from sessionStorage: {:?}", key, e);
        }
    }
}
