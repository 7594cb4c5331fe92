//! Tab-scoped session store
//!
//! A session is nothing more than a token pair sitting in storage. The store
//! never inspects, expires, or refreshes the tokens.

use crate::config::StorageKeys;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;
use tracing::warn;

pub use portal_http::TokenPair;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage is unavailable")]
    Unavailable,

    #[error("Failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Key/value storage backing the session.
///
/// Browser storage is shared and synchronous, so methods take `&self`.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str);
}

impl<T: SessionStorage + ?Sized> SessionStorage for Rc<T> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        (**self).remove_item(key);
    }
}

/// In-memory storage for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Session store over an injected storage backend
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Write both tokens, replacing any existing pair.
    ///
    /// If the refresh token cannot be written the access token is removed
    /// again, so a failed write never leaves half a session behind.
    pub fn set(&self, pair: &TokenPair) -> Result<(), StorageError> {
        self.storage
            .set_item(StorageKeys::ACCESS_TOKEN, &pair.access_token)?;
        if let Err(e) = self
            .storage
            .set_item(StorageKeys::REFRESH_TOKEN, &pair.refresh_token)
        {
            warn!("Refresh token write failed, discarding access token: {}", e);
            self.storage.remove_item(StorageKeys::ACCESS_TOKEN);
            return Err(e);
        }
        Ok(())
    }

    /// Stored pair, if both halves are present
    pub fn get(&self) -> Option<TokenPair> {
        let access_token = self.storage.get_item(StorageKeys::ACCESS_TOKEN)?;
        let refresh_token = self.storage.get_item(StorageKeys::REFRESH_TOKEN)?;
        Some(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Remove both tokens. Clearing an empty store is a no-op.
    pub fn clear(&self) {
        self.storage.remove_item(StorageKeys::ACCESS_TOKEN);
        self.storage.remove_item(StorageKeys::REFRESH_TOKEN);
    }

    /// Bearer token for protected calls
    pub fn access_token(&self) -> Option<String> {
        self.storage
            .get_item(StorageKeys::ACCESS_TOKEN)
            .filter(|token| !token.is_empty())
    }

    /// The authentication predicate: a non-empty access token is stored
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }
}
