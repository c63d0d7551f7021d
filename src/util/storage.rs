//! Durable key-value storage for preference literals.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserStore` wraps `window.localStorage`. The store can be missing or
//! throw (private browsing, disabled storage, quota), so callers go through
//! [`PreferenceStore::get`] / [`PreferenceStore::set`], which log and swallow
//! failures. Preferences then degrade to session-only.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Failure talking to the durable store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage rejected {op} for {key}: {reason}")]
    Rejected { op: &'static str, key: String, reason: String },
}

/// Synchronous string store keyed by namespaced preference keys.
pub trait PreferenceStore {
    /// Read the raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing store is missing or throws.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing store is missing or throws.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Best-effort read; failures are logged and reported as absent.
    fn get(&self, key: &str) -> Option<String> {
        match self.read(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("preference read failed: key={key} error={err}");
                None
            }
        }
    }

    /// Best-effort write; failures are logged and dropped.
    fn set(&self, key: &str, value: &str) {
        if let Err(err) = self.write(key, value) {
            log::warn!("preference write failed: key={key} error={err}");
        }
    }
}

/// `window.localStorage`, resolved on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) | Err(_) => Err(StoreError::Unavailable),
    }
}

impl PreferenceStore for BrowserStore {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|e| StoreError::Rejected {
                op: "read",
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StoreError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|e| StoreError::Rejected {
                op: "write",
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StoreError::Unavailable)
        }
    }
}

/// In-process store. Clones share the same map, so a "reload" can be
/// simulated by building a new controller over a clone.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `pairs`.
    pub fn with_entries<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Self { entries: Arc::new(RwLock::new(entries)) }
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Unavailable)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Unavailable)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
