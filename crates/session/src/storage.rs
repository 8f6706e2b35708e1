//! Key/value persistence for the session token.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{SessionError, SessionResult};

/// Minimal string key/value storage, shaped after the browser's `localStorage`.
pub trait SessionStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> SessionResult<()>;
    fn remove(&self, key: &str) -> SessionResult<()>;
}

/// Process-local storage (native builds, tests, diagnostics).
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with a single entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| SessionError::storage("memory storage lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| SessionError::storage("memory storage lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| SessionError::storage("memory storage lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}

impl<T: SessionStorage + ?Sized> SessionStorage for std::rc::Rc<T> {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        (**self).remove(key)
    }
}

/// Browser `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn backend() -> SessionResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| SessionError::storage("no window object"))?;
        window
            .local_storage()
            .map_err(|e| SessionError::storage(format!("localStorage access denied: {:?}", e)))?
            .ok_or_else(|| SessionError::storage("localStorage unavailable"))
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        Self::backend()?
            .get_item(key)
            .map_err(|e| SessionError::storage(format!("localStorage read failed: {:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        Self::backend()?
            .set_item(key, value)
            .map_err(|e| SessionError::storage(format!("localStorage write failed: {:?}", e)))
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        Self::backend()?
            .remove_item(key)
            .map_err(|e| SessionError::storage(format!("localStorage remove failed: {:?}", e)))
    }
}
