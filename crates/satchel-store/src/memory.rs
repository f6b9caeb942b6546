//! In-memory backend

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::StoreError;
use crate::kv::{validate_key, Kv};

/// Process-local key-value backend
///
/// Holds everything in a mutex-guarded map. Used by tests and by sessions
/// that deliberately run without durable state; contents vanish with the
/// process.
#[derive(Debug, Default)]
pub struct MemoryKv {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryKv {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if the store holds no keys
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Clone out the current contents
    ///
    /// Test helper; not part of the [`Kv`] port.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.inner.lock().clone()
    }
}

impl Kv for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        Ok(self.inner.lock().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.inner.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.inner.lock().remove(key);
        Ok(())
    }
}
