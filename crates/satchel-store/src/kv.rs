//! The storage port trait

use crate::error::StoreError;

/// Maximum accepted key length in bytes
pub const MAX_KEY_LEN: usize = 128;

/// Durable local key-value storage port
///
/// The contract every backend honors:
/// - operations are synchronous and local (no network I/O)
/// - `get` of an absent key is `Ok(None)`, never an error
/// - `put` replaces any previous value wholesale
/// - `remove` of an absent key is a no-op
///
/// Keys must satisfy [`validate_key`] so that any backend can use them
/// verbatim as file names or map entries.
pub trait Kv: Send + Sync {
    /// Read the value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`; removing an absent key succeeds silently
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: Kv + ?Sized> Kv for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<T: Kv + ?Sized> Kv for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Validate a key against the portable charset
///
/// Accepted: non-empty, at most [`MAX_KEY_LEN`] bytes, characters from
/// `[A-Za-z0-9._-]`, not starting with a dot.
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey {
            key: key.to_string(),
            reason: "empty",
        });
    }
    if key.len() > MAX_KEY_LEN {
        return Err(StoreError::InvalidKey {
            key: key.to_string(),
            reason: "longer than MAX_KEY_LEN",
        });
    }
    if key.starts_with('.') {
        return Err(StoreError::InvalidKey {
            key: key.to_string(),
            reason: "leading dot",
        });
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(StoreError::InvalidKey {
            key: key.to_string(),
            reason: "character outside [A-Za-z0-9._-]",
        });
    }
    Ok(())
}
