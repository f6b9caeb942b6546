//! Error types for the storage port

use std::path::PathBuf;

/// Failures a [`Kv`](crate::Kv) backend can surface
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Key rejected before reaching the backend
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey {
        /// The offending key
        key: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// I/O failure against the backing medium
    #[error("i/o failure at {path}: {source}")]
    Io {
        /// Path the operation touched
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Backend-specific failure
    #[error("backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    /// Wrap an I/O error with the path it occurred at
    #[inline]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if the error is an I/O failure
    #[inline]
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
