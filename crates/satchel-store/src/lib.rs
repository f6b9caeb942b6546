//! Satchel Storage Port
//!
//! Durable local key-value storage for client-side state.
//!
//! # Core Concepts
//!
//! - [`Kv`]: the storage port — synchronous, local, string-valued
//! - [`MemoryKv`]: process-local backend for tests and ephemeral sessions
//! - [`FileKv`]: directory-backed backend, one file per key, atomic writes
//! - [`StoreError`]: failures a backend can surface
//!
//! Consumers inject a `Box<dyn Kv>` rather than reaching for ambient
//! global storage, so persistence is a swappable dependency.
//!
//! # Example
//!
//! ```rust,ignore
//! use satchel_store::{FileKv, Kv};
//!
//! let store = FileKv::new("/var/lib/app")?;
//! store.put("cart", "[]")?;
//! assert_eq!(store.get("cart")?.as_deref(), Some("[]"));
//! ```

#![warn(unreachable_pub)]

// Core modules
mod error;
mod file;
mod kv;
mod memory;

// Re-exports
pub use error::StoreError;
pub use file::FileKv;
pub use kv::{validate_key, Kv, MAX_KEY_LEN};
pub use memory::MemoryKv;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
