//! Satchel Cart Ledger
//!
//! The authoritative client-side shopping cart: an ordered list of line
//! items mutated by a small total API and re-persisted in full after every
//! change.
//!
//! # Core Concepts
//!
//! - [`ProductSnapshot`]: the product record captured at add-to-cart time
//! - [`Vnd`]: integral Vietnamese đồng with saturating arithmetic
//! - [`LineItem`]: one product snapshot plus the held quantity
//! - [`CartLedger`]: the pure, ordered cart with mutations and totals
//! - [`CartSession`]: ledger + injected [`Kv`](satchel_store::Kv) store,
//!   persisting synchronously after each mutation
//! - [`SharedCart`]: clonable single-writer handle for sharing one session
//!   across views
//!
//! Every ledger operation is total: unknown ids are silent no-ops,
//! over-ceiling adds clamp, malformed persisted state loads as an empty
//! cart. Nothing here panics or returns an error on well-formed input.
//!
//! # Example
//!
//! ```rust,ignore
//! use satchel_cart::CartSession;
//! use satchel_store::MemoryKv;
//!
//! let mut cart = CartSession::open(Box::new(MemoryKv::new()));
//! cart.add_item(&product, 2);
//! assert_eq!(cart.total_item_count(), 2);
//! ```

#![warn(unreachable_pub)]

// Core modules
mod error;
mod ledger;
mod money;
mod product;
mod session;
mod shared;

// Re-exports
pub use error::LedgerCodecError;
pub use ledger::{CartLedger, LineItem};
pub use money::Vnd;
pub use product::{Category, ProductId, ProductSnapshot};
pub use session::{CartSession, DEFAULT_CART_KEY};
pub use shared::SharedCart;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
