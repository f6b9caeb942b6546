//! Satchel Checkout
//!
//! Pure order math over a cart ledger snapshot.
//!
//! # Core Concepts
//!
//! - [`OrderLine`]: the minimal `{id, quantity}` projection handed to the
//!   external order-creation call
//! - [`ShippingPolicy`]: flat fee with a free-shipping threshold
//! - [`CheckoutTotals`]: merchandise subtotal, shipping fee, grand total
//! - [`PaymentSummary`]: totals after an account-level percent discount,
//!   mirroring the order backend's payment breakdown
//!
//! Everything here reads the ledger and computes; nothing mutates cart
//! state or performs I/O. Order submission itself is owned by the caller.

#![warn(unreachable_pub)]

// Core modules
mod order;
mod totals;

// Re-exports
pub use order::{order_lines, OrderLine};
pub use totals::{CheckoutTotals, PaymentSummary, ShippingPolicy};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
