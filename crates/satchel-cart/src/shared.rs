//! Process-wide single-writer cart handle

use std::sync::Arc;

use parking_lot::Mutex;

use crate::ledger::{CartLedger, LineItem};
use crate::money::Vnd;
use crate::product::{ProductId, ProductSnapshot};
use crate::session::CartSession;

/// Clonable handle to one [`CartSession`]
///
/// Every view that renders cart contents holds a clone of this handle and
/// observes the same single source of truth. The mutex serializes access:
/// a mutation (including its persist) completes before any other read or
/// write can interleave, which keeps the "no stale views" guarantee even
/// when a host embeds the cart in a multi-threaded UI shell.
#[derive(Clone)]
pub struct SharedCart {
    inner: Arc<Mutex<CartSession>>,
}

impl SharedCart {
    /// Wrap a session in a shared handle
    #[must_use]
    pub fn new(session: CartSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Add `quantity` of `product` and persist
    pub fn add_item(&self, product: &ProductSnapshot, quantity: u32) {
        self.inner.lock().add_item(product, quantity);
    }

    /// Remove the line for `product_id` and persist
    pub fn remove_item(&self, product_id: ProductId) {
        self.inner.lock().remove_item(product_id);
    }

    /// Set a line's quantity exactly (0 removes) and persist
    pub fn set_quantity(&self, product_id: ProductId, quantity: u32) {
        self.inner.lock().set_quantity(product_id, quantity);
    }

    /// Empty the cart and persist
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Sum of all quantities
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.inner.lock().total_item_count()
    }

    /// Sum of captured `unit_price × quantity`
    #[must_use]
    pub fn total_price(&self) -> Vnd {
        self.inner.lock().total_price()
    }

    /// Check if the cart holds no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Clone out the current lines, in insertion order
    #[must_use]
    pub fn items_snapshot(&self) -> Vec<LineItem> {
        self.inner.lock().items().to_vec()
    }

    /// Run `f` against the session under the lock
    ///
    /// For derived reads that need a consistent multi-field view, e.g.
    /// handing the whole ledger to checkout math.
    pub fn with_session<R>(&self, f: impl FnOnce(&CartSession) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Clone out the whole ledger
    #[must_use]
    pub fn ledger_snapshot(&self) -> CartLedger {
        self.inner.lock().ledger().clone()
    }
}

impl std::fmt::Debug for SharedCart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedCart")
            .field("session", &*self.inner.lock())
            .finish()
    }
}
