//! Ledger plus injected durable storage

use satchel_store::Kv;
use tracing::{debug, warn};

use crate::ledger::{CartLedger, LineItem};
use crate::money::Vnd;
use crate::product::{ProductId, ProductSnapshot};

/// Storage key the cart persists under by default
pub const DEFAULT_CART_KEY: &str = "satchel_cart";

/// A cart ledger bound to a durable store
///
/// The session is the single writer pathway: every mutation goes through
/// it, and each one synchronously re-serializes the full ledger to the
/// injected [`Kv`] store. Loading is tolerant — an absent, unreadable, or
/// malformed stored value starts the session with an empty cart and never
/// fails the caller. A store write failure is equally absorbed: it is
/// logged and the in-memory ledger stays authoritative for the rest of
/// the session.
pub struct CartSession {
    ledger: CartLedger,
    store: Box<dyn Kv>,
    key: String,
}

impl CartSession {
    /// Open a session under [`DEFAULT_CART_KEY`]
    #[must_use]
    pub fn open(store: Box<dyn Kv>) -> Self {
        Self::open_at(store, DEFAULT_CART_KEY)
    }

    /// Open a session under an explicit storage key
    #[must_use]
    pub fn open_at(store: Box<dyn Kv>, key: impl Into<String>) -> Self {
        let key = key.into();
        let ledger = match store.get(&key) {
            Ok(Some(raw)) => match CartLedger::from_json(&raw) {
                Ok(ledger) => {
                    debug!(key = %key, lines = ledger.len(), "cart loaded");
                    ledger
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "stored cart is malformed, starting empty");
                    CartLedger::new()
                }
            },
            Ok(None) => CartLedger::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "cart load failed, starting empty");
                CartLedger::new()
            }
        };
        Self { ledger, store, key }
    }

    /// Add `quantity` of `product` and persist
    pub fn add_item(&mut self, product: &ProductSnapshot, quantity: u32) {
        self.ledger.add_item(product, quantity);
        debug!(product = %product.id, quantity, "cart add");
        self.persist();
    }

    /// Remove the line for `product_id` and persist
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.ledger.remove_item(product_id);
        debug!(product = %product_id, "cart remove");
        self.persist();
    }

    /// Set a line's quantity exactly (0 removes) and persist
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        self.ledger.set_quantity(product_id, quantity);
        debug!(product = %product_id, quantity, "cart quantity set");
        self.persist();
    }

    /// Empty the cart and persist
    ///
    /// Called after an order is successfully placed.
    pub fn clear(&mut self) {
        self.ledger.clear();
        debug!("cart cleared");
        self.persist();
    }

    /// Sum of all quantities
    #[inline]
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.ledger.total_item_count()
    }

    /// Sum of captured `unit_price × quantity`
    #[inline]
    #[must_use]
    pub fn total_price(&self) -> Vnd {
        self.ledger.total_price()
    }

    /// Lines in insertion order
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.ledger.items()
    }

    /// Check if the cart holds no lines
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    /// Current ledger view
    #[inline]
    #[must_use]
    pub fn ledger(&self) -> &CartLedger {
        &self.ledger
    }

    /// Storage key this session persists under
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    fn persist(&self) {
        let raw = match self.ledger.to_json() {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %self.key, error = %e, "cart serialization failed, skipping persist");
                return;
            }
        };
        if let Err(e) = self.store.put(&self.key, &raw) {
            warn!(key = %self.key, error = %e, "cart persistence failed, in-memory ledger stays authoritative");
        }
    }
}

impl std::fmt::Debug for CartSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartSession")
            .field("key", &self.key)
            .field("ledger", &self.ledger)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use satchel_store::{MemoryKv, StoreError};

    use super::*;
    use crate::product::Category;

    mockall::mock! {
        Store {}

        impl Kv for Store {
            fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
            fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
            fn remove(&self, key: &str) -> Result<(), StoreError>;
        }
    }

    fn product(id: u64, price: u64, ceiling: u32) -> ProductSnapshot {
        ProductSnapshot::new(
            ProductId::new(id),
            format!("bag-{id}"),
            Vnd::new(price),
            ceiling,
            Category::new(1, "Handbags"),
        )
    }

    #[test]
    fn open_with_empty_store_starts_empty() {
        let session = CartSession::open(Box::new(MemoryKv::new()));
        assert!(session.is_empty());
        assert_eq!(session.key(), DEFAULT_CART_KEY);
    }

    #[test]
    fn malformed_stored_value_starts_empty() {
        let store = MemoryKv::new();
        store.put(DEFAULT_CART_KEY, "{not a sequence").unwrap();

        let session = CartSession::open(Box::new(store));
        assert!(session.is_empty());
    }

    #[test]
    fn failing_load_starts_empty() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .withf(|key| key == DEFAULT_CART_KEY)
            .return_once(|_| Err(StoreError::Backend("injected".to_string())));

        let session = CartSession::open(Box::new(store));
        assert!(session.is_empty());
    }

    #[test]
    fn every_mutation_persists_the_full_ledger() {
        let mut store = MockStore::new();
        store.expect_get().return_once(|_| Ok(None));
        // add, set_quantity, remove, clear: one put each
        store
            .expect_put()
            .withf(|key, _value| key == DEFAULT_CART_KEY)
            .times(4)
            .returning(|_, _| Ok(()));

        let mut session = CartSession::open(Box::new(store));
        let p = product(1, 100, 10);
        session.add_item(&p, 2);
        session.set_quantity(p.id, 5);
        session.remove_item(p.id);
        session.clear();
    }

    #[test]
    fn write_failure_keeps_in_memory_ledger_correct() {
        let mut store = MockStore::new();
        store.expect_get().return_once(|_| Ok(None));
        store
            .expect_put()
            .returning(|_, _| Err(StoreError::Backend("disk full".to_string())));

        let mut session = CartSession::open(Box::new(store));
        let p = product(1, 2_890_000, 15);
        session.add_item(&p, 3);

        assert_eq!(session.total_item_count(), 3);
        assert_eq!(session.total_price(), Vnd::new(8_670_000));
    }

    #[test]
    fn clear_persists_the_empty_sequence() {
        let store = std::sync::Arc::new(MemoryKv::new());
        store
            .put(DEFAULT_CART_KEY, r#"[{"id":1,"name":"b","unit_price":5,"stock_ceiling":9,"category":{"id":1,"name":"H"},"image_url":"","quantity":2}]"#)
            .unwrap();

        let mut session = CartSession::open(Box::new(std::sync::Arc::clone(&store)));
        assert_eq!(session.total_item_count(), 2);

        session.clear();
        assert!(session.is_empty());
        assert_eq!(store.get(DEFAULT_CART_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn custom_key_is_respected() {
        let store = MemoryKv::new();
        let mut session = CartSession::open_at(Box::new(store), "cart.v2");
        session.add_item(&product(1, 100, 10), 1);
        assert_eq!(session.key(), "cart.v2");
    }
}
