//! Testing utilities for the satchel workspace
//!
//! Shared fixtures and instrumented storage ports.

#![allow(missing_docs)]

use parking_lot::Mutex;
use satchel_cart::{CartLedger, Category, ProductId, ProductSnapshot, Vnd};
use satchel_store::{Kv, MemoryKv, StoreError};

/// Sample catalog seeded from the storefront's demo data.
///
/// Product 1 is the one the concrete cart scenario pins: 2 890 000 VND,
/// ceiling 15.
pub fn sample_catalog() -> Vec<ProductSnapshot> {
    let handbags = Category::new(1, "Handbags");
    let crossbody = Category::new(2, "Crossbody bags");
    vec![
        ProductSnapshot::new(
            ProductId::new(1),
            "Elegance Premium Handbag",
            Vnd::new(2_890_000),
            15,
            handbags.clone(),
        )
        .with_image_url("https://images.example/bags/1.jpg"),
        ProductSnapshot::new(
            ProductId::new(2),
            "Vintage Mini Crossbody",
            Vnd::new(1_290_000),
            25,
            crossbody.clone(),
        )
        .with_image_url("https://images.example/bags/2.jpg"),
        ProductSnapshot::new(
            ProductId::new(3),
            "Classic Lady Handbag",
            Vnd::new(3_490_000),
            8,
            handbags,
        )
        .with_image_url("https://images.example/bags/3.jpg"),
        ProductSnapshot::new(
            ProductId::new(4),
            "Urban Chic Crossbody",
            Vnd::new(1_590_000),
            20,
            crossbody,
        )
        .with_image_url("https://images.example/bags/4.jpg"),
    ]
}

/// Catalog product by id; panics on unknown ids (fixture misuse).
pub fn catalog_product(id: u64) -> ProductSnapshot {
    sample_catalog()
        .into_iter()
        .find(|p| p.id == ProductId::new(id))
        .unwrap_or_else(|| panic!("no fixture product with id {id}"))
}

/// Ledger pre-filled with one unit of every catalog product.
pub fn seeded_ledger() -> CartLedger {
    let mut ledger = CartLedger::new();
    for product in sample_catalog() {
        ledger.add_item(&product, 1);
    }
    ledger
}

/// Operations a [`RecordingKv`] has seen, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KvOp {
    Get { key: String },
    Put { key: String, value: String },
    Remove { key: String },
}

/// Storage port that records every operation against an inner [`MemoryKv`].
#[derive(Debug, Default)]
pub struct RecordingKv {
    inner: MemoryKv,
    ops: Mutex<Vec<KvOp>>,
}

impl RecordingKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations seen so far, in order.
    pub fn ops(&self) -> Vec<KvOp> {
        self.ops.lock().clone()
    }

    /// Number of `put` operations seen.
    pub fn put_count(&self) -> usize {
        self.ops
            .lock()
            .iter()
            .filter(|op| matches!(op, KvOp::Put { .. }))
            .count()
    }

    /// Value currently stored under `key`.
    pub fn stored(&self, key: &str) -> Option<String> {
        self.inner.get(key).unwrap()
    }
}

impl Kv for RecordingKv {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.ops.lock().push(KvOp::Get {
            key: key.to_string(),
        });
        self.inner.get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.ops.lock().push(KvOp::Put {
            key: key.to_string(),
            value: value.to_string(),
        });
        self.inner.put(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.ops.lock().push(KvOp::Remove {
            key: key.to_string(),
        });
        self.inner.remove(key)
    }
}

/// Storage port where every operation fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingKv;

impl Kv for FailingKv {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Backend("injected get failure".to_string()))
    }

    fn put(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("injected put failure".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("injected remove failure".to_string()))
    }
}
