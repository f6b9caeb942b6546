//! The ordered cart ledger

use serde::{Deserialize, Serialize};

use crate::error::LedgerCodecError;
use crate::money::Vnd;
use crate::product::{ProductId, ProductSnapshot};

/// One product plus the quantity of it held in the cart
///
/// Serializes flat: the snapshot fields merged with a `quantity` field,
/// which is the shape the durable store holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product as captured at add time
    #[serde(flatten)]
    pub product: ProductSnapshot,
    /// Held quantity, always at least 1
    pub quantity: u32,
}

impl LineItem {
    /// Price of this line: captured unit price times quantity
    #[inline]
    #[must_use]
    pub fn line_total(&self) -> Vnd {
        self.product.unit_price.times(self.quantity)
    }
}

/// The complete ordered collection of line items in the cart
///
/// Insertion order is preserved: new products are appended, quantity
/// edits leave positions untouched. At most one line exists per product
/// id. Every operation is total — unknown ids are silent no-ops and
/// over-ceiling adds clamp rather than fail.
///
/// The ledger is pure in-memory state; persistence lives in
/// [`CartSession`](crate::CartSession).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartLedger {
    items: Vec<LineItem>,
}

impl CartLedger {
    /// Create an empty ledger
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `product`
    ///
    /// An existing line for the same product id merges: its quantity
    /// becomes `min(existing + quantity, stock_ceiling)`. Otherwise a new
    /// line is appended with the quantity as given — the ceiling is
    /// enforced on the merge path only, callers gate the first add
    /// through the catalog's stock display. `quantity == 0` is a no-op
    /// on both paths.
    pub fn add_item(&mut self, product: &ProductSnapshot, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self.items.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line
                .quantity
                .saturating_add(quantity)
                .min(line.product.stock_ceiling);
            return;
        }
        self.items.push(LineItem {
            product: product.clone(),
            quantity,
        });
    }

    /// Remove the line for `product_id`; absent ids are a no-op
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.items.retain(|l| l.product.id != product_id);
    }

    /// Set the quantity of an existing line exactly
    ///
    /// `quantity == 0` removes the line. The stock ceiling is NOT applied
    /// here — deliberately asymmetric with [`add_item`], matching the
    /// surrounding storefront's behavior. Absent ids are a no-op.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(line) = self.items.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Empty the ledger
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Lines in insertion order
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Line for `product_id`, if present
    #[inline]
    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|l| l.product.id == product_id)
    }

    /// Number of distinct lines
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart holds no lines
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities across all lines
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `unit_price × quantity` over captured prices
    #[must_use]
    pub fn total_price(&self) -> Vnd {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Serialize to the persisted JSON shape
    pub fn to_json(&self) -> Result<String, LedgerCodecError> {
        serde_json::to_string(self).map_err(LedgerCodecError::Serialize)
    }

    /// Parse the persisted JSON shape
    ///
    /// Strict: anything but a well-formed sequence of line items is an
    /// error. The tolerant treat-as-empty policy belongs to the session
    /// load path, not the codec.
    pub fn from_json(raw: &str) -> Result<Self, LedgerCodecError> {
        serde_json::from_str(raw).map_err(LedgerCodecError::Parse)
    }
}
