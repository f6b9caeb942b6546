//! Product records as captured at add-to-cart time

use serde::{Deserialize, Serialize};

use crate::money::Vnd;

/// Backend-assigned product identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    /// Wrap a raw backend id
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product category reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Backend-assigned category id
    pub id: u64,
    /// Display name
    pub name: String,
}

impl Category {
    /// Create a category reference
    #[inline]
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Product fields captured when an item enters the cart
///
/// This is a snapshot, not a live view: the unit price and stock ceiling
/// are whatever the catalog said at add time. A price change on the
/// backend is not reflected until the product is re-added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Product identifier
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Unit price at capture time
    pub unit_price: Vnd,
    /// Maximum purchasable quantity at capture time
    pub stock_ceiling: u32,
    /// Category the product was listed under
    pub category: Category,
    /// Primary image reference
    pub image_url: String,
}

impl ProductSnapshot {
    /// Capture a product record
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Vnd,
        stock_ceiling: u32,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            stock_ceiling,
            category,
            image_url: String::new(),
        }
    }

    /// With an image reference
    #[inline]
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Check whether the snapshot had any purchasable stock
    #[inline]
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock_ceiling > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> ProductSnapshot {
        ProductSnapshot::new(
            ProductId::new(1),
            "Elegance Premium Handbag",
            Vnd::new(2_890_000),
            15,
            Category::new(1, "Handbags"),
        )
        .with_image_url("https://img.example/1.jpg")
    }

    #[test]
    fn builder_captures_fields() {
        let p = snapshot();
        assert_eq!(p.id, ProductId::new(1));
        assert_eq!(p.unit_price, Vnd::new(2_890_000));
        assert_eq!(p.stock_ceiling, 15);
        assert!(p.in_stock());
    }

    #[test]
    fn out_of_stock_snapshot() {
        let mut p = snapshot();
        p.stock_ceiling = 0;
        assert!(!p.in_stock());
    }

    #[test]
    fn product_id_display() {
        assert_eq!(ProductId::new(42).to_string(), "42");
    }

    #[test]
    fn serde_round_trip() {
        let p = snapshot();
        let json = serde_json::to_string(&p).unwrap();
        let back: ProductSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
