//! Order projection

use satchel_cart::{CartLedger, ProductId};
use serde::{Deserialize, Serialize};

/// One line of an order request: product id and quantity, nothing else
///
/// The order backend re-resolves names and prices server-side, so the
/// projection deliberately drops the rest of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product to order
    pub id: ProductId,
    /// Units to order
    pub quantity: u32,
}

/// Project the ledger into order lines, preserving cart order
#[must_use]
pub fn order_lines(ledger: &CartLedger) -> Vec<OrderLine> {
    ledger
        .items()
        .iter()
        .map(|line| OrderLine {
            id: line.product.id,
            quantity: line.quantity,
        })
        .collect()
}
