//! Shipping fee and payment totals

use satchel_cart::{CartLedger, Vnd};
use serde::{Deserialize, Serialize};

/// Flat shipping fee waived above a subtotal threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Subtotal at or above which shipping is free
    pub free_threshold: Vnd,
    /// Fee charged below the threshold
    pub flat_fee: Vnd,
}

impl ShippingPolicy {
    /// Fee for a given merchandise subtotal
    #[inline]
    #[must_use]
    pub fn fee(&self, subtotal: Vnd) -> Vnd {
        if subtotal >= self.free_threshold {
            Vnd::ZERO
        } else {
            self.flat_fee
        }
    }
}

impl Default for ShippingPolicy {
    /// Storefront defaults: free at 1 000 000 VND, else 30 000 VND flat
    fn default() -> Self {
        Self {
            free_threshold: Vnd::new(1_000_000),
            flat_fee: Vnd::new(30_000),
        }
    }
}

/// Totals for the checkout summary panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutTotals {
    /// Sum of captured `unit_price × quantity` across the cart
    pub merchandise_total: Vnd,
    /// Shipping fee under the given policy
    pub shipping_fee: Vnd,
    /// Merchandise plus shipping
    pub grand_total: Vnd,
}

impl CheckoutTotals {
    /// Compute totals for the ledger under a shipping policy
    #[must_use]
    pub fn compute(ledger: &CartLedger, policy: &ShippingPolicy) -> Self {
        let merchandise_total = ledger.total_price();
        let shipping_fee = policy.fee(merchandise_total);
        Self {
            merchandise_total,
            shipping_fee,
            grand_total: merchandise_total.saturating_add(shipping_fee),
        }
    }
}

/// Payment breakdown after an account-level discount
///
/// Mirrors the order backend's payment response: merchandise total, the
/// percent discount granted to the account tier, the discount amount, and
/// the final amount due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    /// Merchandise total before discount
    pub merchandise_total: Vnd,
    /// Shipping fee, never discounted
    pub shipping_fee: Vnd,
    /// Discount percent applied to merchandise
    pub discount_percent: u8,
    /// Discount amount, rounded down
    pub discount: Vnd,
    /// Final amount due
    pub amount_due: Vnd,
}

impl PaymentSummary {
    /// Summary with no discount applied
    #[must_use]
    pub fn new(totals: CheckoutTotals) -> Self {
        Self {
            merchandise_total: totals.merchandise_total,
            shipping_fee: totals.shipping_fee,
            discount_percent: 0,
            discount: Vnd::ZERO,
            amount_due: totals.grand_total,
        }
    }

    /// Apply a percent discount to the merchandise portion
    ///
    /// Shipping is charged in full; percentages past 100 cap at 100.
    #[must_use]
    pub fn with_vip_discount(mut self, percent: u8) -> Self {
        let percent = percent.min(100);
        let discount = self.merchandise_total.percent(percent);
        self.discount_percent = percent;
        self.discount = discount;
        self.amount_due = self
            .merchandise_total
            .saturating_sub(discount)
            .saturating_add(self.shipping_fee);
        self
    }
}
