//! Simple Revenue

use rust_decimal::Decimal;

use crate::{products::Product, records::PurchaseItem, strategies::RevenueStrategy};

/// Sale price times quantity, less the item's percentage discount.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueStrategy for SimpleRevenue {
    fn revenue(&self, item: &PurchaseItem, _product: &Product) -> Option<Decimal> {
        let gross = item.gross()?;
        let rate = item.discount_rate() * Decimal::ONE;

        gross.checked_sub(rate.checked_mul(gross)?)
    }
}
