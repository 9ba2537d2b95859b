//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stock keeping unit, unique within a catalog
    pub sku: String,

    /// Cost basis for a single unit
    pub purchase_price: Decimal,
}

impl Product {
    /// Create a new product.
    pub fn new(sku: impl Into<String>, purchase_price: Decimal) -> Self {
        Self {
            sku: sku.into(),
            purchase_price,
        }
    }

    /// Cost of `quantity` units at the purchase price, `None` on overflow.
    pub fn cost_of(&self, quantity: u64) -> Option<Decimal> {
        self.purchase_price.checked_mul(Decimal::from(quantity))
    }
}
