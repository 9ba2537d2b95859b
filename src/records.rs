//! Purchase Records

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single line within a purchase record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseItem {
    /// Product sold
    pub sku: String,

    /// Units sold
    pub quantity: u64,

    /// Unit sale price before discount
    pub sale_price: Decimal,

    /// Discount in percent points, e.g. `5` for 5%
    #[serde(default)]
    pub discount: Decimal,
}

impl PurchaseItem {
    /// Create a new purchase item.
    pub fn new(
        sku: impl Into<String>,
        quantity: u64,
        sale_price: Decimal,
        discount: Decimal,
    ) -> Self {
        Self {
            sku: sku.into(),
            quantity,
            sale_price,
            discount,
        }
    }

    /// Sale price multiplied by quantity, before any discount. `None` on overflow.
    pub fn gross(&self) -> Option<Decimal> {
        self.sale_price.checked_mul(Decimal::from(self.quantity))
    }

    /// The discount as a fraction, e.g. `0.05` for a 5 point discount.
    pub fn discount_rate(&self) -> Percentage {
        Percentage::from(self.discount / Decimal::ONE_HUNDRED)
    }
}

/// A transaction by one seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Seller responsible for the sale
    pub seller_id: String,

    /// Lines in this transaction
    pub items: SmallVec<[PurchaseItem; 4]>,
}

impl PurchaseRecord {
    /// Create a new purchase record.
    pub fn new(
        seller_id: impl Into<String>,
        items: impl IntoIterator<Item = PurchaseItem>,
    ) -> Self {
        Self {
            seller_id: seller_id.into(),
            items: items.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn gross_ignores_discount() {
        let item = PurchaseItem::new("SKU_001", 3, dec!(10.00), dec!(50));

        assert_eq!(item.gross(), Some(dec!(30.00)));
    }

    #[test]
    fn gross_overflow_is_none() {
        let item = PurchaseItem::new("SKU_001", u64::MAX, dec!(10000000000), Decimal::ZERO);

        assert_eq!(item.gross(), None);
    }

    #[test]
    fn discount_rate_is_fractional() {
        let item = PurchaseItem::new("SKU_001", 1, dec!(10.00), dec!(25));

        assert_eq!(item.discount_rate() * Decimal::ONE, dec!(0.25));
    }

    #[test]
    fn discount_defaults_to_zero_when_absent() -> testresult::TestResult {
        let item: PurchaseItem =
            serde_norway::from_str("sku: SKU_001\nquantity: 2\nsale_price: 4.5\n")?;

        assert_eq!(item.discount, Decimal::ZERO);
        assert_eq!(item.sale_price, dec!(4.5));

        Ok(())
    }
}
