//! Seller Statistics
//!
//! Working state accumulated for one seller while purchase records are replayed.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{report::TopProduct, sellers::Seller};

/// Running quantity for one sku, remembering when it was first sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SoldQuantity {
    quantity: u64,
    first_seen: usize,
}

/// Per-seller accumulator.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStat {
    id: String,
    name: String,
    revenue: Decimal,
    profit: Decimal,
    sales_count: u64,
    products_sold: FxHashMap<String, SoldQuantity>,
}

impl SellerStat {
    /// Create an empty accumulator for a seller.
    pub fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: seller.full_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: FxHashMap::default(),
        }
    }

    /// Seller identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Seller display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Revenue accumulated so far
    pub fn revenue(&self) -> Decimal {
        self.revenue
    }

    /// Profit accumulated so far, unrounded
    pub fn profit(&self) -> Decimal {
        self.profit
    }

    /// Number of purchase records attributed to this seller
    pub fn sales_count(&self) -> u64 {
        self.sales_count
    }

    /// Total units sold of `sku`
    pub fn quantity_sold(&self, sku: &str) -> u64 {
        self.products_sold
            .get(sku)
            .map_or(0, |sold| sold.quantity)
    }

    /// Count one more purchase record. `None` if the count would overflow.
    pub(crate) fn record_sale(&mut self) -> Option<()> {
        self.sales_count = self.sales_count.checked_add(1)?;

        Some(())
    }

    pub(crate) fn set_revenue(&mut self, revenue: Decimal) {
        self.revenue = revenue;
    }

    /// Add to running profit. `None` on overflow, leaving profit unchanged.
    pub(crate) fn add_profit(&mut self, profit: Decimal) -> Option<()> {
        self.profit = self.profit.checked_add(profit)?;

        Some(())
    }

    /// Add units sold of `sku`. `None` on overflow, leaving the count unchanged.
    pub(crate) fn add_quantity(&mut self, sku: &str, quantity: u64) -> Option<()> {
        let first_seen = self.products_sold.len();

        let sold = self
            .products_sold
            .entry(sku.to_string())
            .or_insert(SoldQuantity {
                quantity: 0,
                first_seen,
            });

        sold.quantity = sold.quantity.checked_add(quantity)?;

        Some(())
    }

    /// Best-selling skus by quantity, at most `limit` of them.
    ///
    /// Equal quantities keep the order in which the skus were first sold.
    pub fn top_products(&self, limit: usize) -> SmallVec<[TopProduct; 10]> {
        let mut sold: SmallVec<[(&String, SoldQuantity); 16]> = self
            .products_sold
            .iter()
            .map(|(sku, sold)| (sku, *sold))
            .collect();

        sold.sort_by(|(_, a), (_, b)| {
            b.quantity
                .cmp(&a.quantity)
                .then(a.first_seen.cmp(&b.first_seen))
        });

        sold.into_iter()
            .take(limit)
            .map(|(sku, sold)| TopProduct::new(sku.clone(), sold.quantity))
            .collect()
    }
}
