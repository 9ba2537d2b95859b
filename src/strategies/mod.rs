//! Calculation Strategies
//!
//! The analysis has no pricing or incentive policy of its own. Revenue per item
//! and bonus per seller are delegated to a [`RevenueStrategy`] and a
//! [`BonusStrategy`]. Closures with the matching signature implement both
//! traits, and [`SimpleRevenue`] / [`ProfitTierBonus`] are provided as
//! reference policies.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{products::Product, records::PurchaseItem, stats::SellerStat};

pub mod bonus;
pub mod revenue;

pub use bonus::ProfitTierBonus;
pub use revenue::SimpleRevenue;

/// Errors raised when a required strategy was not configured.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MissingStrategyError {
    /// No revenue strategy was configured.
    #[error("no revenue strategy configured")]
    Revenue,

    /// No bonus strategy was configured.
    #[error("no bonus strategy configured")]
    Bonus,
}

/// Computes the revenue earned by one purchase item.
pub trait RevenueStrategy {
    /// Revenue for `item`, sold from the catalog entry `product`.
    ///
    /// Returns `None` if the amount cannot be represented.
    fn revenue(&self, item: &PurchaseItem, product: &Product) -> Option<Decimal>;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&PurchaseItem, &Product) -> Decimal,
{
    fn revenue(&self, item: &PurchaseItem, product: &Product) -> Option<Decimal> {
        Some(self(item, product))
    }
}

/// Computes a seller's bonus from their final rank.
pub trait BonusStrategy {
    /// Bonus for `seller` at zero-based `rank` among `seller_count` sellers.
    fn bonus(&self, rank: usize, seller_count: usize, seller: &SellerStat) -> Decimal;
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStat) -> Decimal,
{
    fn bonus(&self, rank: usize, seller_count: usize, seller: &SellerStat) -> Decimal {
        self(rank, seller_count, seller)
    }
}
