//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    analysis::{AnalysisError, AnalysisOptions, DEFAULT_TOP_PRODUCTS_LIMIT, analyze},
    data::{InvalidInputError, SalesData},
    fixtures::{Fixture, FixtureError},
    products::Product,
    records::{PurchaseItem, PurchaseRecord},
    report::{
        ReportTotals, SellerReport, TopProduct,
        table::{ReportError, write_report},
    },
    rounding::RoundingPolicy,
    sellers::Seller,
    stats::SellerStat,
    strategies::{
        BonusStrategy, MissingStrategyError, ProfitTierBonus, RevenueStrategy, SimpleRevenue,
    },
};
