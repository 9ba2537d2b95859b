//! Sales Analysis
//!
//! Turns a [`SalesData`] bundle into one [`SellerReport`] per seller, ranked by
//! profit. The pipeline runs in a fixed order:
//!
//! 1. the bundle and options are validated,
//! 2. each purchase record is replayed into its seller's [`SellerStat`],
//! 3. sellers are ranked by profit and bonuses are assigned by rank,
//! 4. every ranked seller is projected into a rounded report row.
//!
//! Any error aborts the whole analysis; there are no partial results.
//!
//! [`SellerStat`]: crate::stats::SellerStat

use thiserror::Error;
use tracing::debug;

use crate::{
    data::{InvalidInputError, SalesData},
    report::SellerReport,
    strategies::MissingStrategyError,
};

pub mod index;
pub mod options;
pub mod ranking;
pub mod replay;

pub use options::{AnalysisOptions, DEFAULT_TOP_PRODUCTS_LIMIT};

/// Errors that abort an analysis.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input bundle was unusable.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    /// A required strategy was not configured.
    #[error(transparent)]
    MissingStrategy(#[from] MissingStrategyError),
}

/// Compute ranked per-seller statistics.
///
/// The result has one entry per input seller, ordered by descending profit.
///
/// # Errors
///
/// - [`AnalysisError::InvalidInput`]: a collection is empty, an item
///   references a sku missing from the product catalog, or an accumulated
///   amount or quantity overflows.
/// - [`AnalysisError::MissingStrategy`]: the revenue or bonus strategy is unset.
#[tracing::instrument(
    skip_all,
    fields(
        sellers = data.sellers.len(),
        products = data.products.len(),
        purchase_records = data.purchase_records.len(),
    )
)]
pub fn analyze(
    data: &SalesData,
    options: &AnalysisOptions<'_>,
) -> Result<Vec<SellerReport>, AnalysisError> {
    data.validate()?;

    let (revenue, bonus) = options.strategies()?;

    let (index, mut stats) = index::SalesIndex::build(data);

    let skipped = replay::replay_records(
        &data.purchase_records,
        &index,
        &mut stats,
        revenue,
        options.rounding(),
    )?;

    ranking::rank_by_profit(&mut stats);
    let bonuses = ranking::assign_bonuses(&stats, bonus);

    debug!(skipped, ranked = stats.len(), "ranked sellers");

    let limit = options.top_products_limit();

    Ok(stats
        .iter()
        .zip(bonuses)
        .map(|(stat, bonus)| SellerReport::from_stat(stat, bonus, limit))
        .collect())
}
