//! Analysis Options

use std::fmt;

use crate::{
    rounding::RoundingPolicy,
    strategies::{
        BonusStrategy, MissingStrategyError, ProfitTierBonus, RevenueStrategy, SimpleRevenue,
    },
};

/// Default number of products listed per seller.
pub const DEFAULT_TOP_PRODUCTS_LIMIT: usize = 10;

/// Strategies and settings for one analysis.
///
/// Both strategies start out unset; [`analyze`](crate::analysis::analyze)
/// refuses to run until each has been provided.
#[derive(Clone, Copy)]
pub struct AnalysisOptions<'s> {
    revenue: Option<&'s dyn RevenueStrategy>,
    bonus: Option<&'s dyn BonusStrategy>,
    top_products_limit: usize,
    rounding: RoundingPolicy,
}

impl<'s> AnalysisOptions<'s> {
    /// Options with no strategies configured.
    pub const fn new() -> Self {
        Self {
            revenue: None,
            bonus: None,
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
            rounding: RoundingPolicy::Final,
        }
    }

    /// Options wired to [`SimpleRevenue`] and [`ProfitTierBonus`].
    pub fn reference() -> AnalysisOptions<'static> {
        AnalysisOptions::new()
            .with_revenue(&SimpleRevenue)
            .with_bonus(&ProfitTierBonus)
    }

    /// Set the revenue strategy.
    #[must_use]
    pub const fn with_revenue(mut self, revenue: &'s dyn RevenueStrategy) -> Self {
        self.revenue = Some(revenue);
        self
    }

    /// Set the bonus strategy.
    #[must_use]
    pub const fn with_bonus(mut self, bonus: &'s dyn BonusStrategy) -> Self {
        self.bonus = Some(bonus);
        self
    }

    /// Set how many products are listed per seller.
    #[must_use]
    pub const fn with_top_products_limit(mut self, limit: usize) -> Self {
        self.top_products_limit = limit;
        self
    }

    /// Set the rounding policy.
    #[must_use]
    pub const fn with_rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.rounding = rounding;
        self
    }

    /// Number of products listed per seller
    pub const fn top_products_limit(&self) -> usize {
        self.top_products_limit
    }

    /// Rounding policy
    pub const fn rounding(&self) -> RoundingPolicy {
        self.rounding
    }

    /// Both strategies, checking revenue first.
    ///
    /// # Errors
    ///
    /// Returns [`MissingStrategyError`] naming the first strategy not set.
    pub fn strategies(
        &self,
    ) -> Result<(&'s dyn RevenueStrategy, &'s dyn BonusStrategy), MissingStrategyError> {
        let revenue = self.revenue.ok_or(MissingStrategyError::Revenue)?;
        let bonus = self.bonus.ok_or(MissingStrategyError::Bonus)?;

        Ok((revenue, bonus))
    }
}

impl Default for AnalysisOptions<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AnalysisOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("revenue", &self.revenue.is_some())
            .field("bonus", &self.bonus.is_some())
            .field("top_products_limit", &self.top_products_limit)
            .field("rounding", &self.rounding)
            .finish()
    }
}
