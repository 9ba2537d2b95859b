//! Rounding

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for monetary amounts in reports.
pub const MONEY_DP: u32 = 2;

/// Round a monetary amount to [`MONEY_DP`] places, midpoints away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// When accumulated amounts are rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoundingPolicy {
    /// Accumulate at full precision and round only when projecting the report.
    #[default]
    Final,

    /// Round a seller's running revenue after every item.
    ///
    /// Profit and bonus are still rounded only in the report. Matches figures
    /// produced by legacy consumers of this calculation.
    Incremental,
}

impl RoundingPolicy {
    /// Add `amount` to a running revenue total under this policy.
    ///
    /// Returns `None` if the sum overflows.
    pub fn accumulate_revenue(self, total: Decimal, amount: Decimal) -> Option<Decimal> {
        let sum = total.checked_add(amount)?;

        Some(match self {
            RoundingPolicy::Final => sum,
            RoundingPolicy::Incremental => round_money(sum),
        })
    }
}
