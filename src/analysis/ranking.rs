//! Ranking

use rust_decimal::Decimal;

use crate::{stats::SellerStat, strategies::BonusStrategy};

/// Order sellers by profit, highest first. Equal profits keep their input order.
pub fn rank_by_profit(stats: &mut [SellerStat]) {
    stats.sort_by(|a, b| b.profit().cmp(&a.profit()));
}

/// Bonus for each ranked seller, in rank order.
///
/// Must be called once the ranking is final, since each bonus depends on rank.
pub fn assign_bonuses(ranked: &[SellerStat], bonus: &dyn BonusStrategy) -> Vec<Decimal> {
    let seller_count = ranked.len();

    ranked
        .iter()
        .enumerate()
        .map(|(rank, stat)| bonus.bonus(rank, seller_count, stat))
        .collect()
}
