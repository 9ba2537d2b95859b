//! Profit Tier Bonus

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::{stats::SellerStat, strategies::BonusStrategy};

/// Bonus as a share of profit, tiered by rank.
///
/// | Rank            | Share |
/// |-----------------|-------|
/// | first           | 15%   |
/// | second or third | 10%   |
/// | last            | 0     |
/// | anyone else     | 5%    |
///
/// Tiers are checked top to bottom, so with two sellers the second earns 10%.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfitTierBonus;

impl ProfitTierBonus {
    /// Share of profit paid at `rank` among `seller_count` sellers.
    pub fn share(rank: usize, seller_count: usize) -> Percentage {
        let points = match rank {
            0 => 15,
            1 | 2 => 10,
            _ if rank + 1 == seller_count => 0,
            _ => 5,
        };

        Percentage::from(Decimal::new(points, 2))
    }
}

impl BonusStrategy for ProfitTierBonus {
    fn bonus(&self, rank: usize, seller_count: usize, seller: &SellerStat) -> Decimal {
        Self::share(rank, seller_count) * seller.profit()
    }
}
