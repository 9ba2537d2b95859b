//! Seller Reports

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{rounding::round_money, stats::SellerStat};

pub mod table;

/// Units sold of one sku.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    /// Product sold
    pub sku: String,

    /// Cumulative units sold
    pub quantity: u64,
}

impl TopProduct {
    /// Create a new top product entry.
    pub fn new(sku: impl Into<String>, quantity: u64) -> Self {
        Self {
            sku: sku.into(),
            quantity,
        }
    }
}

/// Final, ranked statistics for one seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerReport {
    /// Seller identifier
    pub seller_id: String,

    /// Seller display name
    pub name: String,

    /// Revenue, rounded to two decimal places
    pub revenue: Decimal,

    /// Profit, rounded to two decimal places
    pub profit: Decimal,

    /// Number of purchase records
    pub sales_count: u64,

    /// Best-selling products, descending by quantity
    pub top_products: SmallVec<[TopProduct; 10]>,

    /// Bonus, rounded to two decimal places
    pub bonus: Decimal,
}

impl SellerReport {
    /// Project a ranked accumulator and its bonus into a report row.
    pub fn from_stat(stat: &SellerStat, bonus: Decimal, top_products_limit: usize) -> Self {
        Self {
            seller_id: stat.id().to_string(),
            name: stat.name().to_string(),
            revenue: round_money(stat.revenue()),
            profit: round_money(stat.profit()),
            sales_count: stat.sales_count(),
            top_products: stat.top_products(top_products_limit),
            bonus: round_money(bonus),
        }
    }
}

/// Sums over a set of reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportTotals {
    /// Total revenue
    pub revenue: Decimal,

    /// Total profit
    pub profit: Decimal,

    /// Total bonus payable
    pub bonus: Decimal,

    /// Total purchase records
    pub sales_count: u64,
}

impl ReportTotals {
    /// Sum the rounded figures of every report. `None` if any sum overflows.
    pub fn from_reports(reports: &[SellerReport]) -> Option<Self> {
        reports.iter().try_fold(Self::default(), |totals, report| {
            Some(Self {
                revenue: totals.revenue.checked_add(report.revenue)?,
                profit: totals.profit.checked_add(report.profit)?,
                bonus: totals.bonus.checked_add(report.bonus)?,
                sales_count: totals.sales_count.checked_add(report.sales_count)?,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use smallvec::smallvec;
    use testresult::TestResult;

    use crate::sellers::Seller;

    use super::*;

    fn report(seller_id: &str, revenue: Decimal, profit: Decimal, bonus: Decimal) -> SellerReport {
        SellerReport {
            seller_id: seller_id.to_string(),
            name: seller_id.to_string(),
            revenue,
            profit,
            sales_count: 1,
            top_products: smallvec![],
            bonus,
        }
    }

    #[test]
    fn from_stat_rounds_money_fields() {
        let mut stat = SellerStat::new(&Seller::new("seller_1", "Oleg", "Sidorov"));

        stat.set_revenue(dec!(10.005));
        stat.add_profit(dec!(3.3333));
        stat.record_sale();
        stat.add_quantity("SKU_001", 4);

        let report = SellerReport::from_stat(&stat, dec!(0.49999), 10);

        assert_eq!(report.seller_id, "seller_1");
        assert_eq!(report.name, "Oleg Sidorov");
        assert_eq!(report.revenue, dec!(10.01));
        assert_eq!(report.profit, dec!(3.33));
        assert_eq!(report.bonus, dec!(0.50));
        assert_eq!(report.sales_count, 1);
        assert_eq!(report.top_products.as_slice(), [TopProduct::new("SKU_001", 4)]);
    }

    #[test]
    fn totals_sum_every_report() -> TestResult {
        let reports = [
            report("seller_1", dec!(100.10), dec!(40.00), dec!(6.00)),
            report("seller_2", dec!(50.05), dec!(-5.00), dec!(0)),
        ];

        let totals = ReportTotals::from_reports(&reports).ok_or("totals overflowed")?;

        assert_eq!(totals.revenue, dec!(150.15));
        assert_eq!(totals.profit, dec!(35.00));
        assert_eq!(totals.bonus, dec!(6.00));
        assert_eq!(totals.sales_count, 2);

        Ok(())
    }

    #[test]
    fn totals_of_no_reports_are_zero() {
        assert_eq!(ReportTotals::from_reports(&[]), Some(ReportTotals::default()));
    }

    #[test]
    fn overflowing_totals_are_none() {
        let reports = [
            report("seller_1", Decimal::MAX, dec!(1), dec!(0)),
            report("seller_2", Decimal::MAX, dec!(1), dec!(0)),
        ];

        assert_eq!(ReportTotals::from_reports(&reports), None);
    }
}
