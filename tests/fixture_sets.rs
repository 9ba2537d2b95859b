//! Integration tests driven by the fixture sets under `fixtures/`.
//!
//! Expected figures for the `basic` set were worked out independently from the
//! raw records with the reference strategies:
//!
//! | Rank | Seller   | Revenue | Profit | Sales | Bonus  |
//! |------|----------|---------|--------|-------|--------|
//! | 1    | seller_5 | 2747.10 | 711.93 | 12    | 106.79 |
//! | 2    | seller_1 | 1493.75 | 327.78 | 7     | 32.78  |
//! | 3    | seller_4 | 1034.21 | 285.79 | 3     | 28.58  |
//! | 4    | seller_2 | 1184.39 | 257.14 | 5     | 12.86  |
//! | 5    | seller_3 | 669.00  | 208.54 | 3     | 0.00   |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use rusty_money::iso::RUB;
use testresult::TestResult;

use tally::{
    analysis::{AnalysisOptions, analyze},
    fixtures::Fixture,
    report::{SellerReport, TopProduct, table::write_report},
};

fn analyze_set(name: &str) -> Result<Vec<SellerReport>, Box<dyn std::error::Error>> {
    let data = Fixture::from_set(name)?.into_data();

    Ok(analyze(&data, &AnalysisOptions::reference())?)
}

fn ids(reports: &[SellerReport]) -> Vec<&str> {
    reports.iter().map(|report| report.seller_id.as_str()).collect()
}

#[test]
fn basic_set_ranking_and_figures() -> TestResult {
    let reports = analyze_set("basic")?;

    assert_eq!(
        ids(&reports),
        ["seller_5", "seller_1", "seller_4", "seller_2", "seller_3"]
    );

    let figures: Vec<(Decimal, Decimal, u64, Decimal)> = reports
        .iter()
        .map(|report| (report.revenue, report.profit, report.sales_count, report.bonus))
        .collect();

    assert_eq!(
        figures,
        [
            (dec!(2747.10), dec!(711.93), 12, dec!(106.79)),
            (dec!(1493.75), dec!(327.78), 7, dec!(32.78)),
            (dec!(1034.21), dec!(285.79), 3, dec!(28.58)),
            (dec!(1184.39), dec!(257.14), 5, dec!(12.86)),
            (dec!(669.00), dec!(208.54), 3, Decimal::ZERO),
        ]
    );

    Ok(())
}

#[test]
fn basic_set_top_products() -> TestResult {
    let reports = analyze_set("basic")?;

    let leader = reports.first().ok_or("no reports")?;

    // seller_5 sold 14 distinct skus
    assert_eq!(leader.top_products.len(), 10);
    assert_eq!(
        leader.top_products.get(..3),
        Some(
            [
                TopProduct::new("SKU_013", 18),
                TopProduct::new("SKU_009", 14),
                TopProduct::new("SKU_005", 11),
            ]
            .as_slice()
        )
    );

    let runner_up = reports.get(1).ok_or("no runner up")?;

    assert_eq!(
        runner_up.top_products.first(),
        Some(&TopProduct::new("SKU_006", 19))
    );

    Ok(())
}

#[test]
fn tolerant_set_skips_unknown_sellers() -> TestResult {
    let reports = analyze_set("tolerant")?;

    assert_eq!(ids(&reports), ["seller_2", "seller_1", "seller_3"]);

    let [first, second, third] = reports.as_slice() else {
        return Err("expected three reports".into());
    };

    assert_eq!(first.revenue, dec!(42.60));
    assert_eq!(first.profit, dec!(15.60));
    assert_eq!(first.bonus, dec!(2.34));
    assert_eq!(
        first.top_products.as_slice(),
        [TopProduct::new("SKU_002", 4), TopProduct::new("SKU_001", 1)]
    );

    assert_eq!(second.revenue, dec!(45));
    assert_eq!(second.profit, dec!(15));
    assert_eq!(second.bonus, dec!(1.50));
    assert_eq!(second.top_products.as_slice(), [TopProduct::new("SKU_001", 3)]);

    assert_eq!(third.sales_count, 0);
    assert_eq!(third.bonus, Decimal::ZERO);

    Ok(())
}

#[test]
fn ties_set_keeps_encounter_order() -> TestResult {
    let reports = analyze_set("ties")?;

    assert_eq!(ids(&reports), ["seller_b", "seller_c", "seller_a", "seller_d"]);

    let leader = reports.first().ok_or("no reports")?;

    assert_eq!(leader.profit, dec!(20));
    assert_eq!(leader.bonus, dec!(3.00));
    assert_eq!(
        leader.top_products.as_slice(),
        [
            TopProduct::new("SKU_GREEN", 2),
            TopProduct::new("SKU_RED", 2),
            TopProduct::new("SKU_BLUE", 2),
        ]
    );

    assert_eq!(reports.get(1).map(|report| report.bonus), Some(dec!(2.00)));

    Ok(())
}

#[test]
fn basic_set_renders_as_table() -> TestResult {
    let reports = analyze_set("basic")?;

    let mut out = Vec::new();
    write_report(&mut out, &reports, RUB)?;

    let output = String::from_utf8(out)?;

    assert!(output.contains("Marina Volkova"));
    assert!(output.contains("SKU_013 x18"));
    assert!(output.contains("Sales:"));

    Ok(())
}
