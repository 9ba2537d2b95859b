//! Report Table
//!
//! Renders ranked seller reports as a terminal table followed by a totals summary.

use std::io;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::report::{ReportTotals, SellerReport};

/// Errors that can occur while rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// An amount could not be represented in the currency's minor units.
    #[error("amount {0} cannot be represented as money")]
    AmountOutOfRange(Decimal),

    /// Summing the reports overflowed.
    #[error("report totals overflowed")]
    TotalsOverflow,

    /// Writing to the output failed.
    #[error("IO error")]
    Io,
}

/// Write `reports` as a table, amounts formatted in `currency`.
///
/// # Errors
///
/// Returns a [`ReportError`] if an amount is out of range or the output
/// cannot be written.
pub fn write_report(
    mut out: impl io::Write,
    reports: &[SellerReport],
    currency: &'static Currency,
) -> Result<(), ReportError> {
    let mut builder = Builder::default();

    builder.push_record([
        "#",
        "Seller",
        "Name",
        "Sales",
        "Revenue",
        "Profit",
        "Bonus",
        "Top Products",
    ]);

    for (rank, report) in reports.iter().enumerate() {
        builder.push_record([
            (rank + 1).to_string(),
            report.seller_id.clone(),
            report.name.clone(),
            report.sales_count.to_string(),
            to_money(report.revenue, currency)?.to_string(),
            to_money(report.profit, currency)?.to_string(),
            to_money(report.bonus, currency)?.to_string(),
            top_products_cell(report),
        ]);
    }

    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(
        1,
        HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
    );

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..7), Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| ReportError::Io)?;

    let totals = ReportTotals::from_reports(reports).ok_or(ReportError::TotalsOverflow)?;

    write_summary(&mut out, &totals, currency)
}

fn write_summary(
    out: &mut impl io::Write,
    totals: &ReportTotals,
    currency: &'static Currency,
) -> Result<(), ReportError> {
    let lines = [
        ("Sales:", totals.sales_count.to_string()),
        ("Revenue:", to_money(totals.revenue, currency)?.to_string()),
        ("Profit:", to_money(totals.profit, currency)?.to_string()),
        ("Bonuses:", to_money(totals.bonus, currency)?.to_string()),
    ];

    let label_width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = lines
        .iter()
        .map(|(_, value)| value.chars().count())
        .max()
        .unwrap_or(0);

    for (label, value) in &lines {
        writeln!(out, " {label:>label_width$}  {value:>value_width$}")
            .map_err(|_err| ReportError::Io)?;
    }

    writeln!(out).map_err(|_err| ReportError::Io)
}

fn top_products_cell(report: &SellerReport) -> String {
    report
        .top_products
        .iter()
        .map(|product| format!("{} x{}", product.sku, product.quantity))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert a decimal amount into money in the currency's minor units.
fn to_money(
    amount: Decimal,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, ReportError> {
    let scale = 10_i64
        .checked_pow(currency.exponent)
        .map(Decimal::from)
        .ok_or(ReportError::AmountOutOfRange(amount))?;

    let minor = amount
        .checked_mul(scale)
        .and_then(|value| {
            value
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
        })
        .ok_or(ReportError::AmountOutOfRange(amount))?;

    Ok(Money::from_minor(minor, currency))
}
