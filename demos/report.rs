//! Report Example
//!
//! Analyses a fixture set with the reference revenue and bonus strategies and
//! prints the ranked sellers.
//!
//! Use `-f` to load a fixture set by name
//! Use `-c` to choose the display currency
//! Use `-t` to limit the products listed per seller
//! Set `RUST_LOG=debug` to see skipped records

use std::{io, time::Instant};

use anyhow::{Result, anyhow};
use clap::Parser;
use rusty_money::iso;
use tally::{prelude::*, utils::ReportArgs};
use tracing_subscriber::EnvFilter;

/// Report Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = ReportArgs::parse();

    let currency =
        iso::find(&args.currency).ok_or_else(|| anyhow!("unknown currency {}", args.currency))?;

    let data = Fixture::from_set(&args.fixture)?.into_data();

    let options = AnalysisOptions::reference()
        .with_top_products_limit(args.top)
        .with_rounding(args.rounding());

    let start = Instant::now();
    let reports = analyze(&data, &options)?;
    let elapsed = start.elapsed().as_secs_f32();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_report(&mut handle, &reports, currency)?;

    println!("Analysed {} records in {elapsed}s", data.purchase_records.len());

    Ok(())
}
