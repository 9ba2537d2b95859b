//! Utils

use clap::Parser;

use crate::{analysis::DEFAULT_TOP_PRODUCTS_LIMIT, rounding::RoundingPolicy};

/// Arguments for the report demo
#[derive(Debug, Parser)]
pub struct ReportArgs {
    /// Fixture set to analyse
    #[clap(short, long, default_value = "basic")]
    pub fixture: String,

    /// ISO currency code used to display amounts
    #[clap(short, long, default_value = "RUB")]
    pub currency: String,

    /// Number of products listed per seller
    #[clap(short, long, default_value_t = DEFAULT_TOP_PRODUCTS_LIMIT)]
    pub top: usize,

    /// Round running revenue after every item instead of only in the report
    #[clap(long)]
    pub incremental_rounding: bool,
}

impl ReportArgs {
    /// The rounding policy selected on the command line.
    pub fn rounding(&self) -> RoundingPolicy {
        if self.incremental_rounding {
            RoundingPolicy::Incremental
        } else {
            RoundingPolicy::Final
        }
    }
}
