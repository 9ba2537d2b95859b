//! Tally
//!
//! Tally computes per-seller sales statistics from sellers, products and
//! purchase records: revenue, profit, number of sales, best-selling products
//! and a bonus assigned by profit rank.
//!
//! Revenue and bonus policies are supplied by the caller as strategies; see
//! [`analysis::analyze`] for the entry point.

pub mod analysis;
pub mod data;
pub mod fixtures;
pub mod prelude;
pub mod products;
pub mod records;
pub mod report;
pub mod rounding;
pub mod sellers;
pub mod stats;
pub mod strategies;
pub mod utils;
