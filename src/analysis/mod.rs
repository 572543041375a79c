//! Issue extraction and aggregation.
//!
//! [`parser`] turns a single marked line into a record, [`aggregator`]
//! drives it over every document in the vault.

pub mod aggregator;
pub mod parser;

pub use aggregator::*;
