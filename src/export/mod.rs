//! Export module for Tallybook
//!
//! Serializes the ledger and its summary into the flat CSV report handed
//! to the presentation layer.

pub mod csv;

pub use csv::{build_report, write_report, REPORT_TITLE};
