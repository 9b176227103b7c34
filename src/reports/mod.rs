//! Reports module for Tallybook
//!
//! Derived financial metrics computed from current ledger state.

pub mod summary;

pub use summary::{LedgerSummary, REVENUE_TARGET_RATIO};
