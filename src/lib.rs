//! Tallybook - in-memory income/expense ledger for a single business
//!
//! This library is the data model and derivation engine behind a small
//! finance portal: it records income and expense entries, derives summary
//! metrics (totals, net profit, revenue target, profitability), and
//! exports the ledger as a flat CSV report. Presentation is someone
//! else's problem: views call into this crate and render what comes back.
//!
//! # Architecture
//!
//! - `error`: custom error types
//! - `models`: core data models (ids, money, categories, entries, drafts)
//! - `store`: the in-memory entry store, canonical for the session
//! - `services`: the mutation API that validates drafts and commits entries
//! - `reports`: derived financial metrics
//! - `export`: CSV report serialization
//!
//! # Example
//!
//! ```rust
//! use tallybook::{ExpenseDraft, ExpenseService, Ledger, LedgerSummary};
//!
//! let ledger = Ledger::new();
//! let expenses = ExpenseService::new(&ledger);
//!
//! expenses.submit(&ExpenseDraft {
//!     date: "2025-02-01".to_string(),
//!     category: "Office Rent".to_string(),
//!     amount: "1000".to_string(),
//!     ..Default::default()
//! })?;
//!
//! let summary = LedgerSummary::generate(&ledger)?;
//! assert_eq!(summary.net_profit.cents(), -100000);
//! # Ok::<(), tallybook::LedgerError>(())
//! ```

pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod store;

pub use error::{LedgerError, LedgerResult};
pub use export::build_report;
pub use models::{
    ExpenseDraft, ExpenseEntry, ExpenseEntryId, IncomeDraft, IncomeEntry, IncomeEntryId, Money,
};
pub use reports::LedgerSummary;
pub use services::{ExpenseService, IncomeService};
pub use store::Ledger;
