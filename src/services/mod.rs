//! Service layer for Tallybook
//!
//! The service layer is the mutation API: it validates raw drafts, assigns
//! ids, and commits entries to the store. The presentation layer never
//! constructs or removes entries directly.

pub mod expense;
pub mod income;

pub use expense::ExpenseService;
pub use income::IncomeService;
