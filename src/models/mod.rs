//! Core data models for Tallybook
//!
//! This module contains the data structures that represent the ledger
//! domain: entry ids, money amounts, category label sets, committed
//! entries, and the raw drafts they are created from.

pub mod category;
pub mod entry;
pub mod ids;
pub mod money;

pub use category::{is_expense_category, is_income_category, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub use entry::{EntryValidationError, ExpenseDraft, ExpenseEntry, IncomeDraft, IncomeEntry};
pub use ids::{ExpenseEntryId, IncomeEntryId};
pub use money::Money;
