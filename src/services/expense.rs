//! Expense service
//!
//! The only sanctioned way expense entries enter or leave the ledger.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseDraft, ExpenseEntry, ExpenseEntryId};
use crate::store::Ledger;

/// Service for expense entry management
pub struct ExpenseService<'a> {
    ledger: &'a Ledger,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Validate a draft and commit it as a new entry
    ///
    /// On success the entry gets a fresh id and is prepended to the store.
    /// On failure the store is left unchanged; the caller keeps the draft
    /// and decides how to surface the rejection.
    pub fn submit(&self, draft: &ExpenseDraft) -> LedgerResult<ExpenseEntry> {
        let amount = draft
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let entry = ExpenseEntry::with_details(
            draft.date.clone(),
            draft.category.clone(),
            amount,
            draft.description.clone(),
            draft.payment_date.clone(),
        );

        self.ledger.expenses.insert(entry.clone())?;
        Ok(entry)
    }

    /// Delete the entry with the given id
    ///
    /// Idempotent: returns `Ok(true)` if an entry was removed and
    /// `Ok(false)` if the id was absent.
    pub fn delete(&self, id: ExpenseEntryId) -> LedgerResult<bool> {
        Ok(self.ledger.expenses.remove(id).is_some())
    }

    /// Get all expense entries, newest first
    pub fn get_all(&self) -> LedgerResult<Vec<ExpenseEntry>> {
        self.ledger.expenses.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ExpenseDraft {
        ExpenseDraft {
            date: "2025-02-01".to_string(),
            category: "Office Rent".to_string(),
            amount: "1000".to_string(),
            description: "Monthly office rent".to_string(),
            payment_date: "1st of month".to_string(),
        }
    }

    #[test]
    fn test_submit_commits_entry() {
        let ledger = Ledger::new();
        let service = ExpenseService::new(&ledger);

        let entry = service.submit(&draft()).unwrap();

        assert_eq!(entry.amount.cents(), 100000);
        assert_eq!(entry.description, "Monthly office rent");
        assert_eq!(ledger.expenses.len().unwrap(), 1);
    }

    #[test]
    fn test_rejected_draft_leaves_store_unchanged() {
        let ledger = Ledger::new();
        let service = ExpenseService::new(&ledger);
        service.submit(&draft()).unwrap();

        let mut bad = draft();
        bad.amount = "abc".to_string();
        let result = service.submit(&bad);

        assert!(matches!(result, Err(LedgerError::Validation(_))));
        assert_eq!(ledger.expenses.len().unwrap(), 1);
    }

    #[test]
    fn test_empty_category_rejected() {
        let ledger = Ledger::new();
        let service = ExpenseService::new(&ledger);

        let mut bad = draft();
        bad.category = String::new();

        assert!(service.submit(&bad).unwrap_err().is_validation());
        assert!(ledger.expenses.is_empty().unwrap());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let ledger = Ledger::new();
        let service = ExpenseService::new(&ledger);

        let mut bad = draft();
        bad.amount = "-1000".to_string();

        assert!(service.submit(&bad).unwrap_err().is_validation());
        assert!(ledger.expenses.is_empty().unwrap());
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let ledger = Ledger::new();
        let service = ExpenseService::new(&ledger);

        let mut minimal = draft();
        minimal.description = String::new();
        minimal.payment_date = String::new();

        let entry = service.submit(&minimal).unwrap();
        assert!(entry.description.is_empty());
        assert!(entry.payment_date.is_empty());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let ledger = Ledger::new();
        let service = ExpenseService::new(&ledger);

        let entry = service.submit(&draft()).unwrap();

        assert!(service.delete(entry.id).unwrap());
        assert!(!service.delete(entry.id).unwrap());
    }

    #[test]
    fn test_delete_missing_id_never_errors() {
        let ledger = Ledger::new();
        let service = ExpenseService::new(&ledger);
        service.submit(&draft()).unwrap();

        assert!(!service.delete(ExpenseEntryId::new()).unwrap());
        assert_eq!(ledger.expenses.len().unwrap(), 1);
    }
}
