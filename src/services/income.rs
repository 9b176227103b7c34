//! Income service
//!
//! The only sanctioned way income entries enter or leave the ledger.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{IncomeDraft, IncomeEntry, IncomeEntryId};
use crate::store::Ledger;

/// Service for income entry management
pub struct IncomeService<'a> {
    ledger: &'a Ledger,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Validate a draft and commit it as a new entry
    ///
    /// On success the entry gets a fresh id and is prepended to the store.
    /// On failure the store is left unchanged; the caller keeps the draft
    /// and decides how to surface the rejection.
    pub fn submit(&self, draft: &IncomeDraft) -> LedgerResult<IncomeEntry> {
        let amount = draft
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let entry = IncomeEntry::with_details(
            draft.date.clone(),
            draft.category.clone(),
            amount,
            draft.client.clone(),
            draft.project.clone(),
        );

        self.ledger.income.insert(entry.clone())?;
        Ok(entry)
    }

    /// Delete the entry with the given id
    ///
    /// Idempotent: returns `Ok(true)` if an entry was removed and
    /// `Ok(false)` if the id was absent.
    pub fn delete(&self, id: IncomeEntryId) -> LedgerResult<bool> {
        Ok(self.ledger.income.remove(id).is_some())
    }

    /// Get all income entries, newest first
    pub fn get_all(&self) -> LedgerResult<Vec<IncomeEntry>> {
        self.ledger.income.get_all()
    }
}
