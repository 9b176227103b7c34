//! Expense entry store
//!
//! Holds the canonical expense entries for the session, newest first.

use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{ExpenseEntry, ExpenseEntryId};

/// In-memory store for expense entries
///
/// Entries are kept in insertion order with the newest first. Mutation goes
/// through the service layer; the store itself never validates.
pub struct ExpenseStore {
    entries: RwLock<Vec<ExpenseEntry>>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Insert an entry at the front of the collection
    ///
    /// The caller guarantees the entry already has a unique id and a valid
    /// amount.
    pub fn insert(&self, entry: ExpenseEntry) -> Result<(), LedgerError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| LedgerError::Store(format!("Failed to acquire write lock: {}", e)))?;

        entries.insert(0, entry);
        Ok(())
    }

    /// Remove the entry with the given id
    ///
    /// Returns the removed entry, or `None` if no entry matched.
    pub fn remove(&self, id: ExpenseEntryId) -> Option<ExpenseEntry> {
        let mut entries = self.entries.write().ok()?;
        let position = entries.iter().position(|e| e.id == id)?;
        Some(entries.remove(position))
    }

    /// Get an entry by id
    pub fn get(&self, id: ExpenseEntryId) -> Result<Option<ExpenseEntry>, LedgerError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| LedgerError::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.iter().find(|e| e.id == id).cloned())
    }

    /// Get all entries in stored order (newest first)
    pub fn get_all(&self) -> Result<Vec<ExpenseEntry>, LedgerError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| LedgerError::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.clone())
    }

    /// Number of entries in the store
    pub fn len(&self) -> Result<usize, LedgerError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| LedgerError::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.len())
    }

    /// Check whether the store is empty
    pub fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.len()? == 0)
    }
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}
