//! Income entry store
//!
//! Holds the canonical income entries for the session, newest first.

use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{IncomeEntry, IncomeEntryId};

/// In-memory store for income entries
///
/// Entries are kept in insertion order with the newest first. Mutation goes
/// through the service layer; the store itself never validates.
pub struct IncomeStore {
    entries: RwLock<Vec<IncomeEntry>>,
}

impl IncomeStore {
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
    pub fn insert(&self, entry: IncomeEntry) -> Result<(), LedgerError> {
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
    pub fn remove(&self, id: IncomeEntryId) -> Option<IncomeEntry> {
        let mut entries = self.entries.write().ok()?;
        let position = entries.iter().position(|e| e.id == id)?;
        Some(entries.remove(position))
    }

    /// Get an entry by id
    pub fn get(&self, id: IncomeEntryId) -> Result<Option<IncomeEntry>, LedgerError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| LedgerError::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.iter().find(|e| e.id == id).cloned())
    }

    /// Get all entries in stored order (newest first)
    pub fn get_all(&self) -> Result<Vec<IncomeEntry>, LedgerError> {
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

impl Default for IncomeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn entry(category: &str, cents: i64) -> IncomeEntry {
        IncomeEntry::new("2025-01-15", category, Money::from_cents(cents))
    }

    #[test]
    fn test_insert_and_get() {
        let store = IncomeStore::new();
        let e = entry("Consulting", 200000);
        let id = e.id;

        store.insert(e).unwrap();

        let retrieved = store.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.cents(), 200000);
    }

    #[test]
    fn test_newest_first_order() {
        let store = IncomeStore::new();
        store.insert(entry("Consulting", 100)).unwrap();
        store.insert(entry("Retainer", 200)).unwrap();
        store.insert(entry("Video Ads", 300)).unwrap();

        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].category, "Video Ads");
        assert_eq!(all[1].category, "Retainer");
        assert_eq!(all[2].category, "Consulting");
    }

    #[test]
    fn test_remove() {
        let store = IncomeStore::new();
        let e = entry("Consulting", 100);
        let id = e.id;
        store.insert(e).unwrap();

        let removed = store.remove(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let store = IncomeStore::new();
        store.insert(entry("Consulting", 100)).unwrap();

        assert!(store.remove(IncomeEntryId::new()).is_none());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_get_missing_id() {
        let store = IncomeStore::new();
        assert!(store.get(IncomeEntryId::new()).unwrap().is_none());
    }
}
