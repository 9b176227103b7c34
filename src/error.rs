//! Custom error types for Tallybook
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Tallybook operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Validation errors for entry drafts
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    ///
    /// Entry deletion is a silent no-op when the id is absent; this variant
    /// exists for callers that look an entry up by id and want to surface
    /// the miss.
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Entry store errors
    #[error("Store error: {0}")]
    Store(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a "not found" error for income entries
    pub fn income_entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Income entry",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expense entries
    pub fn expense_entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense entry",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for Tallybook operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Validation("Date is required".into());
        assert_eq!(err.to_string(), "Validation error: Date is required");
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::income_entry_not_found("inc-1a2b3c4d");
        assert_eq!(err.to_string(), "Income entry not found: inc-1a2b3c4d");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        let err = LedgerError::Validation("Amount is required".into());
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }
}
