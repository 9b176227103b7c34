//! Income and expense entry models
//!
//! Entries are the committed records in the ledger. Drafts are the raw,
//! string-typed field sets the presentation layer collects; a draft only
//! becomes an entry through a service's `submit`, which validates it,
//! parses the amount, and assigns a fresh id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ExpenseEntryId, IncomeEntryId};
use super::money::Money;

/// Validation errors for entry drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    MissingDate,
    MissingCategory,
    MissingAmount,
    InvalidAmount(String),
    NegativeAmount(String),
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDate => write!(f, "Date is required"),
            Self::MissingCategory => write!(f, "Category is required"),
            Self::MissingAmount => write!(f, "Amount is required"),
            Self::InvalidAmount(s) => write!(f, "Amount does not parse as a number: {}", s),
            Self::NegativeAmount(s) => write!(f, "Amount cannot be negative: {}", s),
        }
    }
}

impl std::error::Error for EntryValidationError {}

/// A committed income entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeEntry {
    /// Unique identifier
    pub id: IncomeEntryId,

    /// Calendar date as entered, not validated beyond presence
    pub date: String,

    /// Category label, normally one of [`super::INCOME_CATEGORIES`]
    pub category: String,

    /// Amount received
    pub amount: Money,

    /// Client the income came from
    #[serde(default)]
    pub client: String,

    /// Project the income relates to
    #[serde(default)]
    pub project: String,

    /// When the entry was created
    pub created_at: DateTime<Utc>,

    /// When the entry was last modified
    pub updated_at: DateTime<Utc>,
}

impl IncomeEntry {
    /// Create a new income entry
    pub fn new(date: impl Into<String>, category: impl Into<String>, amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: IncomeEntryId::new(),
            date: date.into(),
            category: category.into(),
            amount,
            client: String::new(),
            project: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an income entry with all fields
    pub fn with_details(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        client: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        let mut entry = Self::new(date, category, amount);
        entry.client = client.into();
        entry.project = project.into();
        entry
    }
}

/// A committed expense entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Unique identifier
    pub id: ExpenseEntryId,

    /// Calendar date as entered, not validated beyond presence
    pub date: String,

    /// Category label, normally one of [`super::EXPENSE_CATEGORIES`]
    pub category: String,

    /// Amount spent
    pub amount: Money,

    /// What the expense was for
    #[serde(default)]
    pub description: String,

    /// Free-text payment date label (e.g. "1st of month")
    #[serde(default)]
    pub payment_date: String,

    /// When the entry was created
    pub created_at: DateTime<Utc>,

    /// When the entry was last modified
    pub updated_at: DateTime<Utc>,
}

impl ExpenseEntry {
    /// Create a new expense entry
    pub fn new(date: impl Into<String>, category: impl Into<String>, amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseEntryId::new(),
            date: date.into(),
            category: category.into(),
            amount,
            description: String::new(),
            payment_date: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an expense entry with all fields
    pub fn with_details(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
        payment_date: impl Into<String>,
    ) -> Self {
        let mut entry = Self::new(date, category, amount);
        entry.description = description.into();
        entry.payment_date = payment_date.into();
        entry
    }
}

/// Raw field input for a new income entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeDraft {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub client: String,
    pub project: String,
}

impl IncomeDraft {
    /// Validate the draft and return the parsed amount
    ///
    /// `date`, `category`, and `amount` must be non-empty, and `amount`
    /// must parse to a finite, non-negative number. The optional fields
    /// are never checked.
    pub fn validate(&self) -> Result<Money, EntryValidationError> {
        validate_common(&self.date, &self.category, &self.amount)
    }
}

/// Raw field input for a new expense entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
    pub payment_date: String,
}

impl ExpenseDraft {
    /// Validate the draft and return the parsed amount
    ///
    /// Same rules as [`IncomeDraft::validate`].
    pub fn validate(&self) -> Result<Money, EntryValidationError> {
        validate_common(&self.date, &self.category, &self.amount)
    }
}

fn validate_common(date: &str, category: &str, amount: &str) -> Result<Money, EntryValidationError> {
    if date.is_empty() {
        return Err(EntryValidationError::MissingDate);
    }
    if category.is_empty() {
        return Err(EntryValidationError::MissingCategory);
    }
    if amount.is_empty() {
        return Err(EntryValidationError::MissingAmount);
    }

    let parsed = Money::parse(amount)
        .map_err(|_| EntryValidationError::InvalidAmount(amount.to_string()))?;

    if parsed.is_negative() {
        return Err(EntryValidationError::NegativeAmount(amount.to_string()));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income_draft() -> IncomeDraft {
        IncomeDraft {
            date: "2025-02-05".to_string(),
            category: "Consulting".to_string(),
            amount: "2000".to_string(),
            client: "Client X".to_string(),
            project: "Project Y".to_string(),
        }
    }

    fn expense_draft() -> ExpenseDraft {
        ExpenseDraft {
            date: "2025-02-01".to_string(),
            category: "Office Rent".to_string(),
            amount: "1000".to_string(),
            description: "Monthly office rent".to_string(),
            payment_date: "1st of month".to_string(),
        }
    }

    #[test]
    fn test_new_income_entry() {
        let entry = IncomeEntry::new("2025-01-15", "Website Development", Money::from_cents(150000));

        assert_eq!(entry.date, "2025-01-15");
        assert_eq!(entry.category, "Website Development");
        assert_eq!(entry.amount.cents(), 150000);
        assert!(entry.client.is_empty());
        assert!(entry.project.is_empty());
    }

    #[test]
    fn test_expense_entry_with_details() {
        let entry = ExpenseEntry::with_details(
            "2025-01-01",
            "Office Rent",
            Money::from_cents(5000000),
            "Monthly office rent",
            "1st of month",
        );

        assert_eq!(entry.description, "Monthly office rent");
        assert_eq!(entry.payment_date, "1st of month");
    }

    #[test]
    fn test_valid_drafts_return_parsed_amount() {
        assert_eq!(income_draft().validate().unwrap().cents(), 200000);
        assert_eq!(expense_draft().validate().unwrap().cents(), 100000);
    }

    #[test]
    fn test_missing_required_fields() {
        let mut draft = expense_draft();
        draft.date = String::new();
        assert_eq!(draft.validate(), Err(EntryValidationError::MissingDate));

        let mut draft = expense_draft();
        draft.category = String::new();
        assert_eq!(draft.validate(), Err(EntryValidationError::MissingCategory));

        let mut draft = income_draft();
        draft.amount = String::new();
        assert_eq!(draft.validate(), Err(EntryValidationError::MissingAmount));
    }

    #[test]
    fn test_optional_fields_not_required() {
        let mut draft = income_draft();
        draft.client = String::new();
        draft.project = String::new();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let mut draft = expense_draft();
        draft.amount = "abc".to_string();
        assert!(matches!(
            draft.validate(),
            Err(EntryValidationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut draft = income_draft();
        draft.amount = "-50".to_string();
        assert!(matches!(
            draft.validate(),
            Err(EntryValidationError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            EntryValidationError::MissingDate.to_string(),
            "Date is required"
        );
        assert_eq!(
            EntryValidationError::InvalidAmount("abc".to_string()).to_string(),
            "Amount does not parse as a number: abc"
        );
    }

    #[test]
    fn test_serialization() {
        let entry = IncomeEntry::with_details(
            "2025-01-20",
            "Digital Marketing",
            Money::from_cents(80000),
            "Client B",
            "Social Media Campaign",
        );

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: IncomeEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(entry.id, deserialized.id);
        assert_eq!(entry.amount, deserialized.amount);
        assert_eq!(entry.client, deserialized.client);
    }
}
