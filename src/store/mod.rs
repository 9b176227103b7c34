//! Entry store layer for Tallybook
//!
//! Holds the canonical, in-memory ledger state for the session. There is
//! no persistence: the ledger lives and dies with the process.

pub mod expenses;
pub mod income;

pub use expenses::ExpenseStore;
pub use income::IncomeStore;

/// The full ledger: one store per entry kind
///
/// The two collections are independent; nothing cross-references between
/// them. All mutation goes through the service layer.
pub struct Ledger {
    pub income: IncomeStore,
    pub expenses: ExpenseStore,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            income: IncomeStore::new(),
            expenses: ExpenseStore::new(),
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
