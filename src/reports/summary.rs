//! Ledger summary
//!
//! Derives the summary financial metrics from current ledger state:
//! totals, net profit, revenue target, and the two percentage indices.

use crate::error::LedgerResult;
use crate::models::Money;
use crate::store::Ledger;

/// Gross revenue as a multiple of expenses that yields a 30% net margin
/// over the current cost base. Fixed, not configurable.
pub const REVENUE_TARGET_RATIO: f64 = 1.3;

/// Derived financial metrics for the current ledger state
///
/// Pure with respect to store contents: the same entries always produce
/// the same summary. Recomputed on demand; nothing is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    /// Sum of all income entry amounts
    pub total_income: Money,

    /// Sum of all expense entry amounts
    pub total_expenses: Money,

    /// Income minus expenses; negative when running at a loss
    pub net_profit: Money,

    /// Gross revenue needed for a 30% net margin given current expenses
    pub revenue_target: Money,

    /// Income as a percentage of the revenue target, capped at 100.
    /// Reported as 0 when there is no target (zero expenses).
    pub revenue_progress: f64,

    /// Net profit as a percentage of total income, or 0 when there is no
    /// income. Negative when running at a loss.
    pub profitability_index: f64,
}

impl LedgerSummary {
    /// Compute the summary from current ledger state
    pub fn generate(ledger: &Ledger) -> LedgerResult<Self> {
        let total_income: Money = ledger.income.get_all()?.iter().map(|e| e.amount).sum();
        let total_expenses: Money = ledger.expenses.get_all()?.iter().map(|e| e.amount).sum();

        let net_profit = total_income - total_expenses;
        let revenue_target = total_expenses.scale(REVENUE_TARGET_RATIO);

        let revenue_progress = if revenue_target.is_positive() {
            let progress = total_income.cents() as f64 / revenue_target.cents() as f64 * 100.0;
            progress.min(100.0)
        } else {
            0.0
        };

        let profitability_index = if total_income.is_positive() {
            net_profit.cents() as f64 / total_income.cents() as f64 * 100.0
        } else {
            0.0
        };

        Ok(Self {
            total_income,
            total_expenses,
            net_profit,
            revenue_target,
            revenue_progress,
            profitability_index,
        })
    }
}
