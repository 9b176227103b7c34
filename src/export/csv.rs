//! CSV report export
//!
//! Serializes the full ledger state plus summary into a flat, comma
//! separated report. The serializer produces text only; writing it to a
//! file or download is the caller's job.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::reports::LedgerSummary;
use crate::store::Ledger;

/// Title line of the exported report
pub const REPORT_TITLE: &str = "Tallybook Financial Report";

fn export_err(e: std::io::Error) -> LedgerError {
    LedgerError::Export(e.to_string())
}

/// Write the full report for a ledger and a summary snapshot
///
/// Deterministic for a fixed ledger + summary. Free-text fields go out
/// as-is: embedded commas or quotes are not escaped and will shift
/// columns.
pub fn write_report<W: Write>(
    ledger: &Ledger,
    summary: &LedgerSummary,
    writer: &mut W,
) -> LedgerResult<()> {
    writeln!(writer, "{}", REPORT_TITLE).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    writeln!(writer, "Summary").map_err(export_err)?;
    writeln!(writer, "Total Income,{}", summary.total_income).map_err(export_err)?;
    writeln!(writer, "Total Expenses,{}", summary.total_expenses).map_err(export_err)?;
    writeln!(writer, "Net Profit,{}", summary.net_profit).map_err(export_err)?;

    writeln!(writer).map_err(export_err)?;
    writeln!(writer, "Income Details").map_err(export_err)?;
    writeln!(writer, "Date,Category,Amount,Client,Project").map_err(export_err)?;
    for entry in ledger.income.get_all()? {
        writeln!(
            writer,
            "{},{},{},{},{}",
            entry.date, entry.category, entry.amount, entry.client, entry.project
        )
        .map_err(export_err)?;
    }

    writeln!(writer).map_err(export_err)?;
    writeln!(writer, "Expense Details").map_err(export_err)?;
    writeln!(writer, "Date,Category,Amount,Description,Payment Date").map_err(export_err)?;
    for entry in ledger.expenses.get_all()? {
        writeln!(
            writer,
            "{},{},{},{},{}",
            entry.date, entry.category, entry.amount, entry.description, entry.payment_date
        )
        .map_err(export_err)?;
    }

    Ok(())
}

/// Build the full report as a string
///
/// Generates a fresh summary from current ledger state and renders it
/// with [`write_report`].
pub fn build_report(ledger: &Ledger) -> LedgerResult<String> {
    let summary = LedgerSummary::generate(ledger)?;
    let mut buffer = Vec::new();
    write_report(ledger, &summary, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| LedgerError::Export(e.to_string()))
}
