//! CSV Export functionality
//!
//! Exports the ledger as `id,date,category,amount,note`. The note column is
//! always quoted; the other columns are written as-is, the amount in its
//! shortest exact form (`120.5`, `0.004`). Rows are separated by `\n` with no
//! newline after the last row.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Header row of the export
pub const CSV_HEADER: &str = "id,date,category,amount,note";

/// Export expenses to CSV, returning the number of rows written
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<usize> {
    write!(writer, "{}", CSV_HEADER).map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        write!(
            writer,
            "\n{},{},{},{},{}",
            expense.id,
            expense.iso_date(),
            expense.category,
            expense.amount.to_repr(),
            quote_csv(&expense.note)
        )
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    Ok(expenses.len())
}

/// Export expenses to a CSV file, replacing any existing file
///
/// The document is built in memory and written in a single call.
pub fn export_expenses_csv_file(expenses: &[Expense], path: &Path) -> ExpenseResult<usize> {
    let mut buffer = Vec::new();
    let count = export_expenses_csv(expenses, &mut buffer)?;

    fs::write(path, buffer).map_err(|e| {
        ExpenseError::Export(format!("Failed to write {}: {}", path.display(), e))
    })?;

    Ok(count)
}

/// Quote a field, doubling embedded quotes
fn quote_csv(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
