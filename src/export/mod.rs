//! Export module for the expense tracker
//!
//! Provides CSV export of the ledger for spreadsheets.

pub mod csv;

pub use csv::{export_expenses_csv, export_expenses_csv_file, CSV_HEADER};
