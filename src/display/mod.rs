//! Terminal display formatting

pub mod expense;

pub use expense::{format_expense_list, format_expense_row, format_summary, CATEGORY_WIDTH};
