//! Service layer for the expense tracker
//!
//! Business logic sits here, between the interactive shell and storage.

pub mod expense;

pub use expense::{
    CategoryTotal, ExpenseFilter, ExpenseService, LedgerSummary, CLEAR_CONFIRMATION,
};
