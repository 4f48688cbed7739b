//! Core data models for the expense tracker
//!
//! This module contains the data structures that make up a ledger: the
//! expense record, its identifier, and the money type used for amounts.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
