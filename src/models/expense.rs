//! Expense model
//!
//! A single recorded expense. Field names and layout match the objects stored
//! in `expenses.json`.

use chrono::{NaiveDateTime, SubsecRound, Timelike, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Timestamp layout used when a record is shown in a listing
const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// ISO-8601 layout with microseconds, used when the time has a fraction
const ISO_MICROS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Record key; a millisecond timestamp for records created here
    pub id: ExpenseId,

    /// Amount spent
    pub amount: Money,

    /// Category name (trimmed)
    pub category: String,

    /// Free-form note (trimmed, may be empty)
    #[serde(default)]
    pub note: String,

    /// Creation time (UTC)
    #[serde(serialize_with = "serialize_iso_date")]
    pub date: NaiveDateTime,
}

impl Expense {
    /// Create a new expense stamped with the current UTC time, to the microsecond
    pub fn new(
        id: ExpenseId,
        amount: Money,
        category: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self::new_at(
            id,
            amount,
            category,
            note,
            Utc::now().naive_utc().trunc_subsecs(6),
        )
    }

    /// Create a new expense with an explicit creation time
    pub fn new_at(
        id: ExpenseId,
        amount: Money,
        category: impl Into<String>,
        note: impl Into<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            amount,
            category: category.into().trim().to_string(),
            note: note.into().trim().to_string(),
            date,
        }
    }

    /// Check whether this expense belongs to a category (case-insensitive)
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Creation time truncated to whole seconds
    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }

    /// Creation time as a full ISO-8601 string
    ///
    /// Six fractional digits when the time has a sub-second part, none
    /// otherwise.
    pub fn iso_date(&self) -> String {
        iso_format(&self.date)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        Ok(())
    }
}

fn iso_format(date: &NaiveDateTime) -> String {
    if date.nanosecond() == 0 {
        date.format(DISPLAY_DATE_FORMAT).to_string()
    } else {
        date.format(ISO_MICROS_FORMAT).to_string()
    }
}

fn serialize_iso_date<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&iso_format(date))
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
