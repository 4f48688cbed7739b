//! Expense identifiers
//!
//! An expense is keyed by the millisecond timestamp at which it was created.
//! Ledger files may also carry identifiers stored as JSON strings; those are
//! kept verbatim and written back the same way. Identifiers are compared
//! against user input by their text, so `"1736936430123"` and
//! `" 1736936430123 "` both address the same record whichever way it was
//! stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single expense record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpenseId {
    /// Stored as a JSON number
    Number(serde_json::Number),
    /// Stored as a JSON string
    Text(String),
}

impl ExpenseId {
    /// Create an ID from a millisecond timestamp
    pub fn from_millis(millis: i64) -> Self {
        Self::Number(millis.into())
    }

    /// The millisecond value, when the identifier is a whole number
    pub fn as_millis(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Pick the identifier for a record created at `now_millis`
    ///
    /// Falls back to one past the newest existing identifier when the clock
    /// hasn't moved on, so identifiers stay strictly increasing.
    pub fn next(now_millis: i64, newest: Option<i64>) -> Self {
        match newest {
            Some(last) if last >= now_millis => Self::from_millis(last.saturating_add(1)),
            _ => Self::from_millis(now_millis),
        }
    }

    /// Normalize identifier text typed by the user
    pub fn normalize(input: &str) -> &str {
        input.trim()
    }

    /// Check whether user-supplied text names this identifier
    pub fn matches(&self, input: &str) -> bool {
        self.to_string() == Self::normalize(input)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}
