//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and the audit log hooks the
//! services call after each mutation.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json_or_default, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::Expense;

/// Main storage coordinator owning the ledger and the audit log
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with audit logging enabled
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.ledger_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Turn audit logging on or off
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit = enabled.then(|| AuditLogger::new(self.paths.audit_log()));
        self
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Get the audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        self.expenses.load()
    }

    /// Record a newly added expense
    pub fn log_create(&self, expense: &Expense) -> Result<(), ExpenseError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::create(
                expense.id.to_string(),
                Some(expense.category.clone()),
                expense,
            )),
            None => Ok(()),
        }
    }

    /// Record removed expenses
    pub fn log_delete(&self, removed: &[Expense]) -> Result<(), ExpenseError> {
        let Some(logger) = &self.audit else {
            return Ok(());
        };

        let entries: Vec<AuditEntry> = removed
            .iter()
            .map(|e| AuditEntry::delete(e.id.to_string(), Some(e.category.clone()), e))
            .collect();

        logger.log_batch(&entries)
    }
}
