//! Audit logging for the expense tracker
//!
//! Records every add and delete in an append-only audit log, one JSON object
//! per line (JSONL), with the affected expense attached.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(expense.id.to_string(), Some(expense.category.clone()), &expense);
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
