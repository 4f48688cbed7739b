//! Expense tracker - interactive terminal expense ledger
//!
//! Records expenses with a category, note and timestamp in a local JSON file
//! and supports listing, filtering, deleting, summarizing and CSV export from
//! a numbered menu.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory paths and optional settings
//! - `error`: Custom error types
//! - `models`: Expense record, identifier and money types
//! - `storage`: JSON file storage layer
//! - `services`: Ledger operations
//! - `audit`: Audit logging of every mutation
//! - `display`: Terminal formatting of listings and summaries
//! - `export`: CSV export
//! - `shell`: The interactive menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new(None)?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?.with_audit(settings.audit_enabled);
//! storage.load_all()?;
//! ```

pub mod audit;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
