//! Expense service
//!
//! Provides the ledger operations: add, list, delete, summarize and clear.
//! Every mutation is saved to disk and audited before returning.

use chrono::Utc;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// Confirmation text required before clearing the ledger
pub const CLEAR_CONFIRMATION: &str = "YES";

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Options for filtering expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Filter by category (case-insensitive exact match)
    pub category: Option<String>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Subtotal for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Totals across the whole ledger
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerSummary {
    /// Number of expenses
    pub count: usize,
    /// Sum of all amounts
    pub total: Money,
    /// Per-category subtotals, in the order each category first appears
    pub by_category: Vec<CategoryTotal>,
}

impl LedgerSummary {
    /// Build a summary from expenses in ledger order
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut by_category: Vec<CategoryTotal> = Vec::new();

        for expense in expenses {
            match by_category
                .iter_mut()
                .find(|c| c.category == expense.category)
            {
                Some(entry) => entry.total += expense.amount,
                None => by_category.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                }),
            }
        }

        Self {
            count: expenses.len(),
            total: expenses.iter().map(|e| e.amount).sum(),
            by_category,
        }
    }

    /// Check if the ledger had no expenses
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add an expense
    ///
    /// Fails with `InvalidAmount` when the amount text isn't a number, in
    /// which case nothing is recorded.
    pub fn add(&self, amount: &str, category: &str, note: &str) -> ExpenseResult<Expense> {
        let amount = Money::parse(amount)
            .map_err(|_| ExpenseError::InvalidAmount(amount.trim().to_string()))?;

        let id = self
            .storage
            .expenses
            .next_id(Utc::now().timestamp_millis())?;
        let expense = Expense::new(id, amount, category, note);

        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage.expenses.push(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(&expense)?;

        Ok(expense)
    }

    /// List expenses matching a filter, in insertion order
    pub fn list(&self, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        match &filter.category {
            Some(category) => self.storage.expenses.get_by_category(category),
            None => self.storage.expenses.get_all(),
        }
    }

    /// Delete every expense whose identifier matches the given text
    ///
    /// Returns the number of expenses removed; the ledger is only saved when
    /// something was removed.
    pub fn delete(&self, id_text: &str) -> ExpenseResult<usize> {
        let removed = self.storage.expenses.remove_matching(id_text)?;
        if removed.is_empty() {
            return Ok(0);
        }

        self.storage.expenses.save()?;
        self.storage.log_delete(&removed)?;

        Ok(removed.len())
    }

    /// Summarize the whole ledger
    pub fn summary(&self) -> ExpenseResult<LedgerSummary> {
        let expenses = self.storage.expenses.get_all()?;
        Ok(LedgerSummary::from_expenses(&expenses))
    }

    /// Remove every expense if the confirmation is exactly `YES`
    ///
    /// Returns `None` when cancelled, otherwise the number of expenses removed.
    pub fn clear_all(&self, confirmation: &str) -> ExpenseResult<Option<usize>> {
        if confirmation != CLEAR_CONFIRMATION {
            return Ok(None);
        }

        let removed = self.storage.expenses.clear()?;
        self.storage.expenses.save()?;
        self.storage.log_delete(&removed)?;

        Ok(Some(removed.len()))
    }
}
