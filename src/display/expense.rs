//! Expense display formatting
//!
//! Renders ledger listings and summaries for the terminal.

use crate::models::{Expense, Money};
use crate::services::LedgerSummary;

/// Width the category column is padded to
pub const CATEGORY_WIDTH: usize = 12;

/// Format a single expense (listing row)
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{} | {} | {:<width$} | {:>8} | {}",
        expense.id,
        expense.display_date(),
        expense.category,
        expense.amount,
        expense.note,
        width = CATEGORY_WIDTH
    )
}

/// Format a list of expenses followed by their count and total
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&format!(
        "\nTotal ({} items): {}\n",
        expenses.len(),
        total
    ));

    output
}

/// Format the ledger summary with per-category subtotals
pub fn format_summary(summary: &LedgerSummary) -> String {
    if summary.is_empty() {
        return "No expenses yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("Total expenses: {}\n", summary.total));
    output.push_str("By category:\n");

    for entry in &summary.by_category {
        output.push_str(&format!(
            "  {:<width$} : {}\n",
            entry.category,
            entry.total,
            width = CATEGORY_WIDTH
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use chrono::NaiveDate;

    fn expense(id: i64, amount: f64, category: &str, note: &str) -> Expense {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_micro_opt(10, 20, 30, 999999)
            .unwrap();
        Expense::new_at(
            ExpenseId::from_millis(id),
            Money::new(amount),
            category,
            note,
            date,
        )
    }

    #[test]
    fn test_format_expense_row() {
        let row = format_expense_row(&expense(1736936430123, 120.5, "Food", "lunch"));
        assert_eq!(
            row,
            "1736936430123 | 2025-01-15T10:20:30 | Food         |   120.50 | lunch"
        );
    }

    #[test]
    fn test_long_category_not_truncated() {
        let row = format_expense_row(&expense(1, 1.0, "Entertainment", ""));
        assert!(row.contains("| Entertainment |"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_expense_list(&[]), "No expenses found.\n");
    }

    #[test]
    fn test_format_list_total() {
        let expenses = vec![
            expense(1, 10.25, "Food", ""),
            expense(2, 3.0, "Rent", ""),
            expense(3, 7.75, "Food", ""),
        ];

        let output = format_expense_list(&expenses);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("1 | "));
        assert!(lines[2].starts_with("3 | "));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Total (3 items): 21.00");
    }

    #[test]
    fn test_list_total_rounds_only_when_printed() {
        let expenses = vec![
            expense(1, 0.004, "A", ""),
            expense(2, 0.004, "A", ""),
            expense(3, 0.004, "A", ""),
        ];

        let output = format_expense_list(&expenses);
        assert!(output.contains("|     0.00 |"));
        assert!(output.ends_with("Total (3 items): 0.01\n"));

        let summary = format_summary(&LedgerSummary::from_expenses(&expenses));
        assert!(summary.starts_with("Total expenses: 0.01\n"));
    }

    #[test]
    fn test_format_summary() {
        let expenses = vec![
            expense(1, 10.0, "Rent", ""),
            expense(2, 2.5, "Food", ""),
            expense(3, 1.25, "Rent", ""),
        ];
        let summary = LedgerSummary::from_expenses(&expenses);

        assert_eq!(
            format_summary(&summary),
            "Total expenses: 13.75\n\
             By category:\n\
             \x20 Rent         : 11.25\n\
             \x20 Food         : 2.50\n"
        );
    }

    #[test]
    fn test_format_empty_summary() {
        let summary = LedgerSummary::from_expenses(&[]);
        assert_eq!(format_summary(&summary), "No expenses yet.\n");
    }
}
