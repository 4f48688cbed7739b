//! Expense repository for JSON storage
//!
//! Holds the ledger in memory and mirrors it to expenses.json, a plain JSON
//! array of expense objects in insertion order.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load expenses from disk
    ///
    /// A missing or unreadable-as-JSON file yields an empty ledger.
    pub fn load(&self) -> Result<(), ExpenseError> {
        let expenses: Vec<Expense> = read_json_or_default(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = expenses;

        Ok(())
    }

    /// Save expenses to disk, replacing the file
    pub fn save(&self) -> Result<(), ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Get expenses in a category (case-insensitive), in insertion order
    pub fn get_by_category(&self, category: &str) -> Result<Vec<Expense>, ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data
            .iter()
            .filter(|e| e.in_category(category))
            .cloned()
            .collect())
    }

    /// Identifier for an expense created at `now_millis`
    pub fn next_id(&self, now_millis: i64) -> Result<ExpenseId, ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let newest = data.iter().filter_map(|e| e.id.as_millis()).max();
        Ok(ExpenseId::next(now_millis, newest))
    }

    /// Append an expense
    pub fn push(&self, expense: Expense) -> Result<(), ExpenseError> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.push(expense);
        Ok(())
    }

    /// Remove every expense whose identifier matches the given text
    ///
    /// Returns the removed expenses.
    pub fn remove_matching(&self, id_text: &str) -> Result<Vec<Expense>, ExpenseError> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let (removed, kept): (Vec<_>, Vec<_>) =
            data.drain(..).partition(|e| e.id.matches(id_text));
        *data = kept;

        Ok(removed)
    }

    /// Remove all expenses, returning what was removed
    pub fn clear(&self) -> Result<Vec<Expense>, ExpenseError> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(std::mem::take(&mut *data))
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn expense(id: i64, amount: f64, category: &str) -> Expense {
        Expense::new(ExpenseId::from_millis(id), Money::new(amount), category, "")
    }

    fn count(repo: &ExpenseRepository) -> usize {
        repo.get_all().unwrap().len()
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(count(&repo), 0);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::write(repo.path(), "[{\"id\": 1,").unwrap();

        repo.load().unwrap();
        assert_eq!(count(&repo), 0);
    }

    #[test]
    fn test_load_mixed_records() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::write(
            repo.path(),
            r#"[
  {"id": "1736936430123", "amount": 12.0, "category": "Food", "note": "", "date": "2025-01-15T10:20:30"},
  {"id": 2, "amount": 1e14, "category": "House", "note": "", "date": "2025-01-15T10:20:31"},
  {"id": 3, "amount": 0.004, "category": "Misc", "date": "2025-01-15T10:20:32.500000"}
]"#,
        )
        .unwrap();

        repo.load().unwrap();
        let all = repo.get_all().unwrap();

        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, ExpenseId::Text("1736936430123".into()));
        assert_eq!(all[1].amount.value(), 1e14);
        assert_eq!(all[2].amount.value(), 0.004);
        assert_eq!(all[2].note, "");
    }

    #[test]
    fn test_string_ids_survive_save() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::write(
            repo.path(),
            r#"[{"id": "abc", "amount": 1.5, "category": "Food", "note": "", "date": "2025-01-15T10:20:30"}]"#,
        )
        .unwrap();

        repo.load().unwrap();
        repo.save().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(repo.path()).unwrap()).unwrap();
        assert_eq!(value[0]["id"], "abc");
        assert_eq!(value[0]["amount"], 1.5);
    }

    #[test]
    fn test_remove_string_id() {
        let (_temp_dir, repo) = create_test_repo();
        let mut stored = expense(1, 1.0, "Food");
        stored.id = ExpenseId::Text("1736936430123".into());
        repo.push(stored).unwrap();
        repo.push(expense(1736936430123, 2.0, "Rent")).unwrap();
        repo.push(expense(5, 3.0, "Rent")).unwrap();

        let removed = repo.remove_matching("1736936430123").unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(count(&repo), 1);
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(expense(30, 1.0, "Food")).unwrap();
        repo.push(expense(10, 2.0, "Rent")).unwrap();
        repo.push(expense(20, 3.0, "Food")).unwrap();

        let ids: Vec<String> = repo
            .get_all()
            .unwrap()
            .iter()
            .map(|e| e.id.to_string())
            .collect();
        assert_eq!(ids, vec!["30", "10", "20"]);
    }

    #[test]
    fn test_get_by_category() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(expense(1, 1.0, "Food")).unwrap();
        repo.push(expense(2, 2.0, "Rent")).unwrap();
        repo.push(expense(3, 3.0, "FOOD")).unwrap();

        let food = repo.get_by_category("food").unwrap();
        assert_eq!(food.len(), 2);
        assert_eq!(food[0].id.as_millis(), Some(1));
        assert_eq!(food[1].id.as_millis(), Some(3));
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(expense(1, 12.5, "Food")).unwrap();
        repo.push(expense(2, 0.99, "Coffee")).unwrap();
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(repo.path().clone());
        repo2.load().unwrap();

        assert_eq!(repo2.get_all().unwrap(), repo.get_all().unwrap());
    }

    #[test]
    fn test_save_of_loaded_ledger_is_idempotent() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(expense(1, 12.5, "Food")).unwrap();
        repo.save().unwrap();
        let first = std::fs::read_to_string(repo.path()).unwrap();

        let reloaded = ExpenseRepository::new(repo.path().clone());
        reloaded.load().unwrap();
        reloaded.save().unwrap();
        let second = std::fs::read_to_string(repo.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_remove_matching() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(expense(1, 1.0, "Food")).unwrap();
        repo.push(expense(2, 2.0, "Rent")).unwrap();

        let removed = repo.remove_matching(" 2 ").unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(count(&repo), 1);

        let removed = repo.remove_matching("99").unwrap();
        assert!(removed.is_empty());
        assert_eq!(count(&repo), 1);
    }

    #[test]
    fn test_next_id_after_newest() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.next_id(500).unwrap().as_millis(), Some(500));

        repo.push(expense(1000, 1.0, "Food")).unwrap();
        assert_eq!(repo.next_id(1000).unwrap().as_millis(), Some(1001));
        assert_eq!(repo.next_id(2000).unwrap().as_millis(), Some(2000));
    }

    #[test]
    fn test_next_id_counts_numeric_text_ids() {
        let (_temp_dir, repo) = create_test_repo();
        let mut stored = expense(1, 1.0, "Food");
        stored.id = ExpenseId::Text("3000".into());
        repo.push(stored).unwrap();
        let mut other = expense(2, 1.0, "Food");
        other.id = ExpenseId::Text("not-a-number".into());
        repo.push(other).unwrap();

        assert_eq!(repo.next_id(3000).unwrap().as_millis(), Some(3001));
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(expense(1, 1.0, "Food")).unwrap();
        repo.push(expense(2, 2.0, "Rent")).unwrap();

        let removed = repo.clear().unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(count(&repo), 0);
    }
}
