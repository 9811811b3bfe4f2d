//! Ledger aggregate
//!
//! Owns the ordered sequence of transactions and provides mutation,
//! aggregation and persistence. Insertion order is the canonical history
//! order and the order used for positional removal.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use super::transaction::{Transaction, TransactionType};
use crate::error::{LedgerError, LedgerResult};
use crate::storage::ledger_file;

/// Total income, total expense and the difference between them
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// One row of the history projection
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Current position, usable with [`Ledger::remove_at`] until the next mutation
    pub index: usize,
    pub date: NaiveDate,
    pub trans_type: TransactionType,
    pub amount: f64,
    pub category: String,
}

/// Expense totals keyed by exact category text
pub type CategoryReport = BTreeMap<String, f64>;

/// An ordered, owned collection of transactions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a ledger from `path`, starting empty if the file does not exist
    pub fn open(path: impl AsRef<Path>) -> LedgerResult<Self> {
        let mut ledger = Self::new();
        ledger.load_from(path)?;
        Ok(ledger)
    }

    /// Record an income. The ledger is unchanged if validation fails.
    pub fn add_income(
        &mut self,
        amount: f64,
        category: impl Into<String>,
        date: Option<NaiveDate>,
    ) -> LedgerResult<&Transaction> {
        self.add(TransactionType::Income, amount, category, date)
    }

    /// Record an expense. The ledger is unchanged if validation fails.
    pub fn add_expense(
        &mut self,
        amount: f64,
        category: impl Into<String>,
        date: Option<NaiveDate>,
    ) -> LedgerResult<&Transaction> {
        self.add(TransactionType::Expense, amount, category, date)
    }

    fn add(
        &mut self,
        trans_type: TransactionType,
        amount: f64,
        category: impl Into<String>,
        date: Option<NaiveDate>,
    ) -> LedgerResult<&Transaction> {
        let txn = Transaction::create(trans_type, amount, category, date)?;
        tracing::debug!(index = self.transactions.len(), transaction = %txn, "appending transaction");
        self.transactions.push(txn);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Remove and return the transaction at `index`
    ///
    /// Later transactions shift down by one position.
    pub fn remove_at(&mut self, index: usize) -> LedgerResult<Transaction> {
        let len = self.transactions.len();
        if index >= len {
            return Err(LedgerError::IndexOutOfRange { index, len });
        }

        let removed = self.transactions.remove(index);
        tracing::debug!(index, transaction = %removed, "removed transaction");
        Ok(removed)
    }

    /// Sum income and expense in insertion order
    ///
    /// Plain `f64` addition: sums past `f64::MAX` become infinite, and a
    /// balance of two infinite sums is NaN.
    pub fn totals(&self) -> Totals {
        let mut income = 0.0;
        let mut expense = 0.0;

        for txn in &self.transactions {
            match txn.trans_type() {
                TransactionType::Income => income += txn.amount(),
                TransactionType::Expense => expense += txn.amount(),
            }
        }

        Totals {
            income,
            expense,
            balance: income - expense,
        }
    }

    /// Read-only projection of every transaction tagged with its position
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.transactions
            .iter()
            .enumerate()
            .map(|(index, txn)| HistoryEntry {
                index,
                date: txn.date(),
                trans_type: txn.trans_type(),
                amount: txn.amount(),
                category: txn.category().to_string(),
            })
            .collect()
    }

    /// Expense totals per category; income is excluded entirely
    ///
    /// Categories are matched by exact, case-sensitive string equality.
    pub fn category_report(&self) -> CategoryReport {
        let mut report = CategoryReport::new();

        for txn in self.transactions.iter().filter(|t| t.is_expense()) {
            *report.entry(txn.category().to_string()).or_insert(0.0) += txn.amount();
        }

        report
    }

    /// Write every transaction to `path` as a JSON array, atomically
    pub fn save_to(&self, path: impl AsRef<Path>) -> LedgerResult<()> {
        ledger_file::save(path.as_ref(), &self.transactions)
    }

    /// Replace the contents of this ledger with the file at `path`
    ///
    /// A missing file leaves the ledger empty. A file that cannot be parsed
    /// is an error and the current contents are kept.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> LedgerResult<()> {
        self.transactions = ledger_file::load(path.as_ref())?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .add_income(1000.0, "Salary", Some(date(2024, 7, 24)))
            .unwrap();
        ledger
            .add_expense(200.0, "Groceries", Some(date(2024, 7, 24)))
            .unwrap();
        ledger
    }

    #[test]
    fn test_add_income() {
        let mut ledger = Ledger::new();
        let txn = ledger
            .add_income(1000.0, "Salary", Some(date(2024, 7, 24)))
            .unwrap();

        assert_eq!(txn.trans_type(), TransactionType::Income);
        assert_eq!(txn.amount(), 1000.0);
        assert_eq!(txn.category(), "Salary");
        assert_eq!(txn.date(), date(2024, 7, 24));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_add_expense() {
        let mut ledger = Ledger::new();
        ledger
            .add_expense(100.0, "Groceries", Some(date(2024, 7, 24)))
            .unwrap();

        assert_eq!(ledger.len(), 1);
        let txn = ledger.get(0).unwrap();
        assert_eq!(txn.trans_type(), TransactionType::Expense);
        assert_eq!(txn.amount(), 100.0);
    }

    #[test]
    fn test_add_without_date_uses_today() {
        let mut ledger = Ledger::new();
        let before = crate::models::transaction::today();
        ledger.add_expense(3.5, "Coffee", None).unwrap();
        let after = crate::models::transaction::today();

        let recorded = ledger.get(0).unwrap().date();
        assert!(recorded == before || recorded == after);
    }

    #[test]
    fn test_invalid_amount_leaves_ledger_unchanged() {
        let mut ledger = sample_ledger();

        for amount in [0.0, -5.0] {
            assert!(ledger.add_income(amount, "Salary", None).unwrap_err().is_validation());
            assert!(ledger.add_expense(amount, "Food", None).unwrap_err().is_validation());
        }

        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_remove_at() {
        let mut ledger = sample_ledger();
        ledger.add_expense(30.0, "Food", Some(date(2024, 7, 25))).unwrap();

        let removed = ledger.remove_at(1).unwrap();
        assert_eq!(removed.category(), "Groceries");
        assert_eq!(ledger.len(), 2);

        // Later entries shift down
        assert_eq!(ledger.get(1).unwrap().category(), "Food");
        assert_eq!(ledger.history()[1].index, 1);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut ledger = sample_ledger();
        let before = ledger.clone();

        let err = ledger.remove_at(2).unwrap_err();
        assert!(matches!(err, LedgerError::IndexOutOfRange { index: 2, len: 2 }));
        assert!(ledger.remove_at(usize::MAX).unwrap_err().is_index_out_of_range());
        assert_eq!(ledger, before);

        let mut empty = Ledger::new();
        assert!(empty.remove_at(0).unwrap_err().is_index_out_of_range());
    }

    #[test]
    fn test_totals() {
        let totals = sample_ledger().totals();
        assert_eq!(
            totals,
            Totals {
                income: 1000.0,
                expense: 200.0,
                balance: 800.0
            }
        );
    }

    #[test]
    fn test_totals_empty() {
        assert_eq!(Ledger::new().totals(), Totals::default());
        let totals = Ledger::new().totals();
        assert_eq!((totals.income, totals.expense, totals.balance), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_negative_balance() {
        let mut ledger = Ledger::new();
        ledger.add_income(10.0, "Gift", None).unwrap();
        ledger.add_expense(25.0, "Dinner", None).unwrap();
        assert_eq!(ledger.totals().balance, -15.0);
    }

    #[test]
    fn test_totals_overflow_to_infinity() {
        let mut ledger = Ledger::new();
        ledger.add_income(f64::MAX, "Jackpot", None).unwrap();
        ledger.add_income(f64::MAX, "Jackpot", None).unwrap();

        let totals = ledger.totals();
        assert_eq!(totals.income, f64::INFINITY);
        assert_eq!(totals.balance, f64::INFINITY);

        ledger.add_expense(f64::MAX, "Yacht", None).unwrap();
        ledger.add_expense(f64::MAX, "Yacht", None).unwrap();

        let totals = ledger.totals();
        assert_eq!(totals.expense, f64::INFINITY);
        assert!(totals.balance.is_nan());
    }

    #[test]
    fn test_history() {
        let history = sample_ledger().history();
        assert_eq!(
            history,
            vec![
                HistoryEntry {
                    index: 0,
                    date: date(2024, 7, 24),
                    trans_type: TransactionType::Income,
                    amount: 1000.0,
                    category: "Salary".into(),
                },
                HistoryEntry {
                    index: 1,
                    date: date(2024, 7, 24),
                    trans_type: TransactionType::Expense,
                    amount: 200.0,
                    category: "Groceries".into(),
                },
            ]
        );
        assert!(Ledger::new().history().is_empty());
    }

    #[test]
    fn test_category_report() {
        let report = sample_ledger().category_report();
        assert_eq!(report.len(), 1);
        assert_eq!(report["Groceries"], 200.0);
        assert!(!report.contains_key("Salary"));
    }

    #[test]
    fn test_category_report_accumulates() {
        let mut ledger = Ledger::new();
        ledger.add_expense(50.0, "Food", None).unwrap();
        ledger.add_expense(30.0, "Food", None).unwrap();
        assert_eq!(ledger.category_report()["Food"], 80.0);
    }

    #[test]
    fn test_category_report_is_case_sensitive() {
        let mut ledger = Ledger::new();
        ledger.add_expense(1.0, "food", None).unwrap();
        ledger.add_expense(2.0, "Food", None).unwrap();
        ledger.add_expense(4.0, "Food ", None).unwrap();

        let report = ledger.category_report();
        assert_eq!(report.len(), 3);
        assert_eq!(report["food"], 1.0);
        assert_eq!(report["Food"], 2.0);
        assert_eq!(report["Food "], 4.0);
    }

    #[test]
    fn test_category_report_empty() {
        assert!(Ledger::new().category_report().is_empty());

        let mut income_only = Ledger::new();
        income_only.add_income(5.0, "Salary", None).unwrap();
        assert!(income_only.category_report().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");

        let mut ledger = sample_ledger();
        ledger.add_expense(0.1, "", None).unwrap();
        ledger.add_income(12.345, "Refund", Some(date(2023, 12, 31))).unwrap();
        ledger.save_to(&path).unwrap();

        let mut loaded = Ledger::new();
        loaded.load_from(&path).unwrap();
        assert_eq!(loaded, ledger);
        assert_eq!(loaded.get(0).unwrap().trans_type(), TransactionType::Income);
        assert_eq!(loaded.get(1).unwrap().trans_type(), TransactionType::Expense);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = sample_ledger();

        ledger
            .load_from(temp_dir.path().join("does-not-exist.json"))
            .unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_load_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");

        let mut saved = Ledger::new();
        saved.add_expense(9.0, "Books", Some(date(2024, 1, 2))).unwrap();
        saved.save_to(&path).unwrap();

        let mut ledger = sample_ledger();
        ledger.load_from(&path).unwrap();
        assert_eq!(ledger, saved);
    }

    #[test]
    fn test_failed_load_keeps_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut ledger = sample_ledger();
        let err = ledger.load_from(&path).unwrap_err();
        assert!(err.is_corrupt_data());
        assert_eq!(ledger, sample_ledger());
    }

    #[test]
    fn test_open() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");
        assert!(Ledger::open(&path).unwrap().is_empty());

        sample_ledger().save_to(&path).unwrap();
        assert_eq!(Ledger::open(&path).unwrap(), sample_ledger());
    }
}
