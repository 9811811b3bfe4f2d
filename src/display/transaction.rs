//! Transaction display formatting
//!
//! Renders the ledger history as a table whose first column is the position
//! accepted by `remove`.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::report::format_money;
use crate::models::transaction::DATE_FORMAT;
use crate::models::{HistoryEntry, Transaction};

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    trans_type: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
}

impl HistoryRow {
    fn new(entry: &HistoryEntry, symbol: &str) -> Self {
        Self {
            index: entry.index,
            date: entry.date.format(DATE_FORMAT).to_string(),
            trans_type: entry.trans_type.to_string(),
            amount: format_money(entry.amount, symbol),
            category: entry.category.clone(),
        }
    }
}

/// Format the history as a table
pub fn format_history(entries: &[HistoryEntry], symbol: &str) -> String {
    if entries.is_empty() {
        return "No transactions available.\n".to_string();
    }

    let rows = entries.iter().map(|entry| HistoryRow::new(entry, symbol));
    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));

    format!("{}\n", table)
}

/// One-line confirmation for a newly recorded transaction
pub fn format_added(txn: &Transaction, symbol: &str) -> String {
    format!(
        "Added {}: {} in {} category on {}",
        txn.trans_type(),
        format_money(txn.amount(), symbol),
        txn.category(),
        txn.date().format(DATE_FORMAT)
    )
}

/// One-line confirmation for a removed transaction
pub fn format_removed(index: usize, txn: &Transaction, symbol: &str) -> String {
    format!(
        "Deleted transaction {}: {} {} ({}) on {}",
        index,
        txn.trans_type(),
        format_money(txn.amount(), symbol),
        txn.category(),
        txn.date().format(DATE_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ledger, TransactionType};
    use chrono::NaiveDate;

    fn ledger() -> Ledger {
        let date = NaiveDate::from_ymd_opt(2024, 7, 24);
        let mut ledger = Ledger::new();
        ledger.add_income(1000.0, "Salary", date).unwrap();
        ledger.add_expense(200.0, "Groceries", date).unwrap();
        ledger
    }

    #[test]
    fn test_format_history() {
        let formatted = format_history(&ledger().history(), "$");

        assert!(formatted.contains("Date"));
        assert!(formatted.contains("Category"));
        assert!(formatted.contains("2024-07-24"));
        assert!(formatted.contains("income"));
        assert!(formatted.contains("$1000.00"));
        assert!(formatted.contains("Groceries"));

        let salary = formatted.find("Salary").unwrap();
        let groceries = formatted.find("Groceries").unwrap();
        assert!(salary < groceries);
    }

    #[test]
    fn test_format_empty_history() {
        assert_eq!(format_history(&[], "$"), "No transactions available.\n");
    }

    #[test]
    fn test_format_added() {
        let txn = Transaction::create(
            TransactionType::Income,
            1000.0,
            "Salary",
            NaiveDate::from_ymd_opt(2024, 7, 24),
        )
        .unwrap();

        assert_eq!(
            format_added(&txn, "$"),
            "Added income: $1000.00 in Salary category on 2024-07-24"
        );
    }

    #[test]
    fn test_format_removed() {
        let mut ledger = ledger();
        let removed = ledger.remove_at(1).unwrap();

        assert_eq!(
            format_removed(1, &removed, "$"),
            "Deleted transaction 1: expense $200.00 (Groceries) on 2024-07-24"
        );
    }
}
