//! CSV Export functionality
//!
//! Exports the history projection, one row per transaction.

use serde::Serialize;
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::transaction::DATE_FORMAT;
use crate::models::{Ledger, TransactionType};

#[derive(Serialize)]
struct CsvRow<'a> {
    index: usize,
    date: String,
    #[serde(rename = "type")]
    trans_type: TransactionType,
    amount: f64,
    category: &'a str,
}

/// Export all transactions to CSV
pub fn export_csv<W: Write>(ledger: &Ledger, writer: &mut W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for (index, txn) in ledger.transactions().iter().enumerate() {
        csv_writer
            .serialize(CsvRow {
                index,
                date: txn.date().format(DATE_FORMAT).to_string(),
                trans_type: txn.trans_type(),
                amount: txn.amount(),
                category: txn.category(),
            })
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    // Serializing no rows writes no header either
    if ledger.is_empty() {
        csv_writer
            .write_record(["index", "date", "type", "amount", "category"])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_csv_export() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 24);
        let mut ledger = Ledger::new();
        ledger.add_income(1000.0, "Salary", date).unwrap();
        ledger.add_expense(12.5, "Food, drinks", date).unwrap();

        let mut output = Vec::new();
        export_csv(&ledger, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "index,date,type,amount,category\n\
             0,2024-07-24,income,1000.0,Salary\n\
             1,2024-07-24,expense,12.5,\"Food, drinks\"\n"
        );
    }

    #[test]
    fn test_csv_export_empty_ledger_has_header() {
        let mut output = Vec::new();
        export_csv(&Ledger::new(), &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "index,date,type,amount,category\n"
        );
    }
}
