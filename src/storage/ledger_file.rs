//! Ledger file persistence
//!
//! The file is a bare JSON array with one object per transaction, each
//! holding `trans_type`, `amount`, `category` and `date`. A missing file is an
//! empty ledger. Anything that is not a JSON array is a corrupt file; an
//! element that does not decode into a valid transaction is a malformed record.

use std::path::Path;

use serde_json::Value;

use super::file_io::{read_json_value, write_json_atomic};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Transaction, TransactionRecord};

/// Load every transaction stored at `path`, in file order
pub fn load(path: &Path) -> LedgerResult<Vec<Transaction>> {
    let Some(document) = read_json_value(path)? else {
        tracing::info!(path = %path.display(), "ledger file not found, starting empty");
        return Ok(Vec::new());
    };

    let elements = match document {
        Value::Array(elements) => elements,
        other => {
            return Err(LedgerError::corrupt_file(
                path,
                format!("expected a JSON array, found {}", describe(&other)),
            ))
        }
    };

    let transactions = elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| decode(index, element))
        .collect::<LedgerResult<Vec<_>>>()?;

    tracing::debug!(path = %path.display(), count = transactions.len(), "loaded ledger");
    Ok(transactions)
}

/// Atomically replace the file at `path` with `transactions`
pub fn save(path: &Path, transactions: &[Transaction]) -> LedgerResult<()> {
    let records: Vec<TransactionRecord> = transactions.iter().map(Transaction::to_record).collect();
    write_json_atomic(path, &records)?;

    tracing::debug!(path = %path.display(), count = records.len(), "saved ledger");
    Ok(())
}

fn decode(index: usize, element: Value) -> LedgerResult<Transaction> {
    let record: TransactionRecord = serde_json::from_value(element)
        .map_err(|e| LedgerError::malformed_record(index, e.to_string()))?;

    Transaction::from_record(record).map_err(|e| match e {
        LedgerError::Validation(reason) => LedgerError::malformed_record(index, reason),
        other => other,
    })
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
