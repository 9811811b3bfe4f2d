//! JSON Export functionality
//!
//! Exports the ledger together with its totals and category report, for
//! tools that want the aggregates without recomputing them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{CategoryReport, Ledger, Totals, TransactionRecord};

/// Full ledger export document
#[derive(Debug, Clone, Serialize)]
pub struct LedgerExport {
    /// When the export was created
    pub exported_at: DateTime<Utc>,
    /// Version of the exporting application
    pub app_version: String,
    /// Every transaction, in insertion order
    pub transactions: Vec<TransactionRecord>,
    pub totals: Totals,
    pub category_report: CategoryReport,
}

impl LedgerExport {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions: ledger.transactions().iter().map(|t| t.to_record()).collect(),
            totals: ledger.totals(),
            category_report: ledger.category_report(),
        }
    }
}

/// Export the ledger to JSON
pub fn export_json<W: Write>(ledger: &Ledger, writer: &mut W, pretty: bool) -> LedgerResult<()> {
    let export = LedgerExport::from_ledger(ledger);

    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    result.map_err(|e| LedgerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))
}
