//! Export module for pocket-ledger
//!
//! Provides ledger export in multiple formats:
//! - CSV: the transaction history (spreadsheet-compatible)
//! - JSON: transactions plus totals and category report
//! - YAML: the same document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_csv;
pub use json::{export_json, LedgerExport};
pub use yaml::export_yaml;
