//! YAML Export functionality
//!
//! Same document as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;
use crate::models::Ledger;

/// Export the ledger to YAML
pub fn export_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_ledger(ledger);

    writeln!(writer, "# pocket-ledger export")
        .and_then(|()| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|()| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|()| writeln!(writer))
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))
}
