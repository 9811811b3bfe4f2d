//! CLI commands for data export

use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::Session;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_csv, export_json, export_yaml};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transaction history)
    Csv,
    /// JSON format (transactions, totals and category report)
    Json,
    /// YAML format (same as JSON, human-readable)
    Yaml,
}

/// Export the ledger to `output` and print where it went
pub fn handle_export<W: Write>(
    session: &Session,
    out: &mut W,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> LedgerResult<()> {
    let file = File::create(output).map_err(|e| {
        LedgerError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_csv(&session.ledger, &mut writer)?,
        ExportFormat::Json => export_json(&session.ledger, &mut writer, pretty)?,
        ExportFormat::Yaml => export_yaml(&session.ledger, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    writeln!(
        out,
        "Exported {} transactions to: {}",
        session.ledger.len(),
        output.display()
    )?;
    Ok(())
}
