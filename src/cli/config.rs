//! CLI command for configuration

use std::io::Write;
use std::path::Path;

use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;

/// Print paths and settings, optionally writing the settings file first
///
/// With `init`, the current settings are written to `config.json` unless the
/// file already exists.
pub fn handle_config<W: Write>(
    paths: &LedgerPaths,
    settings: &Settings,
    ledger_file: &Path,
    init: bool,
    out: &mut W,
) -> LedgerResult<()> {
    let settings_file = paths.settings_file();

    if init {
        if settings_file.exists() {
            writeln!(out, "Settings file already exists: {}", settings_file.display())?;
        } else {
            settings.save(paths)?;
            writeln!(out, "Wrote settings to {}", settings_file.display())?;
        }
        writeln!(out)?;
    }

    writeln!(out, "pocket-ledger Configuration")?;
    writeln!(out, "===========================")?;
    writeln!(out, "Base directory: {}", paths.base_dir().display())?;
    writeln!(out, "Settings file:  {}", settings_file.display())?;
    writeln!(out, "Ledger file:    {}", ledger_file.display())?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Schema version:  {}", settings.schema_version)?;
    writeln!(out, "  Currency symbol: {}", settings.currency_symbol)?;
    writeln!(out, "  History limit:   {}", settings.history_limit)?;
    Ok(())
}
