//! User settings for pocket-ledger
//!
//! Display preferences and an optional override of the ledger file location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::storage::file_io::{read_json_value, write_json_atomic};

/// User settings for pocket-ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Ledger file to use instead of `budget.json` in the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<PathBuf>,

    /// Rows shown by `history` when no limit is given (0 = all)
    #[serde(default)]
    pub history_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            ledger_file: None,
            history_limit: 0,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        match read_json_value(&settings_path) {
            Ok(Some(value)) => serde_json::from_value(value).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            }),
            // Don't save yet - let caller decide when to persist
            Ok(None) => Ok(Settings::default()),
            Err(LedgerError::CorruptFile { reason, .. }) => Err(LedgerError::Config(format!(
                "Failed to parse settings file: {}",
                reason
            ))),
            Err(e) => Err(e),
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Resolve the ledger file: explicit override, then settings, then default
    pub fn resolve_ledger_file(&self, paths: &LedgerPaths, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.ledger_file.clone())
            .unwrap_or_else(|| paths.ledger_file())
    }
}
