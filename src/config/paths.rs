//! Path management for pocket-ledger
//!
//! ## Path Resolution Order
//!
//! 1. `POCKET_LEDGER_DIR` environment variable (if set)
//! 2. The platform config directory joined with `pocket-ledger`
//!    (`$XDG_CONFIG_HOME` or `~/.config` on Linux, `%APPDATA%` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::LedgerError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "POCKET_LEDGER_DIR";

/// Manages all paths used by pocket-ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = match std::env::var_os(DIR_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the default ledger file
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("budget.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| LedgerError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("pocket-ledger"))
}
