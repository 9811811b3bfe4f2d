//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the ledger. Handlers write to any `Write` so
//! the interactive shell can reuse them.

pub mod config;
pub mod export;
pub mod report;
pub mod shell;
pub mod transaction;

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::models::Ledger;

pub use config::handle_config;
pub use export::{handle_export, ExportFormat};
pub use report::{handle_report, handle_status};
pub use shell::run_shell;
pub use transaction::{handle_add, handle_history, handle_remove};

/// A ledger loaded from a file, together with the settings used to show it
#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    pub ledger: Ledger,
    pub settings: Settings,
}

impl Session {
    /// Load the ledger at `path`; a missing file starts an empty ledger
    pub fn open(path: PathBuf, settings: Settings) -> LedgerResult<Self> {
        let ledger = Ledger::open(&path)?;
        Ok(Self {
            path,
            ledger,
            settings,
        })
    }

    /// The file this session loads from and saves to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the ledger back to its file
    pub fn save(&self) -> LedgerResult<()> {
        self.ledger.save_to(&self.path)
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_save_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");

        let mut session = Session::open(path.clone(), Settings::default()).unwrap();
        assert!(session.ledger.is_empty());
        assert!(!path.exists());

        session.ledger.add_income(10.0, "Gift", None).unwrap();
        session.save().unwrap();

        let reopened = Session::open(path, Settings::default()).unwrap();
        assert_eq!(reopened.ledger, session.ledger);
        assert_eq!(reopened.currency(), "$");
    }
}
