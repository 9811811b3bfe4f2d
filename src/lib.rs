//! pocket-ledger - personal finance ledger
//!
//! Records income and expense entries, computes totals, groups expenses by
//! category and persists everything to a single JSON file between runs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: the `Transaction` value type and the `Ledger` aggregate
//! - `storage`: atomic JSON file persistence
//! - `error`: custom error types
//! - `config`: path resolution and user settings
//! - `display`: terminal formatting
//! - `export`: CSV, JSON and YAML exports
//! - `cli`: command handlers and the interactive shell
//! - `logging`: tracing subscriber setup for the binary
//!
//! # Example
//!
//! ```rust,no_run
//! use pocket_ledger::Ledger;
//!
//! # fn main() -> Result<(), pocket_ledger::LedgerError> {
//! let mut ledger = Ledger::open("budget.json")?;
//! ledger.add_income(1000.0, "Salary", None)?;
//! ledger.add_expense(200.0, "Groceries", None)?;
//!
//! let totals = ledger.totals();
//! assert_eq!(totals.balance, 800.0);
//! ledger.save_to("budget.json")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use models::{CategoryReport, HistoryEntry, Ledger, Totals, Transaction, TransactionType};
