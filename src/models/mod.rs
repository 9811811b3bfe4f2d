//! Core data models for pocket-ledger
//!
//! A [`Ledger`] owns an ordered sequence of [`Transaction`] values and
//! provides the add, remove, aggregation and persistence operations.

pub mod ledger;
pub mod transaction;

pub use ledger::{CategoryReport, HistoryEntry, Ledger, Totals};
pub use transaction::{Transaction, TransactionRecord, TransactionType};
