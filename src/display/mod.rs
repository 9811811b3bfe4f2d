//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display.

pub mod report;
pub mod transaction;

pub use report::{format_category_report, format_money, format_totals};
pub use transaction::{format_added, format_history, format_removed};
