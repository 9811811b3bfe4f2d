//! CLI commands for reports
//!
//! Totals and the per-category expense report.

use std::io::Write;

use super::Session;
use crate::display::{format_category_report, format_totals};
use crate::error::LedgerResult;

/// Print total income, total expense and balance
pub fn handle_status<W: Write>(session: &Session, out: &mut W) -> LedgerResult<()> {
    write!(out, "{}", format_totals(&session.ledger.totals(), session.currency()))?;
    Ok(())
}

/// Print expense totals per category
pub fn handle_report<W: Write>(session: &Session, out: &mut W) -> LedgerResult<()> {
    write!(
        out,
        "{}",
        format_category_report(&session.ledger.category_report(), session.currency())
    )?;
    Ok(())
}
