//! Transaction CLI commands
//!
//! Adding, removing and listing transactions.

use std::io::Write;

use super::Session;
use crate::display::{format_added, format_history, format_removed};
use crate::error::LedgerResult;
use crate::models::transaction::parse_date;
use crate::models::TransactionType;

/// Record an income or expense and print a confirmation
///
/// `date` is `YYYY-MM-DD`; `None` means today.
pub fn handle_add<W: Write>(
    session: &mut Session,
    out: &mut W,
    trans_type: TransactionType,
    amount: f64,
    category: String,
    date: Option<&str>,
) -> LedgerResult<()> {
    let date = date.map(parse_date).transpose()?;

    let txn = match trans_type {
        TransactionType::Income => session.ledger.add_income(amount, category, date)?,
        TransactionType::Expense => session.ledger.add_expense(amount, category, date)?,
    };

    writeln!(out, "{}", format_added(txn, &session.settings.currency_symbol))?;
    Ok(())
}

/// Remove the transaction at `index` and print what was removed
pub fn handle_remove<W: Write>(session: &mut Session, out: &mut W, index: usize) -> LedgerResult<()> {
    let removed = session.ledger.remove_at(index)?;
    writeln!(out, "{}", format_removed(index, &removed, session.currency()))?;
    Ok(())
}

/// Print the history table
///
/// Shows the most recent `limit` entries, falling back to the configured
/// default; a limit of 0 shows everything. Indices are always the real
/// positions.
pub fn handle_history<W: Write>(
    session: &Session,
    out: &mut W,
    limit: Option<usize>,
) -> LedgerResult<()> {
    let history = session.ledger.history();
    let limit = limit.unwrap_or(session.settings.history_limit);

    let skip = if limit == 0 {
        0
    } else {
        history.len().saturating_sub(limit)
    };

    write!(out, "{}", format_history(&history[skip..], session.currency()))?;
    Ok(())
}
