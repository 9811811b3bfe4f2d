//! Transaction model
//!
//! A transaction is one validated monetary movement: an income or an expense
//! with a positive amount, a free-form category and a calendar date. Values
//! are immutable once created; the only way to obtain one is through
//! [`Transaction::create`] or [`Transaction::from_record`], which share the
//! same validation.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LedgerError, LedgerResult};

/// Textual date format used on disk and on the command line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl TransactionType {
    /// The lowercase label used in persisted records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The persisted shape of a transaction
///
/// Exactly four keys. Unknown keys are ignored when decoding so files written
/// by other tools (for example records carrying an `id`) still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub trans_type: TransactionType,
    pub amount: f64,
    pub category: String,
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    trans_type: TransactionType,
    amount: f64,
    category: String,
    date: NaiveDate,
}

impl Transaction {
    /// Create a validated transaction
    ///
    /// Fails with [`LedgerError::Validation`] unless `amount` is finite and
    /// strictly positive and the date has a four-digit year. A missing `date`
    /// becomes today's local date. The category is stored verbatim.
    pub fn create(
        trans_type: TransactionType,
        amount: f64,
        category: impl Into<String>,
        date: Option<NaiveDate>,
    ) -> LedgerResult<Self> {
        validate_amount(trans_type, amount)?;
        let date = date.unwrap_or_else(today);
        validate_date(date)?;

        Ok(Self {
            trans_type,
            amount,
            category: category.into(),
            date,
        })
    }

    /// Rebuild a transaction from its persisted record
    ///
    /// Applies the same amount validation as [`Transaction::create`].
    pub fn from_record(record: TransactionRecord) -> LedgerResult<Self> {
        Self::create(
            record.trans_type,
            record.amount,
            record.category,
            Some(record.date),
        )
    }

    /// Produce the persisted record for this transaction
    pub fn to_record(&self) -> TransactionRecord {
        TransactionRecord {
            trans_type: self.trans_type,
            amount: self.amount,
            category: self.category.clone(),
            date: self.date,
        }
    }

    pub fn trans_type(&self) -> TransactionType {
        self.trans_type
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.trans_type == TransactionType::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.trans_type == TransactionType::Expense
    }
}

impl From<&Transaction> for TransactionRecord {
    fn from(txn: &Transaction) -> Self {
        txn.to_record()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {} ({})",
            self.date.format(DATE_FORMAT),
            self.trans_type,
            self.amount,
            self.category
        )
    }
}

/// Parse a `YYYY-MM-DD` date supplied by a user
///
/// Month and day must be zero-padded; `2024-7-4` is rejected.
pub fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    parse_strict(input.trim()).ok_or_else(|| {
        LedgerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", input))
    })
}

/// Exactly `dddd-dd-dd` naming a real calendar date
fn parse_strict(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Serde adapter holding dates to the strict `YYYY-MM-DD` text form
mod iso_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{parse_strict, DATE_FORMAT};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_strict(&text).ok_or_else(|| {
            de::Error::custom(format!("invalid date '{}', expected YYYY-MM-DD", text))
        })
    }
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn validate_amount(trans_type: TransactionType, amount: f64) -> LedgerResult<()> {
    // NaN fails every comparison
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(LedgerError::Validation(format!(
            "{} amount must be positive, got {}",
            trans_type.label(),
            amount
        )))
    }
}

fn validate_date(date: NaiveDate) -> LedgerResult<()> {
    // Only four-digit years fit the YYYY-MM-DD file format
    if (0..=9999).contains(&date.year()) {
        Ok(())
    } else {
        Err(LedgerError::Validation(format!(
            "Date {} is outside the years 0000-9999",
            date
        )))
    }
}
