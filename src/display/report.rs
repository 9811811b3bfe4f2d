//! Report formatting utilities for terminal output
//!
//! Totals and the per-category expense report.

use crate::models::{CategoryReport, Totals};

/// Format an amount with a currency symbol and two decimals
pub fn format_money(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format the income, expense and balance lines
pub fn format_totals(totals: &Totals, symbol: &str) -> String {
    let rows = [
        ("Total Income:", totals.income),
        ("Total Expense:", totals.expense),
        ("Balance:", totals.balance),
    ];

    let width = rows
        .iter()
        .map(|(_, amount)| format_money(*amount, symbol).chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (label, amount) in rows {
        output.push_str(&format!(
            "{:<15}{:>width$}\n",
            label,
            format_money(amount, symbol),
            width = width
        ));
    }
    output
}

/// Format the category-wise expense report, one line per category
pub fn format_category_report(report: &CategoryReport, symbol: &str) -> String {
    if report.is_empty() {
        return "No expenses to report.\n".to_string();
    }

    let name_width = report
        .keys()
        .map(|name| display_name(name).chars().count())
        .max()
        .unwrap_or(0);
    let amount_width = report
        .values()
        .map(|amount| format_money(*amount, symbol).chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::from("Category-wise Expense Report:\n");
    for (category, amount) in report {
        output.push_str(&format!(
            "  {:<name_width$}  {:>amount_width$}\n",
            display_name(category),
            format_money(*amount, symbol),
        ));
    }
    output
}

/// Categories are stored verbatim, so an empty one needs a visible stand-in
fn display_name(category: &str) -> &str {
    if category.is_empty() {
        "(uncategorized)"
    } else {
        category
    }
}
