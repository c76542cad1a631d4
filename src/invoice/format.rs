//! Display helpers for dates and amounts

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::money::{round_currency, zero};

/// Placeholder shown for missing values
pub const NOT_AVAILABLE: &str = "NA";

/// Format a date as `dd/mm/yyyy`, or `NA` when absent
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format an amount with exactly two decimals; absent amounts print as `0.00`
pub fn format_amount(amount: Option<&BigDecimal>) -> String {
    match amount {
        Some(a) => round_currency(a).to_string(),
        None => round_currency(&zero()).to_string(),
    }
}

/// Format an amount with a currency symbol prefix, e.g. `₹236.00`
pub fn currency(symbol: &str, amount: Option<&BigDecimal>) -> String {
    format!("{}{}", symbol, format_amount(amount))
}

/// The value itself, or `NA` when absent or blank
pub fn or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
