//! Boundary conversions and currency rounding for monetary values

use bigdecimal::{BigDecimal, RoundingMode};
use std::str::FromStr;

use crate::types::{InvoiceError, InvoiceResult};

/// Number of decimal places used for every displayed or stored amount
pub const CURRENCY_SCALE: i64 = 2;

/// Round an amount to two decimal places, half away from zero
pub fn round_currency(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(CURRENCY_SCALE, RoundingMode::HalfUp)
}

/// Parse a user-entered amount such as `"149.50"`.
///
/// Surrounding whitespace is ignored. Empty input is an error, not zero.
pub fn parse_amount(input: &str) -> InvoiceResult<BigDecimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InvoiceError::InvalidAmount(
            "amount cannot be empty".to_string(),
        ));
    }

    BigDecimal::from_str(trimmed)
        .map_err(|e| InvoiceError::InvalidAmount(format!("'{}': {}", trimmed, e)))
}

/// Convert a floating point amount through its shortest decimal text.
///
/// `0.1_f64` becomes exactly `0.1`, not the binary expansion
/// `0.1000000000000000055511151231257827...`.
pub fn amount_from_f64(value: f64) -> InvoiceResult<BigDecimal> {
    if !value.is_finite() {
        return Err(InvoiceError::InvalidAmount(format!(
            "non-finite amount: {}",
            value
        )));
    }

    BigDecimal::from_str(&value.to_string())
        .map_err(|e| InvoiceError::InvalidAmount(format!("{}: {}", value, e)))
}

/// The zero amount
pub fn zero() -> BigDecimal {
    BigDecimal::from(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_currency(&dec("2.345")).to_string(), "2.35");
        assert_eq!(round_currency(&dec("2.344")).to_string(), "2.34");
        assert_eq!(round_currency(&dec("-2.345")).to_string(), "-2.35");
        assert_eq!(round_currency(&dec("200")).to_string(), "200.00");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 149.50 ").unwrap(), dec("149.5"));
        assert!(matches!(
            parse_amount(""),
            Err(InvoiceError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_amount("12abc"),
            Err(InvoiceError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_amount_from_f64_uses_shortest_text() {
        assert_eq!(amount_from_f64(0.1).unwrap(), dec("0.1"));
        assert_eq!(amount_from_f64(2164.2).unwrap(), dec("2164.2"));
        assert!(amount_from_f64(f64::NAN).is_err());
        assert!(amount_from_f64(f64::INFINITY).is_err());
    }
}
