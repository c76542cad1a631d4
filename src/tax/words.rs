//! Amount-in-words conversion using the Indian numbering system
//!
//! Digits are grouped as hundreds, thousands, lakhs (10^5) and crores
//! (10^7). Crores recurse, so 150 crore reads "One Hundred Fifty Crore".

use bigdecimal::{BigDecimal, ToPrimitive};

use crate::money::{amount_from_f64, round_currency, zero};

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const THOUSAND: u128 = 1_000;
const LAKH: u128 = 100_000;
const CRORE: u128 = 10_000_000;

/// Spell out a rupee amount, e.g. `236.50` becomes
/// `"Two Hundred Thirty Six Rupees and Fifty Paise"`.
///
/// The amount is rounded to paise first. Negative amounts and amounts too
/// large to represent yield an empty string, since the result is only ever
/// displayed.
pub fn amount_to_words(amount: &BigDecimal) -> String {
    if *amount < zero() {
        tracing::debug!(%amount, "negative amount has no words");
        return String::new();
    }

    let (paise_total, _) = round_currency(amount).into_bigint_and_exponent();
    let Some(paise_total) = paise_total.to_u128() else {
        tracing::warn!(%amount, "amount too large to spell out");
        return String::new();
    };

    let rupees = paise_total / 100;
    let paise = paise_total % 100;

    let mut result = number_to_words(rupees);
    if result.is_empty() {
        result.push_str("Zero");
    }
    result.push_str(" Rupees");

    if paise > 0 {
        result.push_str(" and ");
        result.push_str(&number_to_words(paise));
        result.push_str(" Paise");
    }

    result
}

/// Floating point entry point; NaN, infinities and negatives give `""`.
pub fn amount_to_words_f64(amount: f64) -> String {
    match amount_from_f64(amount) {
        Ok(value) => amount_to_words(&value),
        Err(e) => {
            tracing::debug!(error = %e, "amount has no words");
            String::new()
        }
    }
}

/// Spell out a whole number; zero is the empty string.
pub fn number_to_words(number: u128) -> String {
    let mut words = Vec::new();
    push_words(number, &mut words);
    words.join(" ")
}

fn push_words(n: u128, words: &mut Vec<&'static str>) {
    match n {
        0 => {}
        1..=9 => words.push(ONES[n as usize]),
        10..=19 => words.push(TEENS[(n - 10) as usize]),
        20..=99 => {
            words.push(TENS[(n / 10) as usize]);
            push_words(n % 10, words);
        }
        100..=999 => {
            words.push(ONES[(n / 100) as usize]);
            words.push("Hundred");
            push_words(n % 100, words);
        }
        _ if n < LAKH => {
            push_words(n / THOUSAND, words);
            words.push("Thousand");
            push_words(n % THOUSAND, words);
        }
        _ if n < CRORE => {
            push_words(n / LAKH, words);
            words.push("Lakh");
            push_words(n % LAKH, words);
        }
        _ => {
            push_words(n / CRORE, words);
            words.push("Crore");
            push_words(n % CRORE, words);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn words(s: &str) -> String {
        amount_to_words(&BigDecimal::from_str(s).unwrap())
    }

    #[test]
    fn test_zero_and_paise_only() {
        assert_eq!(words("0"), "Zero Rupees");
        assert_eq!(words("0.50"), "Zero Rupees and Fifty Paise");
        assert_eq!(words("0.05"), "Zero Rupees and Five Paise");
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(words("7"), "Seven Rupees");
        assert_eq!(words("13"), "Thirteen Rupees");
        assert_eq!(words("40"), "Forty Rupees");
        assert_eq!(words("99"), "Ninety Nine Rupees");
        assert_eq!(words("236"), "Two Hundred Thirty Six Rupees");
        assert_eq!(words("100"), "One Hundred Rupees");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(words("1000"), "One Thousand Rupees");
        assert_eq!(words("20020"), "Twenty Thousand Twenty Rupees");
        assert_eq!(words("100000"), "One Lakh Rupees");
        assert_eq!(words("120000"), "One Lakh Twenty Thousand Rupees");
        assert_eq!(
            words("2164.20"),
            "Two Thousand One Hundred Sixty Four Rupees and Twenty Paise"
        );
        assert_eq!(words("10000000"), "One Crore Rupees");
        assert_eq!(
            words("12345678"),
            "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight Rupees"
        );
        assert_eq!(words("1500000000"), "One Hundred Fifty Crore Rupees");
    }

    #[test]
    fn test_integral_amount_has_no_paise_clause() {
        assert!(!words("500.00").contains("Paise"));
        assert!(!words("500.004").contains("Paise"));
    }

    #[test]
    fn test_rounds_to_paise() {
        assert_eq!(words("1.005"), "One Rupees and One Paise");
        assert_eq!(words("1.999"), "Two Rupees");
    }

    #[test]
    fn test_fail_soft_inputs() {
        assert_eq!(words("-1"), "");
        assert_eq!(amount_to_words_f64(f64::NAN), "");
        assert_eq!(amount_to_words_f64(f64::INFINITY), "");
        assert_eq!(amount_to_words_f64(-0.5), "");
    }

    #[test]
    fn test_f64_entry_point() {
        assert_eq!(amount_to_words_f64(0.5), "Zero Rupees and Fifty Paise");
        assert_eq!(amount_to_words_f64(236.0), "Two Hundred Thirty Six Rupees");
        assert_eq!(
            amount_to_words_f64(0.1 + 0.2),
            "Zero Rupees and Thirty Paise"
        );
    }

    #[test]
    fn test_repeatable() {
        assert_eq!(words("98765.43"), words("98765.43"));
    }
}
