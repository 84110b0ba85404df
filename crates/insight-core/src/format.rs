//! Display formatting for calculator output.

use chrono::{Datelike, NaiveDate};

use crate::constants::CURRENCY_SYMBOL;

/// Group digits in threes with commas: `1234567` → `1,234,567`.
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format an amount with the default currency symbol: `12345` → `$12,345`.
pub fn format_currency(amount: i64) -> String {
    format_currency_with(amount, CURRENCY_SYMBOL)
}

/// Format an amount with a given symbol. Negatives render as `-$1,200`.
pub fn format_currency_with(amount: i64, symbol: &str) -> String {
    let grouped = format_number(amount.saturating_abs());
    if amount < 0 {
        format!("-{symbol}{grouped}")
    } else {
        format!("{symbol}{grouped}")
    }
}

/// Completed years between `birth` and `today`. Negative when `birth` is in the future.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
        assert_eq!(format_number(-45_000), "-45,000");
    }

    #[test]
    fn currency_prefixes_symbol() {
        assert_eq!(format_currency(28_000), "$28,000");
        assert_eq!(format_currency(-1_200), "-$1,200");
        assert_eq!(format_currency_with(500, "S$"), "S$500");
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert_eq!(format_number(i64::MIN), "-9,223,372,036,854,775,808");
        assert!(format_currency(i64::MIN).starts_with("-$"));
    }
}
