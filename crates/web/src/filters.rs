//! Custom Askama template filters and display formatting.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use rust_decimal::Decimal;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Format an amount as rupees: thousands grouping, no decimals.
///
/// Mirrors the sheet owner's convention (`₹12,345`). Rounding is half-even.
#[must_use]
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    let grouped = group_thousands(&rounded.abs().to_string());
    if rounded.is_sign_negative() {
        format!("₹-{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Insert a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_inr_groups_thousands() {
        assert_eq!(format_inr(dec("1234567")), "₹1,234,567");
        assert_eq!(format_inr(dec("1000")), "₹1,000");
        assert_eq!(format_inr(dec("999")), "₹999");
        assert_eq!(format_inr(dec("0")), "₹0");
    }

    #[test]
    fn test_format_inr_rounds_half_even() {
        assert_eq!(format_inr(dec("500.5")), "₹500");
        assert_eq!(format_inr(dec("501.5")), "₹502");
        assert_eq!(format_inr(dec("1234.6")), "₹1,235");
    }

    #[test]
    fn test_format_inr_negative() {
        assert_eq!(format_inr(dec("-500")), "₹-500");
    }
}
