//! # Number Module
//!
//! Locale-aware conversion between typed text and numbers.
//!
//! ## The Convention
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  id-ID style numbers                                                    │
//! │                                                                         │
//! │    "1.234.567,89"   .  = thousands separator (ignored on input)         │
//! │                     ,  = decimal separator                              │
//! │                                                                         │
//! │  parse_number("1.234,56")    → 1234.56                                  │
//! │  format_number(1234.56, 2)   → "1.234,56"                               │
//! │  format_number(0.0, 2)       → ""          (untouched field = blank)    │
//! │                                                                         │
//! │  Parsing is permissive: "abc" → 0, "12abc" → 12. It never fails.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

/// Thousands separator in both directions.
pub const GROUP_SEPARATOR: char = '.';

/// Decimal separator in both directions.
pub const DECIMAL_SEPARATOR: char = ',';

/// Upper bound for requested fractional digits.
pub const MAX_DECIMAL_DIGITS: u32 = 20;

/// Longest leading real number, after the separators have been swapped.
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("Invalid leading number regex")
});

// =============================================================================
// Parse
// =============================================================================

/// Parses user-typed text written with `.` thousands and `,` decimals.
///
/// Every `.` is dropped, every `,` becomes a decimal point, and the longest
/// leading number is read. Anything unreadable is `0`.
///
/// ## Example
/// ```rust
/// use hpp_core::number::parse_number;
///
/// assert_eq!(parse_number("1.234,56"), 1234.56);
/// assert_eq!(parse_number("12 meter"), 12.0);
/// assert_eq!(parse_number("abc"), 0.0);
/// assert_eq!(parse_number(""), 0.0);
/// ```
///
/// ## Sign
/// Negative input is returned as typed. Clamping to zero belongs to the
/// store, which owns the "no negative costs" rule.
pub fn parse_number(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|&c| c != GROUP_SEPARATOR)
        .map(|c| if c == DECIMAL_SEPARATOR { '.' } else { c })
        .collect();

    LEADING_NUMBER
        .captures(&cleaned)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

// =============================================================================
// Format
// =============================================================================

/// Formats a number with `.` thousands and `,` decimals, fixed to
/// `decimal_digits` fractional digits.
///
/// Exactly zero renders as the empty string. Any other value, however
/// small, is rendered normally: `0.001` with no decimals is `"0"`, not `""`.
///
/// Rounding is half away from zero on the shortest decimal form of the
/// value, so `1.005` at two digits is `"1,01"`.
///
/// ## Example
/// ```rust
/// use hpp_core::number::format_number;
///
/// assert_eq!(format_number(1234.56, 2), "1.234,56");
/// assert_eq!(format_number(550_000.0, 0), "550.000");
/// assert_eq!(format_number(0.0, 2), "");
/// assert_eq!(format_number(0.001, 0), "0");
/// ```
pub fn format_number(value: f64, decimal_digits: u32) -> String {
    if value == 0.0 {
        return String::new();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let digits = decimal_digits.min(MAX_DECIMAL_DIGITS);
    let plain = fixed_point(value.abs(), digits);
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (plain.as_str(), ""),
    };

    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 1);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac_part);
    }
    out
}

/// Renders a non-negative value as `int.frac` with exactly `digits` fraction
/// digits, no grouping.
fn fixed_point(abs: f64, digits: u32) -> String {
    // Display gives the shortest round-tripping form and never uses exponents.
    match Decimal::from_str(&abs.to_string()) {
        Ok(exact) => {
            let mut rounded =
                exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(digits);
            // rescale stops early once the mantissa would exceed 96 bits
            if rounded.scale() < digits {
                return format!("{:.*}", digits as usize, abs);
            }
            rounded.to_string()
        }
        // Beyond Decimal's range; binary rounding is as good as it gets here.
        Err(_) => format!("{:.*}", digits as usize, abs),
    }
}

/// Inserts a group separator every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
