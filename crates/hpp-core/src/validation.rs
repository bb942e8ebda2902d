//! # Validation Module
//!
//! Normalization of raw numeric input.
//!
//! ## Normalize, Don't Reject
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Normalization                                │
//! │                                                                         │
//! │  "abc"  ──► parse_number ──► 0                                          │
//! │  "-5"   ──► parse_number ──► -5 ──► normalize_amount ──► 0              │
//! │  NaN/∞  ───────────────────────────► normalize_amount ──► 0              │
//! │  "12,5" ──► parse_number ──► 12.5 ─► normalize_amount ──► 12.5          │
//! │                                                                         │
//! │  A negative cost has no domain meaning and would corrupt every sum      │
//! │  downstream, so it never reaches the store.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`check_amount`] reports *why* a value would be coerced; callers that
//! validate configuration up front (rather than normalizing keystrokes) use
//! it directly.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks that an amount is finite and not negative.
///
/// ## Example
/// ```rust
/// use hpp_core::validation::check_amount;
///
/// assert!(check_amount("sewingCost", 30_000.0).is_ok());
/// assert!(check_amount("sewingCost", 0.0).is_ok());
/// assert!(check_amount("sewingCost", -1.0).is_err());
/// assert!(check_amount("sewingCost", f64::NAN).is_err());
/// ```
pub fn check_amount(field: &str, value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(value)
}

/// Coerces an amount into the domain: negative, NaN and infinite become `0`.
///
/// Negative zero also comes out as plain `0`.
#[inline]
pub fn normalize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
