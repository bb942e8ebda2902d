//! # Error Types
//!
//! Domain-specific error types for hpp-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hpp-core errors (this file)                                           │
//! │  ├── CoreError        - Rejected store operations, unknown names        │
//! │  └── ValidationError  - Parameter checks                                │
//! │                                                                         │
//! │  hpp-calc errors (in app)                                              │
//! │  └── AppError         - What the terminal user sees                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → Terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Numbers Never Fail
//! Malformed numeric text is normalized to zero, never reported as an
//! error. The variants below only cover operations that are *rejected*:
//! the store is guaranteed to be unchanged whenever one is returned.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Rejected store operations and unrecognized names.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// The primary component cannot be removed.
    ///
    /// ## User Workflow
    /// ```text
    /// remove 0
    ///      │
    ///      ▼
    /// component at 0 has role Primary
    ///      │
    ///      ▼
    /// PrimaryComponentPermanent ── list untouched
    /// ```
    #[error("The primary component at position {position} cannot be removed")]
    PrimaryComponentPermanent { position: usize },

    /// No component exists at the given position.
    #[error("No component at position {position} (list has {len})")]
    ComponentNotFound { position: usize, len: usize },

    /// A text-driven edit named a field that does not exist.
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    /// A unit name could not be recognized.
    #[error("Unknown unit '{0}' (expected yard or meter)")]
    UnknownUnit(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Parameter validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value must be a finite number.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PrimaryComponentPermanent { position: 0 };
        assert_eq!(
            err.to_string(),
            "The primary component at position 0 cannot be removed"
        );

        let err = CoreError::ComponentNotFound { position: 4, len: 2 };
        assert_eq!(err.to_string(), "No component at position 4 (list has 2)");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "rndCost".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(
            core_err.to_string(),
            "Validation error: rndCost must not be negative"
        );
    }
}
