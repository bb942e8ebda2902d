//! # Application Error Type
//!
//! Unified error type for calculator commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in hpp-calc                               │
//! │                                                                         │
//! │  input line ──► clap parse ──► clap::Error ──────────────┐              │
//! │                     │                                    │              │
//! │                     ▼                                    ▼              │
//! │              command handler ──► CoreError ──────► AppError            │
//! │                     │                                    │              │
//! │                     ▼                                    ▼              │
//! │              render view                 "error[BUSINESS_LOGIC]: ..."  │
//! │                                                                         │
//! │  The session keeps running after every AppError.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! `AppError` serializes for frontends as:
//! ```json
//! {
//!   "code": "BUSINESS_LOGIC",
//!   "message": "The primary component at position 0 cannot be removed"
//! }
//! ```

use std::fmt;

use hpp_core::CoreError;
use serde::Serialize;

/// Error returned from calculator commands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No component at the requested position
    NotFound,

    /// Input validation failed (bad field, unit or parameter)
    ValidationError,

    /// Operation not allowed (removing the primary component)
    BusinessLogic,

    /// The input line is not a valid command
    Usage,

    /// Reading input or writing output failed
    Io,

    /// Unexpected failure
    Internal,
}

impl ErrorCode {
    /// The wire name of the code, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BusinessLogic => "BUSINESS_LOGIC",
            ErrorCode::Usage => "USAGE",
            ErrorCode::Io => "IO",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AppError {
    /// Creates a new application error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Usage, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to application errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::PrimaryComponentPermanent { .. } => ErrorCode::BusinessLogic,
            CoreError::ComponentNotFound { .. } => ErrorCode::NotFound,
            CoreError::UnknownField(_) | CoreError::UnknownUnit(_) | CoreError::Validation(_) => {
                ErrorCode::ValidationError
            }
        };
        AppError::new(code, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::new(ErrorCode::Io, err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::internal(format!("JSON encoding failed: {}", err))
    }
}

/// Clap renders multi-line messages; only the first line is kept.
impl From<clap::Error> for AppError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let first = rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string();
        AppError::usage(first)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

/// Result type for calculator commands.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use hpp_core::ValidationError;

    #[test]
    fn test_core_error_codes() {
        let err: AppError = CoreError::PrimaryComponentPermanent { position: 0 }.into();
        assert_eq!(err.code, ErrorCode::BusinessLogic);

        let err: AppError = CoreError::ComponentNotFound { position: 4, len: 1 }.into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "No component at position 4 (list has 1)");

        let err: AppError = CoreError::UnknownUnit("inch".to_string()).into();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err: AppError = CoreError::from(ValidationError::Negative {
            field: "quantity".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_display_format() {
        let err = AppError::usage("unrecognized subcommand 'frobnicate'");
        assert_eq!(
            err.to_string(),
            "error[USAGE]: unrecognized subcommand 'frobnicate'"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let err: AppError = CoreError::PrimaryComponentPermanent { position: 0 }.into();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "BUSINESS_LOGIC");
        assert_eq!(
            json["message"],
            "The primary component at position 0 cannot be removed"
        );
    }
}
