//! # Error Types
//!
//! Domain-specific error types for vendas-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vendas-core errors (this file)                                        │
//! │  └── CoreError        - Value parsing failures (money, dates)          │
//! │                                                                         │
//! │  vendas-db errors (separate crate)                                     │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Flow: CoreError → DbError::Decode → sentinel (None / false)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Errors raised while converting stored or user-provided values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A monetary amount could not be parsed.
    ///
    /// ## When This Occurs
    /// - `valor_pedido` column holds something other than a decimal
    /// - More than two fractional digits
    #[error("Invalid amount '{value}': {reason}")]
    InvalidAmount { value: String, reason: String },

    /// A timestamp could not be parsed as RFC 3339.
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },
}

impl CoreError {
    pub(crate) fn invalid_amount(value: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidAmount {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::invalid_amount("12.345", "at most two fractional digits");
        assert_eq!(
            err.to_string(),
            "Invalid amount '12.345': at most two fractional digits"
        );

        let err = CoreError::InvalidDate {
            value: "yesterday".to_string(),
            reason: "input contains invalid characters".to_string(),
        };
        assert!(err.to_string().starts_with("Invalid date 'yesterday'"));
    }
}
