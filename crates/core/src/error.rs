//! Currency error types.
//!
//! Every fallible operation in this crate reports one of these variants. The
//! `try_*` counterparts swallow them and return `Option` instead.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `CurrencyError`.
pub type CurrencyResult<T> = Result<T, CurrencyError>;

/// Errors raised by currency resolution, money arithmetic and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    // ========== Registry Errors ==========
    /// The input is not a known ISO 4217 alphabetic code.
    #[error("The [{0}] is an invalid currency code")]
    InvalidCurrencyCode(String),

    /// The input is not a known ISO 4217 numeric code.
    #[error("The [{0}] is an invalid currency numeric")]
    InvalidCurrencyNumeric(String),

    // ========== Operation Errors ==========
    /// Operands of a same-currency operation have different currencies.
    #[error("Currency mismatch: {left} and {right}")]
    CurrencyMismatch {
        /// Currency code of the left operand.
        left: String,
        /// Currency code of the right operand.
        right: String,
    },

    /// Division by zero.
    #[error("Attempted to divide by zero")]
    DivideByZero,

    /// Value does not fit the target numeric type.
    #[error("Value {value} was either too large or too small for {target}")]
    Overflow {
        /// Name of the target type.
        target: &'static str,
        /// The offending value, truncated toward zero.
        value: Decimal,
    },

    // ========== Input Errors ==========
    /// Text could not be parsed.
    #[error("Input string [{input}] was not in a correct {expected} format")]
    Format {
        /// The rejected text.
        input: String,
        /// What the text was expected to be.
        expected: &'static str,
    },

    /// An argument is invalid.
    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },

    /// A required argument is missing or blank.
    #[error("Value cannot be empty: {0}")]
    MissingArgument(&'static str),
}

impl CurrencyError {
    /// Returns true for errors caused by currency information itself.
    #[must_use]
    pub const fn is_currency_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCurrencyCode(_)
                | Self::InvalidCurrencyNumeric(_)
                | Self::CurrencyMismatch { .. }
        )
    }

    /// Returns a stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCurrencyCode(_) => "INVALID_CURRENCY_CODE",
            Self::InvalidCurrencyNumeric(_) => "INVALID_CURRENCY_NUMERIC",
            Self::CurrencyMismatch { .. } => "INVALID_CURRENCY_OPERATION",
            Self::DivideByZero => "DIVIDE_BY_ZERO",
            Self::Overflow { .. } => "OVERFLOW",
            Self::Format { .. } => "FORMAT_ERROR",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::MissingArgument(_) => "MISSING_ARGUMENT",
        }
    }

    pub(crate) fn format(input: &str, expected: &'static str) -> Self {
        Self::Format {
            input: input.to_string(),
            expected,
        }
    }

    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_error_category() {
        assert!(CurrencyError::InvalidCurrencyCode("BDE".into()).is_currency_error());
        assert!(CurrencyError::InvalidCurrencyNumeric("123".into()).is_currency_error());
        assert!(
            CurrencyError::CurrencyMismatch {
                left: "CNY".into(),
                right: "CLP".into()
            }
            .is_currency_error()
        );
        assert!(!CurrencyError::DivideByZero.is_currency_error());
        assert!(!CurrencyError::format("x", "money").is_currency_error());
        assert!(!CurrencyError::MissingArgument("region").is_currency_error());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CurrencyError::InvalidCurrencyCode(String::new()).error_code(),
            "INVALID_CURRENCY_CODE"
        );
        assert_eq!(
            CurrencyError::CurrencyMismatch {
                left: String::new(),
                right: String::new()
            }
            .error_code(),
            "INVALID_CURRENCY_OPERATION"
        );
        assert_eq!(CurrencyError::DivideByZero.error_code(), "DIVIDE_BY_ZERO");
        assert_eq!(
            CurrencyError::invalid_argument("rate", "negative").error_code(),
            "INVALID_ARGUMENT"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CurrencyError::InvalidCurrencyCode("BDE".into()).to_string(),
            "The [BDE] is an invalid currency code"
        );
        assert_eq!(
            CurrencyError::format("1fdsf", "money").to_string(),
            "Input string [1fdsf] was not in a correct money format"
        );
        assert_eq!(
            CurrencyError::Overflow {
                target: "u8",
                value: dec!(1000)
            }
            .to_string(),
            "Value 1000 was either too large or too small for u8"
        );
    }
}
