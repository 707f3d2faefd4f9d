//! # Money Errors
//!
//! Error taxonomy for currency lookup, money construction, arithmetic and
//! conversion.
//!
//! None of these errors is retried inside the crate. They are either data
//! errors (a bad currency code or amount coming from outside) or programmer
//! errors (combining operands that cannot be combined), and both are surfaced
//! to the caller immediately.
//!
//! # Error Hierarchy
//!
//! ```text
//! MoneyError
//! ├── UnknownCurrency      - code absent from the currency table
//! ├── InvalidAmount        - unparsable or unrepresentable source amount
//! ├── CurrencyMismatch     - arithmetic/comparison across currencies
//! ├── TypeMismatch         - construction from money of another currency
//! ├── InvalidOperand       - multiplying/dividing by money
//! ├── InvalidOperation     - power, reverse division, reverse subtraction
//! ├── DivisionByZero       - defined amount divided by zero
//! ├── QuantizeError        - amount cannot be quantized to its subunits
//! ├── SignalingNaN         - invalid-computation marker converted to float
//! ├── Overflow             - minor-unit count does not fit the target integer
//! └── Configuration        - invalid money settings
//! ```
//!
//! # Examples
//!
//! ```
//! use shop_money::error::MoneyError;
//!
//! let err = MoneyError::mismatch("EUR", "USD");
//! assert_eq!(
//!     err.to_string(),
//!     "can not combine money in different currencies: EUR and USD"
//! );
//! assert!(!err.is_data_error());
//! ```

use thiserror::Error;

/// Error type for all money operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The currency code is not a known ISO-4217 code.
    #[error("'{code}' is an unknown currency code")]
    UnknownCurrency {
        /// The rejected code, as supplied.
        code: String,
    },

    /// The source could not be parsed as a decimal amount.
    #[error("invalid amount '{input}': {reason}")]
    InvalidAmount {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Two money values in different currencies were combined or compared.
    #[error("can not combine money in different currencies: {left} and {right}")]
    CurrencyMismatch {
        /// Currency of the left-hand operand.
        left: String,
        /// Currency (or kind) of the right-hand operand.
        right: String,
    },

    /// A money value of one currency was used to construct another.
    #[error("can not convert {source_currency} money into {target_currency} money")]
    TypeMismatch {
        /// Currency of the money type being constructed.
        target_currency: String,
        /// Currency of the supplied value.
        source_currency: String,
    },

    /// The operand carries a currency where a plain number is required.
    #[error("can not {operation} money by a value carrying a currency")]
    InvalidOperand {
        /// The attempted operation (`multiply`, `divide`).
        operation: &'static str,
    },

    /// The operation is not defined for money at all.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// A defined amount was divided by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The amount cannot be represented with the currency's subunits.
    #[error("can not represent {value} as {currency} money: {reason}")]
    QuantizeError {
        /// Currency code of the value.
        currency: String,
        /// Raw amount of the value.
        value: String,
        /// Why quantization failed.
        reason: &'static str,
    },

    /// The amount is the invalid-computation marker.
    #[error("cannot convert signaling NaN to float")]
    SignalingNaN,

    /// The result does not fit in the requested integer type.
    #[error("amount overflow: {0}")]
    Overflow(String),

    /// Money settings are invalid.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for money operations.
pub type MoneyResult<T> = Result<T, MoneyError>;

impl MoneyError {
    /// Creates an unknown currency error.
    #[must_use]
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency { code: code.into() }
    }

    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates a currency mismatch error.
    #[must_use]
    pub fn mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(target: impl Into<String>, source: impl Into<String>) -> Self {
        Self::TypeMismatch {
            target_currency: target.into(),
            source_currency: source.into(),
        }
    }

    /// Creates a quantize error.
    #[must_use]
    pub fn quantize(
        currency: impl Into<String>,
        value: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self::QuantizeError {
            currency: currency.into(),
            value: value.into(),
            reason,
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns true if the error was caused by bad input data rather than by
    /// combining operands incorrectly.
    #[must_use]
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCurrency { .. } | Self::InvalidAmount { .. } | Self::Configuration(_)
        )
    }
}

impl From<config::ConfigError> for MoneyError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_correctly() {
        assert_eq!(
            MoneyError::unknown_currency("XYZ").to_string(),
            "'XYZ' is an unknown currency code"
        );
        assert_eq!(
            MoneyError::invalid_amount("abc", "not a number").to_string(),
            "invalid amount 'abc': not a number"
        );
        assert_eq!(
            MoneyError::type_mismatch("EUR", "USD").to_string(),
            "can not convert USD money into EUR money"
        );
        assert_eq!(
            MoneyError::InvalidOperand {
                operation: "multiply"
            }
            .to_string(),
            "can not multiply money by a value carrying a currency"
        );
        assert_eq!(
            MoneyError::InvalidOperation("can not raise currencies to their power").to_string(),
            "invalid operation: can not raise currencies to their power"
        );
        assert_eq!(
            MoneyError::SignalingNaN.to_string(),
            "cannot convert signaling NaN to float"
        );
    }

    #[test]
    fn data_errors_are_classified() {
        assert!(MoneyError::unknown_currency("XYZ").is_data_error());
        assert!(MoneyError::invalid_amount("x", "y").is_data_error());
        assert!(MoneyError::configuration("bad").is_data_error());
        assert!(!MoneyError::DivisionByZero.is_data_error());
        assert!(!MoneyError::mismatch("EUR", "JPY").is_data_error());
    }
}
