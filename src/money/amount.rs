//! # Amount
//!
//! The numeric payload of a money value.
//!
//! An amount is either a defined decimal, the *undefined* marker meaning
//! "no price set", or the *invalid* marker meaning "a computation failed".
//! The two markers are kept apart so an intentionally unset price can never
//! be confused with the result of an overflow.
//!
//! # Examples
//!
//! ```
//! use shop_money::money::Amount;
//! use rust_decimal::Decimal;
//!
//! assert_eq!(Amount::parse("12.50").unwrap(), Amount::Defined(Decimal::new(1250, 2)));
//! assert_eq!(Amount::parse("").unwrap(), Amount::Undefined);
//! assert_eq!(Amount::parse("NaN").unwrap(), Amount::Undefined);
//! assert_eq!(Amount::parse("sNaN").unwrap(), Amount::Invalid);
//! assert!(Amount::parse("twelve").is_err());
//! ```

use crate::error::{MoneyError, MoneyResult};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Numeric payload of a money value.
///
/// Equality on `Amount` is structural: `Undefined == Undefined`. Numeric
/// equality with NaN semantics lives on `MoneyValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Amount {
    /// A finite decimal amount.
    Defined(Decimal),
    /// No price set.
    #[default]
    Undefined,
    /// Result of an invalid computation, such as an overflow.
    Invalid,
}

impl Amount {
    /// A defined zero.
    pub const ZERO: Self = Self::Defined(Decimal::ZERO);

    /// Parses a numeric string.
    ///
    /// Surrounding whitespace is ignored. An empty string or `NaN` (in any
    /// case, optionally signed) yields [`Amount::Undefined`], `sNaN` yields
    /// [`Amount::Invalid`], and scientific notation is accepted.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if the text is not a number or is
    /// an infinity.
    pub fn parse(input: &str) -> MoneyResult<Self> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(Self::Undefined);
        }
        let unsigned = text.trim_start_matches(['+', '-']);
        if unsigned.eq_ignore_ascii_case("nan") {
            return Ok(Self::Undefined);
        }
        if unsigned.eq_ignore_ascii_case("snan") {
            return Ok(Self::Invalid);
        }
        if unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity") {
            return Err(MoneyError::invalid_amount(
                input,
                "infinite amounts are not representable",
            ));
        }
        let parsed = if text.contains(['e', 'E']) {
            Decimal::from_scientific(text)
        } else {
            Decimal::from_str(text)
        }
        .map_err(|err| MoneyError::invalid_amount(input, err.to_string()))?;
        if exact_scale(text).is_some_and(|scale| i64::from(parsed.normalize().scale()) < scale) {
            return Err(MoneyError::invalid_amount(
                input,
                "more significant digits than a decimal can hold",
            ));
        }
        Ok(Self::Defined(parsed))
    }

    /// Converts a float exactly, keeping every binary digit that fits.
    ///
    /// A NaN float yields [`Amount::Undefined`].
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` for infinities and for magnitudes
    /// beyond the decimal range.
    pub fn from_f64(value: f64) -> MoneyResult<Self> {
        if value.is_nan() {
            return Ok(Self::Undefined);
        }
        Decimal::from_f64_retain(value)
            .map(Self::Defined)
            .ok_or_else(|| MoneyError::invalid_amount(value.to_string(), "float out of range"))
    }

    /// Returns the decimal if the amount is defined.
    #[inline]
    #[must_use]
    pub const fn decimal(&self) -> Option<Decimal> {
        match self {
            Self::Defined(d) => Some(*d),
            Self::Undefined | Self::Invalid => None,
        }
    }

    /// Returns true for both the undefined and the invalid marker.
    #[inline]
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        !matches!(self, Self::Defined(_))
    }

    /// Adds two amounts with the undefined-absorbing rule.
    ///
    /// `Invalid` is contagious; `Undefined` counts as zero, so it yields the
    /// other operand and two undefined amounts sum to zero; overflow produces
    /// `Invalid`.
    #[must_use]
    pub(crate) fn absorbing_add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Invalid, _) | (_, Self::Invalid) => Self::Invalid,
            (Self::Undefined, Self::Undefined) => Self::ZERO,
            (Self::Undefined, other) | (other, Self::Undefined) => other,
            (Self::Defined(a), Self::Defined(b)) => overflow_checked(a.checked_add(b), "add"),
        }
    }

    /// Multiplies by a plain decimal factor.
    #[must_use]
    pub(crate) fn scaled(self, factor: Decimal) -> Self {
        match self {
            Self::Defined(a) => overflow_checked(a.checked_mul(factor), "multiply"),
            marker => marker,
        }
    }

    /// Divides by a plain decimal divisor.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::DivisionByZero` if a defined amount is divided by
    /// zero.
    pub(crate) fn divided(self, divisor: Decimal) -> MoneyResult<Self> {
        match self {
            Self::Defined(a) => {
                if divisor.is_zero() {
                    return Err(MoneyError::DivisionByZero);
                }
                Ok(overflow_checked(a.checked_div(divisor), "divide"))
            }
            marker => Ok(marker),
        }
    }
}

/// Fractional digits needed to hold `text` exactly, ignoring trailing zeros.
///
/// Returns `None` when the exponent is not a plain integer.
fn exact_scale(text: &str) -> Option<i64> {
    let (mantissa, exponent) = match text.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().ok()?),
        None => (text, 0),
    };
    let fraction = mantissa.split_once('.').map_or("", |(_, fraction)| fraction);
    let digits = i64::try_from(fraction.trim_end_matches('0').len()).ok()?;
    Some(digits.saturating_sub(exponent).max(0))
}

fn overflow_checked(result: Option<Decimal>, operation: &'static str) -> Amount {
    match result {
        Some(d) => Amount::Defined(d),
        None => {
            tracing::debug!(operation, "decimal overflow, amount marked invalid");
            Amount::Invalid
        }
    }
}

impl std::ops::Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Defined(d) => Self::Defined(-d),
            marker => marker,
        }
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::Defined(value)
    }
}

impl FromStr for Amount {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defined(d) => write!(f, "{d}"),
            Self::Undefined => write!(f, "NaN"),
            Self::Invalid => write!(f, "sNaN"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    mod parsing {
        use super::*;

        #[test]
        fn parses_plain_decimals() {
            assert_eq!(Amount::parse("12.34").unwrap(), Amount::Defined(dec("12.34")));
            assert_eq!(Amount::parse("-0.5").unwrap(), Amount::Defined(dec("-0.5")));
            assert_eq!(Amount::parse("  7 ").unwrap(), Amount::Defined(dec("7")));
        }

        #[test]
        fn keeps_scale() {
            let amount = Amount::parse("12.3400").unwrap();
            assert_eq!(amount.to_string(), "12.3400");
        }

        #[test]
        fn parses_scientific_notation() {
            assert_eq!(Amount::parse("1.5e3").unwrap(), Amount::Defined(dec("1500")));
            assert_eq!(Amount::parse("25E-2").unwrap(), Amount::Defined(dec("0.25")));
        }

        #[test]
        fn nan_spellings_are_undefined() {
            for text in ["NaN", "nan", "-NaN", "+nan", ""] {
                assert_eq!(Amount::parse(text).unwrap(), Amount::Undefined, "{text:?}");
            }
        }

        #[test]
        fn signaling_nan_is_invalid() {
            assert_eq!(Amount::parse("sNaN").unwrap(), Amount::Invalid);
            assert_eq!(Amount::parse("-snan").unwrap(), Amount::Invalid);
        }

        #[test]
        fn accepts_full_precision() {
            let text = "0.1234567890123456789012345678";
            assert_eq!(Amount::parse(text).unwrap(), Amount::Defined(dec(text)));
            assert_eq!(
                Amount::parse("1.50000000000000000000000000000000").unwrap(),
                Amount::Defined(dec("1.5"))
            );
            assert_eq!(Amount::parse("1.25e-2").unwrap(), Amount::Defined(dec("0.0125")));
        }

        #[test]
        fn rejects_digits_that_would_be_rounded_away() {
            for text in [
                "0.123456789012345678901234567890123",
                "0.12345678901234567890123456789",
                "1234567890.1234567890123456789012",
                "1e-40",
            ] {
                assert!(
                    matches!(Amount::parse(text), Err(MoneyError::InvalidAmount { .. })),
                    "{text:?}"
                );
            }
        }

        #[test]
        fn rejects_garbage_and_infinity() {
            assert!(matches!(
                Amount::parse("12,34"),
                Err(MoneyError::InvalidAmount { .. })
            ));
            assert!(matches!(
                Amount::parse("Infinity"),
                Err(MoneyError::InvalidAmount { .. })
            ));
            assert!(matches!(
                Amount::parse("-inf"),
                Err(MoneyError::InvalidAmount { .. })
            ));
        }
    }

    mod floats {
        use super::*;

        #[test]
        fn exact_binary_fractions() {
            assert_eq!(Amount::from_f64(2.5).unwrap(), Amount::Defined(dec("2.5")));
            assert_eq!(Amount::from_f64(0.0).unwrap(), Amount::ZERO);
        }

        #[test]
        fn nan_float_is_undefined() {
            assert_eq!(Amount::from_f64(f64::NAN).unwrap(), Amount::Undefined);
        }

        #[test]
        fn infinite_float_is_rejected() {
            assert!(Amount::from_f64(f64::INFINITY).is_err());
        }
    }

    mod arithmetic {
        use super::*;

        #[test]
        fn undefined_is_absorbed() {
            let five = Amount::Defined(dec("5"));
            assert_eq!(Amount::Undefined.absorbing_add(five), five);
            assert_eq!(five.absorbing_add(Amount::Undefined), five);
            assert_eq!(
                Amount::Undefined.absorbing_add(Amount::Undefined),
                Amount::ZERO
            );
        }

        #[test]
        fn invalid_is_contagious() {
            let five = Amount::Defined(dec("5"));
            assert_eq!(Amount::Invalid.absorbing_add(five), Amount::Invalid);
            assert_eq!(five.absorbing_add(Amount::Invalid), Amount::Invalid);
            assert_eq!(Amount::Invalid.scaled(dec("2")), Amount::Invalid);
            assert_eq!(-Amount::Invalid, Amount::Invalid);
        }

        #[test]
        fn overflow_marks_invalid() {
            let max = Amount::Defined(Decimal::MAX);
            assert_eq!(max.absorbing_add(max), Amount::Invalid);
            assert_eq!(max.scaled(dec("10")), Amount::Invalid);
        }

        #[test]
        fn division_by_zero_fails_for_defined_only() {
            let five = Amount::Defined(dec("5"));
            assert_eq!(five.divided(Decimal::ZERO), Err(MoneyError::DivisionByZero));
            assert_eq!(
                Amount::Undefined.divided(Decimal::ZERO).unwrap(),
                Amount::Undefined
            );
        }

        #[test]
        fn negation_keeps_markers() {
            assert_eq!(-Amount::Defined(dec("3")), Amount::Defined(dec("-3")));
            assert_eq!(-Amount::Undefined, Amount::Undefined);
        }
    }
}
