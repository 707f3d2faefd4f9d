//! # Operands and Sources
//!
//! Inputs accepted by money construction and arithmetic.
//!
//! - [`Source`]: what a money value can be constructed from
//! - [`Operand`]: the other side of a binary operation
//!
//! Both convert from the usual Rust values via `From`, so call sites read
//! naturally:
//!
//! ```
//! use shop_money::money::{Operand, Source};
//! use rust_decimal::Decimal;
//!
//! assert!(Operand::from(0).is_literal_zero());
//! assert!(Operand::from(0.0).is_literal_zero());
//! assert!(!Operand::from(Decimal::ZERO).is_literal_zero());
//!
//! assert!(matches!(Source::from("12.34"), Source::Text(_)));
//! assert!(matches!(Source::from(None::<&str>), Source::Empty));
//! ```

use super::value::MoneyValue;
use rust_decimal::Decimal;

/// Input for constructing a money value.
#[derive(Debug, Clone, Default)]
pub enum Source {
    /// No input; constructs an undefined amount.
    #[default]
    Empty,
    /// Another money value; must carry the same currency.
    Money(MoneyValue),
    /// A decimal amount.
    Decimal(Decimal),
    /// An integer amount.
    Integer(i64),
    /// A float, converted exactly.
    Float(f64),
    /// A numeric string.
    Text(String),
}

/// Right-hand side of a money operation.
#[derive(Debug, Clone)]
pub enum Operand {
    /// Absence of a value.
    None,
    /// A plain integer.
    Integer(i64),
    /// A plain float.
    Float(f64),
    /// A plain decimal.
    Decimal(Decimal),
    /// A money value.
    Money(MoneyValue),
}

impl Operand {
    /// Returns true for an integer or float zero.
    ///
    /// Only these literals act as the additive identity in every currency;
    /// a `Decimal` zero is a plain number like any other.
    #[must_use]
    pub fn is_literal_zero(&self) -> bool {
        match self {
            Self::Integer(i) => *i == 0,
            Self::Float(f) => *f == 0.0,
            Self::None | Self::Decimal(_) | Self::Money(_) => false,
        }
    }

    /// Returns the currency code if the operand is money.
    #[must_use]
    pub fn currency(&self) -> Option<&'static str> {
        match self {
            Self::Money(m) => Some(m.currency()),
            _ => None,
        }
    }

    /// Describes the operand's currency for error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::None => "None".to_string(),
            Self::Integer(i) => format!("plain number {i}"),
            Self::Float(f) => format!("plain number {f}"),
            Self::Decimal(d) => format!("plain number {d}"),
            Self::Money(m) => m.currency().to_string(),
        }
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }

            impl From<$ty> for Source {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<Decimal> for Operand {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<MoneyValue> for Operand {
    fn from(value: MoneyValue) -> Self {
        Self::Money(value)
    }
}

impl From<&MoneyValue> for Operand {
    fn from(value: &MoneyValue) -> Self {
        Self::Money(value.clone())
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

impl From<f64> for Source {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Decimal> for Source {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for Source {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Source {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Source {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<MoneyValue> for Source {
    fn from(value: MoneyValue) -> Self {
        Self::Money(value)
    }
}

impl From<&MoneyValue> for Source {
    fn from(value: &MoneyValue) -> Self {
        Self::Money(value.clone())
    }
}

impl<T: Into<Source>> From<Option<T>> for Source {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_zero_detection() {
        assert!(Operand::from(0_i64).is_literal_zero());
        assert!(Operand::from(0_u8).is_literal_zero());
        assert!(Operand::from(-0.0).is_literal_zero());
        assert!(!Operand::from(1).is_literal_zero());
        assert!(!Operand::from(0.1).is_literal_zero());
        assert!(!Operand::None.is_literal_zero());
    }

    #[test]
    fn option_conversions() {
        assert!(matches!(Operand::from(None::<Decimal>), Operand::None));
        assert!(matches!(Operand::from(Some(3)), Operand::Integer(3)));
        assert!(matches!(Source::from(Some("1.5")), Source::Text(ref s) if s == "1.5"));
        assert!(matches!(Source::from(None::<Decimal>), Source::Empty));
    }

    #[test]
    fn plain_operands_carry_no_currency() {
        assert_eq!(Operand::from(5).currency(), None);
        assert_eq!(Operand::from(Decimal::ONE).currency(), None);
    }
}
