//! # Money Arithmetic
//!
//! Checked arithmetic and comparison between money values.
//!
//! # Rules
//!
//! | Operation | Other operand | Result |
//! |---|---|---|
//! | add / sub | money of the same currency | sum; undefined acts as zero |
//! | add / sub | integer or float `0` | coerced to zero in this currency |
//! | add / sub | anything else | `CurrencyMismatch` |
//! | mul / div | plain number | scaled amount |
//! | mul / div | `None` | undefined |
//! | mul / div | money | `InvalidOperand` |
//! | rdiv, pow | anything | `InvalidOperation` |
//! | cmp / eq | money of the same currency | decimal ordering, undefined is unordered |
//! | cmp / eq | money of another currency | `CurrencyMismatch` |
//!
//! The invalid marker is contagious through every operation. A result too
//! large for the decimal mantissa becomes the invalid marker.
//!
//! # Examples
//!
//! ```
//! use shop_money::money::type_for;
//! use shop_money::error::MoneyError;
//!
//! let eur = type_for("EUR").unwrap();
//! let usd = type_for("USD").unwrap();
//! let a = eur.construct("10.00").unwrap();
//! let b = eur.construct("2.50").unwrap();
//!
//! assert_eq!(a.checked_add(&b).unwrap(), eur.construct("12.50").unwrap());
//! assert_eq!(a.checked_mul(3).unwrap(), eur.construct("30").unwrap());
//! assert_eq!(a.checked_add(0).unwrap(), a);
//!
//! let dollars = usd.construct("5").unwrap();
//! assert!(matches!(
//!     a.checked_add(&dollars),
//!     Err(MoneyError::CurrencyMismatch { .. })
//! ));
//! ```

use super::amount::Amount;
use super::operand::Operand;
use super::value::MoneyValue;
use crate::error::{MoneyError, MoneyResult};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl MoneyValue {
    /// Adds money of the same currency, or a literal zero.
    ///
    /// An undefined amount counts as zero:
    /// `undefined + x == x`, `x + undefined == x` and
    /// `undefined + undefined == 0`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if the operand is money of
    /// another currency or a non-zero plain value.
    pub fn checked_add(&self, rhs: impl Into<Operand>) -> MoneyResult<Self> {
        let addend = self.addend(rhs.into())?;
        Ok(self.money_type().with_amount(self.amount().absorbing_add(addend)))
    }

    /// Subtracts money of the same currency, or a literal zero.
    ///
    /// Computed as `self + (-rhs)`, so the undefined-absorbing rule applies.
    ///
    /// # Errors
    ///
    /// Same as [`checked_add`](Self::checked_add).
    pub fn checked_sub(&self, rhs: impl Into<Operand>) -> MoneyResult<Self> {
        let rhs = match rhs.into() {
            Operand::Money(m) => Operand::Money(-m),
            other => other,
        };
        self.checked_add(rhs)
    }

    /// Adds `self` to a left-hand operand (`lhs + self`).
    ///
    /// # Errors
    ///
    /// Same as [`checked_add`](Self::checked_add).
    pub fn radd(&self, lhs: impl Into<Operand>) -> MoneyResult<Self> {
        self.checked_add(lhs)
    }

    /// Subtracts `self` from a left-hand operand (`lhs - self`).
    ///
    /// Only a literal zero is accepted on the left, giving `-self`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidOperation` for any other left operand.
    pub fn rsub(&self, lhs: impl Into<Operand>) -> MoneyResult<Self> {
        if lhs.into().is_literal_zero() {
            return Ok(-self);
        }
        Err(MoneyError::InvalidOperation(
            "can not subtract money from something else",
        ))
    }

    /// Multiplies by a plain number.
    ///
    /// `None` yields the undefined amount.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidOperand` if the operand is money and
    /// `MoneyError::InvalidAmount` for an infinite float.
    pub fn checked_mul(&self, rhs: impl Into<Operand>) -> MoneyResult<Self> {
        let amount = match Self::factor(rhs.into(), "multiply")? {
            Some(factor) => self.amount().scaled(factor),
            None => Amount::Undefined,
        };
        Ok(self.money_type().with_amount(amount))
    }

    /// Multiplies a left-hand plain number by `self` (`lhs * self`).
    ///
    /// # Errors
    ///
    /// Same as [`checked_mul`](Self::checked_mul).
    pub fn rmul(&self, lhs: impl Into<Operand>) -> MoneyResult<Self> {
        self.checked_mul(lhs)
    }

    /// Divides by a plain number.
    ///
    /// `None` yields the undefined amount.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidOperand` if the operand is money,
    /// `MoneyError::DivisionByZero` if a defined amount is divided by zero,
    /// and `MoneyError::InvalidAmount` for an infinite float.
    pub fn checked_div(&self, rhs: impl Into<Operand>) -> MoneyResult<Self> {
        let amount = match Self::factor(rhs.into(), "divide")? {
            Some(divisor) => self.amount().divided(divisor)?,
            None => Amount::Undefined,
        };
        Ok(self.money_type().with_amount(amount))
    }

    /// Divides a left-hand operand by `self` (`lhs / self`).
    ///
    /// The reciprocal of a currency is meaningless.
    ///
    /// # Errors
    ///
    /// Always returns `MoneyError::InvalidOperation`.
    pub fn rdiv(&self, _lhs: impl Into<Operand>) -> MoneyResult<Self> {
        Err(MoneyError::InvalidOperation("can not divide through a currency"))
    }

    /// Raises `self` to a power.
    ///
    /// # Errors
    ///
    /// Always returns `MoneyError::InvalidOperation`.
    pub fn checked_pow(&self, _exponent: impl Into<Operand>) -> MoneyResult<Self> {
        Err(MoneyError::InvalidOperation(
            "can not raise currencies to their power",
        ))
    }

    /// Compares with money of the same currency.
    ///
    /// Returns `Ok(None)` if either amount is undefined or invalid.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` across currencies.
    pub fn checked_cmp(&self, other: &Self) -> MoneyResult<Option<Ordering>> {
        if self.money_type() != other.money_type() {
            return Err(MoneyError::mismatch(self.currency(), other.currency()));
        }
        Ok(match (self.amount(), other.amount()) {
            (Amount::Defined(a), Amount::Defined(b)) => Some(a.cmp(&b)),
            _ => None,
        })
    }

    /// Tests numeric equality with money of the same currency.
    ///
    /// Undefined is never equal to anything, including itself.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` across currencies.
    pub fn checked_eq(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.checked_cmp(other)? == Some(Ordering::Equal))
    }

    fn addend(&self, rhs: Operand) -> MoneyResult<Amount> {
        if rhs.is_literal_zero() {
            return Ok(Amount::ZERO);
        }
        match rhs {
            Operand::Money(other) if other.money_type() == self.money_type() => Ok(other.amount()),
            other => Err(MoneyError::mismatch(self.currency(), other.describe())),
        }
    }

    fn factor(operand: Operand, operation: &'static str) -> MoneyResult<Option<Decimal>> {
        match operand {
            Operand::None => Ok(None),
            Operand::Integer(i) => Ok(Some(Decimal::from(i))),
            Operand::Decimal(d) => Ok(Some(d)),
            Operand::Float(f) => Ok(Amount::from_f64(f)?.decimal()),
            Operand::Money(_) => Err(MoneyError::InvalidOperand { operation }),
        }
    }
}

impl PartialEq for MoneyValue {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.checked_cmp(other), Ok(Some(Ordering::Equal)))
    }
}

impl PartialOrd for MoneyValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.checked_cmp(other).ok().flatten()
    }
}

impl Neg for MoneyValue {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl Neg for &MoneyValue {
    type Output = MoneyValue;

    fn neg(self) -> MoneyValue {
        self.money_type().with_amount(-self.amount())
    }
}

macro_rules! checked_operator {
    ($trait:ident, $method:ident, $checked:ident, $rhs:ty) => {
        impl $trait<$rhs> for &MoneyValue {
            type Output = MoneyResult<MoneyValue>;

            fn $method(self, rhs: $rhs) -> Self::Output {
                self.$checked(rhs)
            }
        }

        impl $trait<$rhs> for MoneyValue {
            type Output = MoneyResult<MoneyValue>;

            fn $method(self, rhs: $rhs) -> Self::Output {
                self.$checked(rhs)
            }
        }
    };
}

checked_operator!(Add, add, checked_add, &MoneyValue);
checked_operator!(Add, add, checked_add, MoneyValue);
checked_operator!(Sub, sub, checked_sub, &MoneyValue);
checked_operator!(Sub, sub, checked_sub, MoneyValue);
checked_operator!(Mul, mul, checked_mul, Decimal);
checked_operator!(Mul, mul, checked_mul, i64);
checked_operator!(Div, div, checked_div, Decimal);
checked_operator!(Div, div, checked_div, i64);
