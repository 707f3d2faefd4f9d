//! # Money Value
//!
//! An immutable decimal amount tagged with its [`MoneyType`].
//!
//! Values are built through a money type (see
//! [`MoneyType::construct`]) and never change afterwards; every operation
//! returns a new value.
//!
//! # Examples
//!
//! ```
//! use shop_money::money::type_for;
//!
//! let eur = type_for("EUR").unwrap();
//! let price = eur.construct("12.345").unwrap();
//!
//! assert_eq!(price.as_decimal().unwrap().unwrap().to_string(), "12.35");
//! assert_eq!(price.as_integer().unwrap(), Some(1235));
//! assert_eq!(price.currency(), "EUR");
//!
//! let unset = eur.undefined();
//! assert_eq!(unset.as_decimal().unwrap(), None);
//! assert!(unset.as_float().unwrap().is_nan());
//! ```

use super::amount::Amount;
use super::arithmetic::quantize;
use super::money_type::MoneyType;
use crate::currency::CurrencyDescriptor;
use crate::error::{MoneyError, MoneyResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// A currency-tagged decimal amount.
#[derive(Clone)]
pub struct MoneyValue {
    money_type: MoneyType,
    amount: Amount,
}

impl MoneyValue {
    pub(crate) fn new(money_type: MoneyType, amount: Amount) -> Self {
        Self { money_type, amount }
    }

    /// Returns the money type this value belongs to.
    #[inline]
    #[must_use]
    pub fn money_type(&self) -> &MoneyType {
        &self.money_type
    }

    /// Returns the ISO-4217 currency code.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &'static str {
        self.money_type.currency()
    }

    /// Returns the currency table entry.
    #[inline]
    #[must_use]
    pub fn descriptor(&self) -> &'static CurrencyDescriptor {
        self.money_type.descriptor()
    }

    /// Returns the raw, unquantized amount.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns true if no price is set.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        self.amount == Amount::Undefined
    }

    /// Returns true if the value is the invalid-computation marker.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.amount == Amount::Invalid
    }

    /// Returns true if the amount is defined and zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.decimal().is_some_and(|d| d.is_zero())
    }

    /// Returns true if the amount is defined and greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount
            .decimal()
            .is_some_and(|d| !d.is_zero() && d.is_sign_positive())
    }

    /// Returns true if the amount is defined and less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount
            .decimal()
            .is_some_and(|d| !d.is_zero() && d.is_sign_negative())
    }

    /// Returns the value with its amount quantized to the currency's subunits.
    ///
    /// Undefined stays undefined.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::QuantizeError` for the invalid marker or an
    /// amount too large to carry the currency's decimal places.
    pub fn quantized(&self) -> MoneyResult<Self> {
        let amount = match self.as_decimal()? {
            Some(d) => Amount::Defined(d),
            None => Amount::Undefined,
        };
        Ok(self.money_type.with_amount(amount))
    }

    /// Returns the amount quantized to exactly `minor_digits` places, or
    /// `None` if no price is set.
    ///
    /// This representation is often used by payment service providers.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::QuantizeError` for the invalid marker or an
    /// amount too large to carry the currency's decimal places.
    pub fn as_decimal(&self) -> MoneyResult<Option<Decimal>> {
        match self.amount {
            Amount::Defined(d) => quantize(d, self.money_type.minor_digits())
                .map(Some)
                .map_err(|reason| MoneyError::quantize(self.currency(), d.to_string(), reason)),
            Amount::Undefined => Ok(None),
            Amount::Invalid => Err(MoneyError::quantize(
                self.currency(),
                "sNaN",
                "invalid computation marker",
            )),
        }
    }

    /// Returns the amount in minor units (e.g. cents), or `None` if no price
    /// is set.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::QuantizeError` as [`as_decimal`](Self::as_decimal)
    /// does, and `MoneyError::Overflow` if the count does not fit in `i64`.
    pub fn as_integer(&self) -> MoneyResult<Option<i64>> {
        let Some(quantized) = self.as_decimal()? else {
            return Ok(None);
        };
        let overflow = || MoneyError::Overflow(format!("{quantized} {}", self.currency()));
        let minor = quantized
            .checked_mul(Decimal::from(self.money_type.subunits()))
            .ok_or_else(overflow)?;
        minor.trunc().to_i64().map(Some).ok_or_else(overflow)
    }

    /// Converts the amount to a float; undefined converts to NaN.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::SignalingNaN` for the invalid marker.
    pub fn as_float(&self) -> MoneyResult<f64> {
        match self.amount {
            Amount::Defined(d) => d
                .to_f64()
                .ok_or_else(|| MoneyError::Overflow(format!("{d} as float"))),
            Amount::Undefined => Ok(f64::NAN),
            Amount::Invalid => Err(MoneyError::SignalingNaN),
        }
    }
}
