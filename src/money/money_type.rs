//! # Money Type
//!
//! A money type binds a currency to its precision and display template.
//! Every [`MoneyValue`] carries exactly one money type; two values may be
//! combined only if their types are equal.
//!
//! Money types are handed out by a
//! [`MoneyTypeRegistry`](super::registry::MoneyTypeRegistry), which caches one
//! instance per currency code so equality is usually a pointer comparison.
//!
//! # Examples
//!
//! ```
//! use shop_money::money::type_for;
//! use rust_decimal::Decimal;
//!
//! let eur = type_for("eur").unwrap();
//! assert_eq!(eur.currency(), "EUR");
//! assert_eq!(eur.subunits(), 100);
//! assert_eq!(eur.quantum(), Decimal::new(1, 2));
//!
//! let price = eur.construct("12.34").unwrap();
//! assert_eq!(price.as_integer().unwrap(), Some(1234));
//! ```

use super::amount::Amount;
use super::operand::Source;
use super::value::MoneyValue;
use crate::currency::CurrencyDescriptor;
use crate::error::{MoneyError, MoneyResult};
use rust_decimal::Decimal;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Debug)]
struct MoneyTypeInner {
    descriptor: &'static CurrencyDescriptor,
    quantum: Decimal,
    money_format: String,
}

/// Currency-bound money type.
///
/// Cheap to clone; clones share the same allocation.
#[derive(Clone)]
pub struct MoneyType {
    inner: Arc<MoneyTypeInner>,
}

impl MoneyType {
    pub(crate) fn new(descriptor: &'static CurrencyDescriptor, money_format: &str) -> Self {
        Self {
            inner: Arc::new(MoneyTypeInner {
                descriptor,
                quantum: Decimal::new(1, u32::from(descriptor.minor_digits)),
                money_format: money_format.to_string(),
            }),
        }
    }

    /// Returns the ISO-4217 code of the bound currency.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &'static str {
        self.inner.descriptor.code
    }

    /// Returns the currency table entry.
    #[inline]
    #[must_use]
    pub fn descriptor(&self) -> &'static CurrencyDescriptor {
        self.inner.descriptor
    }

    /// Returns the number of subunit decimal places.
    #[inline]
    #[must_use]
    pub fn minor_digits(&self) -> u32 {
        u32::from(self.inner.descriptor.minor_digits)
    }

    /// Returns the number of subunits per unit, `10^minor_digits`.
    #[inline]
    #[must_use]
    pub fn subunits(&self) -> i64 {
        self.inner.descriptor.subunits()
    }

    /// Returns the smallest representable step (`0.01` for EUR, `1` for JPY).
    #[inline]
    #[must_use]
    pub fn quantum(&self) -> Decimal {
        self.inner.quantum
    }

    /// Returns the display template used by `Display`.
    #[must_use]
    pub fn money_format(&self) -> &str {
        &self.inner.money_format
    }

    /// Returns the type name, e.g. `MoneyInEUR`.
    #[must_use]
    pub fn name(&self) -> String {
        format!("MoneyIn{}", self.currency())
    }

    /// Returns true if both handles are the same cached instance.
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Constructs a money value of this type.
    ///
    /// | Source | Result |
    /// |---|---|
    /// | `Empty` | undefined amount |
    /// | `Money` of this currency | copy of its amount, scale preserved |
    /// | `Money` of another currency | `TypeMismatch` |
    /// | `Decimal` / `Integer` | defined amount |
    /// | `Float` | exact conversion, NaN gives undefined |
    /// | `Text` | parsed, see [`Amount::parse`] |
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::TypeMismatch` for money of another currency and
    /// `MoneyError::InvalidAmount` for unparsable input.
    pub fn construct(&self, source: impl Into<Source>) -> MoneyResult<MoneyValue> {
        let amount = match source.into() {
            Source::Empty => Amount::Undefined,
            Source::Money(other) => {
                if other.money_type() != self {
                    return Err(MoneyError::type_mismatch(self.currency(), other.currency()));
                }
                other.amount()
            }
            Source::Decimal(d) => Amount::Defined(d),
            Source::Integer(i) => Amount::Defined(Decimal::from(i)),
            Source::Float(f) => Amount::from_f64(f)?,
            Source::Text(text) => Amount::parse(&text)?,
        };
        Ok(self.with_amount(amount))
    }

    /// Validates and converts form input into this type.
    ///
    /// Stricter than [`construct`](Self::construct): the input must be a
    /// finite amount with no more decimal places than the currency has
    /// minor digits. An empty field is an error, not an undefined price.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::TypeMismatch` for money of another currency and
    /// `MoneyError::InvalidAmount` for missing, unparsable, NaN-like or
    /// over-precise input.
    pub fn coerce(&self, source: impl Into<Source>) -> MoneyResult<MoneyValue> {
        let source = source.into();
        let input = match &source {
            Source::Text(text) => text.clone(),
            Source::Money(value) => value.amount().to_string(),
            Source::Decimal(d) => d.to_string(),
            Source::Integer(i) => i.to_string(),
            Source::Float(f) => f.to_string(),
            Source::Empty => String::new(),
        };
        let value = self.construct(source)?;
        let Some(amount) = value.amount().decimal() else {
            return Err(MoneyError::invalid_amount(input, "a finite amount is required"));
        };
        if amount.normalize().scale() > self.minor_digits() {
            return Err(MoneyError::invalid_amount(
                input,
                format!(
                    "{} allows at most {} decimal places",
                    self.currency(),
                    self.minor_digits()
                ),
            ));
        }
        Ok(value)
    }

    /// Parses a numeric string into a money value of this type.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if the text is not a number.
    pub fn parse(&self, text: &str) -> MoneyResult<MoneyValue> {
        Ok(self.with_amount(Amount::parse(text)?))
    }

    /// Builds a value from a count of minor units, e.g. cents.
    #[must_use]
    pub fn from_minor_units(&self, minor_units: i64) -> MoneyValue {
        self.with_amount(Amount::Defined(Decimal::new(minor_units, self.minor_digits())))
    }

    /// Returns the undefined ("no price") value of this type.
    #[must_use]
    pub fn undefined(&self) -> MoneyValue {
        self.with_amount(Amount::Undefined)
    }

    /// Returns a defined zero of this type.
    #[must_use]
    pub fn zero(&self) -> MoneyValue {
        self.with_amount(Amount::ZERO)
    }

    /// Sums values of this type, starting from zero.
    ///
    /// Undefined values are skipped by the addition rule, so an empty or
    /// all-undefined input sums to zero.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if any value has another
    /// currency.
    pub fn sum<'a, I>(&self, values: I) -> MoneyResult<MoneyValue>
    where
        I: IntoIterator<Item = &'a MoneyValue>,
    {
        values
            .into_iter()
            .try_fold(self.zero(), |total, value| total.checked_add(value))
    }

    pub(crate) fn with_amount(&self, amount: Amount) -> MoneyValue {
        MoneyValue::new(self.clone(), amount)
    }
}

impl PartialEq for MoneyType {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other) || self.currency() == other.currency()
    }
}

impl Eq for MoneyType {}

impl Hash for MoneyType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency().hash(state);
    }
}

impl fmt::Debug for MoneyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for MoneyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.currency())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::currency::lookup;
    use std::str::FromStr;

    fn money_type(code: &str) -> MoneyType {
        MoneyType::new(lookup(code).unwrap(), "{symbol} {amount}")
    }

    mod properties {
        use super::*;

        #[test]
        fn derived_precision() {
            let eur = money_type("EUR");
            assert_eq!(eur.minor_digits(), 2);
            assert_eq!(eur.subunits(), 100);
            assert_eq!(eur.quantum().to_string(), "0.01");

            let jpy = money_type("JPY");
            assert_eq!(jpy.subunits(), 1);
            assert_eq!(jpy.quantum().to_string(), "1");

            let bhd = money_type("BHD");
            assert_eq!(bhd.subunits(), 1000);
        }

        #[test]
        fn name_and_debug() {
            let eur = money_type("EUR");
            assert_eq!(eur.name(), "MoneyInEUR");
            assert_eq!(format!("{eur:?}"), "MoneyInEUR");
            assert_eq!(eur.to_string(), "EUR");
        }

        #[test]
        fn equality_by_currency() {
            let a = money_type("EUR");
            let b = money_type("EUR");
            assert!(!a.same_instance(&b));
            assert_eq!(a, b);
            assert!(a.same_instance(&a.clone()));
            assert_ne!(a, money_type("USD"));
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn empty_source_is_undefined() {
            let eur = money_type("EUR");
            assert!(eur.construct(Source::Empty).unwrap().is_undefined());
            assert!(eur.construct(None::<&str>).unwrap().is_undefined());
            assert!(eur.construct("").unwrap().is_undefined());
        }

        #[test]
        fn from_numbers_and_text() {
            let eur = money_type("EUR");
            let expected = Decimal::from_str("12.34").unwrap();
            assert_eq!(eur.construct("12.34").unwrap().amount().decimal(), Some(expected));
            assert_eq!(eur.construct(expected).unwrap().amount().decimal(), Some(expected));
            assert_eq!(
                eur.construct(12).unwrap().amount().decimal(),
                Some(Decimal::from(12))
            );
            assert_eq!(
                eur.construct(0.25).unwrap().amount().decimal(),
                Some(Decimal::new(25, 2))
            );
        }

        #[test]
        fn copies_same_currency_money_exactly() {
            let eur = money_type("EUR");
            let original = eur.construct("1.2300").unwrap();
            let copy = eur.construct(&original).unwrap();
            assert_eq!(copy.amount().to_string(), "1.2300");
            assert!(eur.construct(eur.undefined()).unwrap().is_undefined());
        }

        #[test]
        fn rejects_other_currency_money() {
            let eur = money_type("EUR");
            let usd = money_type("USD").construct("1").unwrap();
            assert_eq!(
                eur.construct(&usd).unwrap_err(),
                MoneyError::type_mismatch("EUR", "USD")
            );
            assert_eq!(
                eur.coerce(usd).unwrap_err(),
                MoneyError::type_mismatch("EUR", "USD")
            );
        }

        #[test]
        fn coerce_accepts_form_amounts() {
            let eur = money_type("EUR");
            assert_eq!(eur.coerce(" 12.5 ").unwrap().amount().to_string(), "12.5");
            assert_eq!(eur.coerce("3.10").unwrap().amount().to_string(), "3.10");
            assert!(eur.coerce(7).is_ok());
            let jpy = money_type("JPY");
            assert!(jpy.coerce("1500.00").is_ok());
        }

        #[test]
        fn coerce_requires_a_finite_amount() {
            let eur = money_type("EUR");
            for input in ["", "NaN", "sNaN"] {
                assert!(
                    matches!(eur.coerce(input), Err(MoneyError::InvalidAmount { .. })),
                    "{input:?}"
                );
            }
            assert!(matches!(
                eur.coerce(None::<&str>),
                Err(MoneyError::InvalidAmount { .. })
            ));
            assert!(matches!(
                eur.coerce(eur.undefined()),
                Err(MoneyError::InvalidAmount { .. })
            ));
        }

        #[test]
        fn coerce_rejects_extra_decimal_places() {
            assert!(matches!(
                money_type("EUR").coerce("12.345"),
                Err(MoneyError::InvalidAmount { .. })
            ));
            assert!(matches!(
                money_type("JPY").coerce("10.7"),
                Err(MoneyError::InvalidAmount { .. })
            ));
        }

        #[test]
        fn rejects_garbage_text() {
            let eur = money_type("EUR");
            assert!(matches!(
                eur.construct("ten euros"),
                Err(MoneyError::InvalidAmount { .. })
            ));
        }

        #[test]
        fn minor_units() {
            let eur = money_type("EUR");
            let value = eur.from_minor_units(1234);
            assert_eq!(value.amount().to_string(), "12.34");
            assert_eq!(value.as_integer().unwrap(), Some(1234));

            let jpy = money_type("JPY");
            assert_eq!(jpy.from_minor_units(500).amount().to_string(), "500");
        }
    }

    mod summation {
        use super::*;

        #[test]
        fn sums_values() {
            let eur = money_type("EUR");
            let values = vec![
                eur.construct("1.10").unwrap(),
                eur.construct("2.20").unwrap(),
                eur.undefined(),
            ];
            let total = eur.sum(&values).unwrap();
            assert_eq!(total, eur.construct("3.30").unwrap());
        }

        #[test]
        fn empty_sum_is_zero() {
            let eur = money_type("EUR");
            assert_eq!(eur.sum(std::iter::empty()).unwrap(), eur.zero());
        }

        #[test]
        fn mixed_currencies_fail() {
            let eur = money_type("EUR");
            let values = vec![eur.construct("1").unwrap(), money_type("USD").construct("1").unwrap()];
            assert!(matches!(
                eur.sum(&values),
                Err(MoneyError::CurrencyMismatch { .. })
            ));
        }
    }
}
