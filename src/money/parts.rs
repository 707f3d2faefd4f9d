//! # Money Parts
//!
//! The storage and transport form of a money value: a currency code and the
//! raw amount as a decimal string.
//!
//! The amount string keeps the value's full scale (`"12.3400"` stays
//! `"12.3400"`); the undefined amount is `"NaN"` and the invalid marker is
//! `"sNaN"`. Rebuilding from the parts reproduces an equal value.
//!
//! `MoneyValue` serializes through this pair with serde.
//!
//! # Examples
//!
//! ```
//! use shop_money::money::{MoneyParts, MoneyValue, type_for};
//!
//! let price = type_for("EUR").unwrap().construct("19.99").unwrap();
//! let json = serde_json::to_string(&price).unwrap();
//! assert_eq!(json, r#"{"currency":"EUR","amount":"19.99"}"#);
//!
//! let back: MoneyValue = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, price);
//!
//! let parts = MoneyParts::new("JPY", "500");
//! assert_eq!(MoneyValue::from_parts(&parts).unwrap().currency(), "JPY");
//! ```

use super::registry;
use super::value::MoneyValue;
use crate::error::MoneyResult;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Currency code and raw decimal amount of a money value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct MoneyParts {
    /// ISO-4217 currency code.
    pub currency: String,
    /// Decimal amount, `"NaN"` if no price is set.
    pub amount: String,
}

impl MoneyParts {
    /// Creates a parts pair.
    #[must_use]
    pub fn new(currency: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount: amount.into(),
        }
    }
}

impl MoneyValue {
    /// Splits the value into its `(currency, amount)` pair.
    #[must_use]
    pub fn to_parts(&self) -> MoneyParts {
        MoneyParts::new(self.currency(), self.amount().to_string())
    }

    /// Rebuilds a value from its parts using the process-wide registry.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownCurrency` or `MoneyError::InvalidAmount`.
    pub fn from_parts(parts: &MoneyParts) -> MoneyResult<Self> {
        registry::global().from_parts(parts)
    }
}

impl From<&MoneyValue> for MoneyParts {
    fn from(value: &MoneyValue) -> Self {
        value.to_parts()
    }
}

impl TryFrom<&MoneyParts> for MoneyValue {
    type Error = crate::error::MoneyError;

    fn try_from(parts: &MoneyParts) -> Result<Self, Self::Error> {
        Self::from_parts(parts)
    }
}

impl Serialize for MoneyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_parts().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MoneyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parts = MoneyParts::deserialize(deserializer)?;
        Self::from_parts(&parts).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::money::registry::type_for;

    mod parts {
        use super::*;

        #[test]
        fn keeps_full_scale() {
            let value = type_for("EUR").unwrap().construct("12.3400").unwrap();
            assert_eq!(value.to_parts(), MoneyParts::new("EUR", "12.3400"));
        }

        #[test]
        fn markers() {
            let eur = type_for("EUR").unwrap();
            assert_eq!(eur.undefined().to_parts().amount, "NaN");
            assert_eq!(eur.construct("sNaN").unwrap().to_parts().amount, "sNaN");
        }

        #[test]
        fn round_trip() {
            let value = type_for("KWD").unwrap().construct("-3.125").unwrap();
            let back = MoneyValue::try_from(&value.to_parts()).unwrap();
            assert_eq!(back, value);
            assert_eq!(back.to_parts(), value.to_parts());
        }

        #[test]
        fn undefined_round_trips_as_undefined() {
            let unset = type_for("USD").unwrap().undefined();
            let back = MoneyValue::from_parts(&unset.to_parts()).unwrap();
            assert!(back.is_undefined());
            assert_eq!(back.currency(), "USD");
        }

        #[test]
        fn bad_parts_fail() {
            assert!(MoneyValue::from_parts(&MoneyParts::new("ABC", "1")).is_err());
            assert!(MoneyValue::from_parts(&MoneyParts::new("EUR", "x")).is_err());
        }
    }

    mod serde_json_format {
        use super::*;

        #[test]
        fn serializes_as_pair() {
            let value = type_for("JPY").unwrap().construct(1500).unwrap();
            assert_eq!(
                serde_json::to_value(&value).unwrap(),
                serde_json::json!({"currency": "JPY", "amount": "1500"})
            );
        }

        #[test]
        fn deserialize_rejects_unknown_currency() {
            let result: Result<MoneyValue, _> =
                serde_json::from_str(r#"{"currency":"XYZ","amount":"1"}"#);
            assert!(result.is_err());
        }

        #[test]
        fn schema_names_both_fields() {
            let schema = schemars::schema_for!(MoneyParts);
            let json = serde_json::to_string(&schema).unwrap();
            assert!(json.contains("currency"));
            assert!(json.contains("amount"));
        }
    }
}
