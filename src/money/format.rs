//! # Money Formatting
//!
//! Renders money values through a display template with the placeholders
//! `{amount}`, `{code}`, `{symbol}` and `{currency}`.
//!
//! The amount is quantized to the currency's subunits unless a precision is
//! requested (`{:.3}`). An undefined amount renders as [`UNDEFINED_GLYPH`].
//! The invalid marker and amounts too large to carry the currency's decimal
//! places cannot be quantized: [`MoneyValue::format`] fails on them, while
//! `Display` falls back to the raw amount.
//!
//! # Examples
//!
//! ```
//! use shop_money::money::type_for;
//!
//! let eur = type_for("EUR").unwrap();
//! let price = eur.construct("1234.5").unwrap();
//!
//! assert_eq!(price.to_string(), "€ 1234.50");
//! assert_eq!(format!("{price:.3}"), "€ 1234.500");
//! assert_eq!(
//!     price.format_with("{amount} {code} ({currency})").unwrap(),
//!     "1234.50 EUR (Euro)"
//! );
//! assert_eq!(eur.undefined().to_string(), "€ –");
//! assert_eq!(format!("{price:?}"), "MoneyInEUR('1234.5')");
//! ```

use super::amount::Amount;
use super::arithmetic::{MAX_PLACES, round};
use super::value::MoneyValue;
use crate::currency::CurrencyDescriptor;
use crate::error::{MoneyError, MoneyResult};
use std::fmt;

/// Rendered in place of the amount when no price is set.
pub const UNDEFINED_GLYPH: &str = "–";

impl MoneyValue {
    /// Renders the value through the money type's template.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::QuantizeError` if the amount cannot be quantized.
    pub fn format(&self) -> MoneyResult<String> {
        self.format_with(self.money_type().money_format())
    }

    /// Renders the value through an explicit template.
    ///
    /// Unknown placeholders are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::QuantizeError` if the amount cannot be quantized.
    pub fn format_with(&self, template: &str) -> MoneyResult<String> {
        let amount = match self.as_decimal()? {
            Some(d) => d.to_string(),
            None => UNDEFINED_GLYPH.to_string(),
        };
        Ok(render(template, &amount, self.descriptor()))
    }

    fn amount_with_precision(&self, precision: usize) -> MoneyResult<String> {
        let places = u32::try_from(precision).unwrap_or(MAX_PLACES).min(MAX_PLACES);
        match self.amount() {
            Amount::Defined(d) => Ok(format!("{:.*}", places as usize, round(d, places))),
            Amount::Undefined => Ok(UNDEFINED_GLYPH.to_string()),
            Amount::Invalid => Err(MoneyError::quantize(
                self.currency(),
                "sNaN",
                "invalid computation marker",
            )),
        }
    }
}

fn render(template: &str, amount: &str, descriptor: &CurrencyDescriptor) -> String {
    template
        .replace("{code}", descriptor.code)
        .replace("{symbol}", descriptor.symbol)
        .replace("{currency}", descriptor.display_name)
        .replace("{amount}", amount)
}

impl fmt::Display for MoneyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = match f.precision() {
            Some(precision) => self.amount_with_precision(precision),
            None => self
                .as_decimal()
                .map(|d| d.map_or_else(|| UNDEFINED_GLYPH.to_string(), |d| d.to_string())),
        };
        let amount = amount.unwrap_or_else(|err| {
            tracing::error!(error = %err, currency = self.currency(), "money formatting failed");
            self.amount().to_string()
        });
        f.write_str(&render(
            self.money_type().money_format(),
            &amount,
            self.descriptor(),
        ))
    }
}

impl fmt::Debug for MoneyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}')", self.money_type().name(), self.amount())
    }
}
