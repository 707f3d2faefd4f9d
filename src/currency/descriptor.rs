//! `CurrencyDescriptor`: static metadata for one ISO-4217 currency.

use serde::Serialize;
use std::fmt;

/// Data describing a single currency.
///
/// Entries live in the bundled table and are never constructed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CurrencyDescriptor {
    /// ISO-4217 alphabetic code (e.g. "EUR").
    pub code: &'static str,
    /// ISO-4217 numeric code (e.g. 978).
    pub numeric_code: u16,
    /// Number of decimal places used for subunits (2 for EUR, 0 for JPY).
    pub minor_digits: u8,
    /// Symbol used when rendering amounts (e.g. "€").
    pub symbol: &'static str,
    /// Full name (e.g. "Euro").
    pub display_name: &'static str,
}

impl CurrencyDescriptor {
    /// Number of subunits per unit, `10^minor_digits`.
    #[must_use]
    pub const fn subunits(&self) -> i64 {
        10_i64.pow(self.minor_digits as u32)
    }
}

impl fmt::Display for CurrencyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
