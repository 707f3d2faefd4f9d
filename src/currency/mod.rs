//! # Currency Table
//!
//! Process-wide, read-only table of ISO-4217 currencies.
//!
//! The table is bundled with the crate, sorted by alphabetic code, and looked
//! up by binary search. It carries no logic beyond lookup.
//!
//! # Examples
//!
//! ```
//! use shop_money::currency::lookup;
//!
//! let eur = lookup("EUR").unwrap();
//! assert_eq!(eur.minor_digits, 2);
//! assert_eq!(eur.symbol, "€");
//!
//! assert!(lookup("eur").is_err());
//! assert!(lookup("XYZ").is_err());
//! ```

mod descriptor;
mod iso4217;

pub use descriptor::CurrencyDescriptor;
pub use iso4217::CURRENCIES;

use crate::error::{MoneyError, MoneyResult};

/// Returns true if `code` looks like an ISO-4217 alphabetic code.
#[must_use]
pub fn is_well_formed(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// Looks up a currency by its exact, uppercase ISO-4217 code.
///
/// # Errors
///
/// Returns `MoneyError::UnknownCurrency` if the code is not three uppercase
/// ASCII letters or is absent from the table.
pub fn lookup(code: &str) -> MoneyResult<&'static CurrencyDescriptor> {
    if !is_well_formed(code) {
        return Err(MoneyError::unknown_currency(code));
    }
    CURRENCIES
        .binary_search_by(|c| c.code.cmp(code))
        .ok()
        .and_then(|idx| CURRENCIES.get(idx))
        .ok_or_else(|| MoneyError::unknown_currency(code))
}

/// Looks up a currency by its ISO-4217 numeric code.
#[must_use]
pub fn lookup_numeric(numeric_code: u16) -> Option<&'static CurrencyDescriptor> {
    CURRENCIES.iter().find(|c| c.numeric_code == numeric_code)
}
