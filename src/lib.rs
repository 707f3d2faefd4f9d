//! # shop-money
//!
//! Currency-safe money arithmetic for shop backends.
//!
//! Every amount is tagged with an ISO-4217 currency. Amounts in different
//! currencies cannot be added, subtracted or compared, money cannot be
//! multiplied by money, and an unset price is a distinct value rather than
//! zero.
//!
//! ## Modules
//!
//! - [`currency`]: the bundled ISO-4217 table
//! - [`money`]: money types, values and arithmetic
//! - [`config`]: default currency and display template
//! - [`error`]: error taxonomy
//!
//! # Examples
//!
//! ```
//! use shop_money::money::type_for;
//!
//! let eur = type_for("EUR").unwrap();
//! let items = [
//!     eur.construct("19.99").unwrap(),
//!     eur.construct("5.01").unwrap(),
//!     eur.undefined(),
//! ];
//! let total = eur.sum(&items).unwrap();
//!
//! assert_eq!(total.to_string(), "€ 25.00");
//! assert_eq!(total.as_integer().unwrap(), Some(2500));
//!
//! let usd = type_for("USD").unwrap().construct("1").unwrap();
//! assert!(total.checked_add(&usd).is_err());
//! ```

pub mod config;
pub mod currency;
pub mod error;
pub mod money;

pub use error::{MoneyError, MoneyResult};
pub use money::{MoneyType, MoneyValue, type_for};
