//! # Money
//!
//! Currency-safe decimal money.
//!
//! ## Types
//!
//! - [`MoneyType`]: a currency bound to its precision and display template
//! - [`MoneyTypeRegistry`]: memoizing factory, one cached type per currency
//! - [`MoneyValue`]: an immutable amount tagged with its money type
//! - [`Amount`]: defined decimal, undefined ("no price") or invalid marker
//! - [`Operand`], [`Source`]: inputs to arithmetic and construction
//! - [`MoneyParts`]: the `(currency, amount)` storage pair
//!
//! ## Arithmetic
//!
//! Values of different currencies never combine; see [`ops`] for the rules.
//! Quantization and rounding live in [`arithmetic`].

pub mod amount;
pub mod arithmetic;
pub mod format;
pub mod money_type;
pub mod operand;
pub mod ops;
pub mod parts;
pub mod registry;
pub mod value;

pub use amount::Amount;
pub use format::UNDEFINED_GLYPH;
pub use money_type::MoneyType;
pub use operand::{Operand, Source};
pub use parts::MoneyParts;
pub use registry::{
    MoneyTypeRegistry, default_type, global, install_registry, make_money, type_for,
};
pub use value::MoneyValue;
