//! # Quantization
//!
//! Rounding of decimal amounts to a fixed number of decimal places.
//!
//! All money rounding uses one rule, [`ROUNDING`]: half away from zero.
//!
//! # Examples
//!
//! ```
//! use shop_money::money::arithmetic::quantize;
//! use rust_decimal::Decimal;
//!
//! // 10.7 JPY has no subunits and rounds to 11.
//! let q = quantize(Decimal::new(107, 1), 0).unwrap();
//! assert_eq!(q.to_string(), "11");
//!
//! // Quantizing always yields exactly `places` decimal places.
//! let q = quantize(Decimal::new(5, 0), 2).unwrap();
//! assert_eq!(q.to_string(), "5.00");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounding rule for every quantization: ties round away from zero.
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Largest number of decimal places a decimal can carry.
pub const MAX_PLACES: u32 = 28;

/// Rounds `value` to exactly `places` decimal places.
///
/// Values with fewer places are padded with trailing zeros.
///
/// # Errors
///
/// Returns a reason string if the padded coefficient no longer fits the
/// decimal's 96-bit mantissa.
pub fn quantize(value: Decimal, places: u32) -> Result<Decimal, &'static str> {
    if places > MAX_PLACES {
        return Err("too many decimal places");
    }
    let rounded = value.round_dp_with_strategy(places, ROUNDING);
    let scale = rounded.scale();
    if scale == places {
        return Ok(rounded);
    }
    let factor = 10_i128
        .checked_pow(places.saturating_sub(scale))
        .ok_or("too many decimal places")?;
    let mantissa = rounded
        .mantissa()
        .checked_mul(factor)
        .ok_or("amount exceeds decimal precision")?;
    Decimal::try_from_i128_with_scale(mantissa, places)
        .map_err(|_| "amount exceeds decimal precision")
}

/// Rounds `value` to at most `places` decimal places without padding.
#[must_use]
pub fn round(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places.min(MAX_PLACES), ROUNDING)
}
