//! Division at the engine's working precision.
//!
//! Additions, subtractions and multiplications of bill amounts stay
//! exact, but quotients are generally non-terminating decimals, so the
//! engine fixes a division scale: every quotient is rounded to
//! [`DIVISION_SCALE`] fractional digits, half away from zero. The
//! pinned reference outputs encode exactly this behavior — e.g.
//! `net_to_gross(1, 1, 365)` is `-71.99999999999999999424`, not `-72`,
//! because the intermediate `365 / 360` is itself a rounded quotient.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits kept by engine divisions.
pub const DIVISION_SCALE: u32 = 20;

/// Divides `numerator` by `denominator`, rounding the quotient to
/// [`DIVISION_SCALE`] fractional digits, half away from zero.
///
/// Returns `None` when the denominator is zero, or when the quotient
/// cannot be represented in a 96-bit decimal at all.
#[must_use]
pub fn div(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    numerator
        .checked_div(denominator)
        .map(|q| q.round_dp_with_strategy(DIVISION_SCALE, RoundingStrategy::MidpointAwayFromZero))
}
