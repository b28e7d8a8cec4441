//! Discount rate type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An annualized discount rate.
///
/// Stored as an exact decimal fraction (0.045 = 4.5%). The wallet UI
/// speaks percentages; the engine speaks fractions, and this type is
/// the boundary between the two.
///
/// The core does not reject fractions at or above 1 — such terms
/// produce a negative or undefined gross amount downstream, and that
/// is the mathematical answer. Range policy lives in the form layer.
///
/// # Example
///
/// ```rust
/// use billfold_core::types::DiscountRate;
/// use rust_decimal_macros::dec;
///
/// let rate = DiscountRate::from_percentage(dec!(4.5));
/// assert_eq!(rate.as_fraction(), dec!(0.045));
/// assert_eq!(rate.as_percentage(), dec!(4.500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(Decimal);

impl DiscountRate {
    /// Creates a rate from a decimal fraction (0.045 = 4.5%).
    #[must_use]
    pub fn from_fraction(fraction: Decimal) -> Self {
        DiscountRate(fraction)
    }

    /// Creates a rate from a percentage value (4.5 = 4.5%).
    #[must_use]
    pub fn from_percentage(percentage: Decimal) -> Self {
        DiscountRate(percentage / Decimal::ONE_HUNDRED)
    }

    /// Returns the rate as a decimal fraction.
    #[must_use]
    pub fn as_fraction(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a percentage.
    #[must_use]
    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }
}

impl fmt::Display for DiscountRate {
    /// Displays the rate as a percentage, e.g. `4.5%`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}
