//! Act/360 discount engine.
//!
//! Converts between the net (discounted, present) value and the gross
//! (face, future) value of a bill:
//!
//! ```text
//! fraction = rate × days / 360
//! gross    = net / (1 − fraction)
//! net      = gross × (1 − fraction)
//! ```
//!
//! The engine is pure arithmetic. It performs no range checks, no
//! clamping and no display rounding:
//!
//! - a zero divisor (`rate × days == 360`) makes the gross amount
//!   undefined — [`net_to_gross`] returns `None`, never an error or
//!   infinity;
//! - a negative divisor (`rate × days > 360`) yields a negative gross
//!   amount, which is propagated as-is — whether that is nonsensical
//!   is a policy question for the caller;
//! - the net direction has no division, so [`gross_to_net`] is total.
//!
//! All quotients use the fixed division scale of [`crate::decimal`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::daycount::YEAR_BASIS;
use crate::decimal;
use crate::types::{CurrencyAmount, DiscountRate};

/// The fraction of the gross amount discounted away over `days`.
///
/// `rate × days / 360`, with the quotient at the engine's division
/// scale. Negative when `days` is negative.
#[must_use]
pub fn discount_fraction(rate: Decimal, days: i64) -> Decimal {
    // YEAR_BASIS is a nonzero constant, the division cannot fail
    decimal::div(rate * Decimal::from(days), YEAR_BASIS).unwrap_or_default()
}

/// Computes the gross (face) amount from a net amount.
///
/// Returns `None` exactly when the Act/360 divisor `1 − fraction` is
/// zero — no gross amount can be quoted for such terms. For a negative
/// divisor the (negative) quotient is returned unchanged.
#[must_use]
pub fn net_to_gross(net: Decimal, rate: Decimal, days: i64) -> Option<Decimal> {
    let divisor = Decimal::ONE - discount_fraction(rate, days);
    decimal::div(net, divisor)
}

/// Computes the net (present) amount from a gross amount.
///
/// The inverse direction of [`net_to_gross`]. There is no division by
/// a data-dependent value, so the result is always defined.
#[must_use]
pub fn gross_to_net(gross: Decimal, rate: Decimal, days: i64) -> Decimal {
    gross * (Decimal::ONE - discount_fraction(rate, days))
}

/// The terms of a discount quote: annualized rate and elapsed days.
///
/// A thin typed dispatcher over [`net_to_gross`] / [`gross_to_net`]
/// that keeps the currency attached to the derived amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTerms {
    /// Annualized discount rate.
    pub rate: DiscountRate,
    /// Whole calendar days between issue and maturity.
    pub days: i64,
}

impl DiscountTerms {
    /// Creates discount terms.
    #[must_use]
    pub fn new(rate: DiscountRate, days: i64) -> Self {
        Self { rate, days }
    }

    /// Derives the gross amount from a net amount, or `None` in the
    /// singular case.
    #[must_use]
    pub fn gross_from_net(&self, net: &CurrencyAmount) -> Option<CurrencyAmount> {
        net_to_gross(net.value(), self.rate.as_fraction(), self.days)
            .map(|gross| CurrencyAmount::new(gross, net.currency().clone()))
    }

    /// Derives the net amount from a gross amount.
    #[must_use]
    pub fn net_from_gross(&self, gross: &CurrencyAmount) -> CurrencyAmount {
        let net = gross_to_net(gross.value(), self.rate.as_fraction(), self.days);
        CurrencyAmount::new(net, gross.currency().clone())
    }
}

/// A completed discount quote.
///
/// The tuple handed to the submission callback once both directions of
/// a bill's value are known: one amount given, the other derived.
/// Constructed fresh on every recomputation and not persisted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountResult {
    /// Whole calendar days between issue and maturity.
    pub days: i64,
    /// Annualized discount rate.
    pub rate: DiscountRate,
    /// Net (discounted, present) amount.
    pub net: CurrencyAmount,
    /// Gross (face, future) amount.
    pub gross: CurrencyAmount,
}

impl DiscountResult {
    /// The markup: gross minus net, in the net amount's currency.
    ///
    /// Both amounts share a currency by construction, so this cannot
    /// mismatch. Negative past the Act/360 singularity.
    #[must_use]
    pub fn markup(&self) -> CurrencyAmount {
        CurrencyAmount::new(
            self.gross.value() - self.net.value(),
            self.net.currency().clone(),
        )
    }
}
