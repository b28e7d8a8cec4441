//! Field-level range limits.
//!
//! Range enforcement is entirely a form concern: the core engine
//! computes the mathematical result for any input, so everything that
//! makes a quote *businessable* — a day count inside the discounting
//! window, a rate below 100% — is checked here, before the engine is
//! invoked.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Acceptable input ranges for a discount form.
///
/// The defaults are the wallet's standard limits: whole days in
/// `[1, 360]` and a rate in `[0, 99.9999]` percent. Deployments with
/// longer paper can widen them; notably, day windows beyond 360 make
/// the Act/360 singularity reachable (see
/// [`crate::pipeline::Derivation::Singular`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLimits {
    /// Smallest accepted day count.
    pub min_days: i64,
    /// Largest accepted day count.
    pub max_days: i64,
    /// Largest accepted rate, in percent.
    pub max_rate_percent: Decimal,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            min_days: 1,
            max_days: 360,
            max_rate_percent: dec!(99.9999),
        }
    }
}

impl FieldLimits {
    /// Checks a parsed day count against the limits.
    #[must_use]
    pub fn days_ok(&self, days: i64) -> bool {
        days >= self.min_days && days <= self.max_days
    }

    /// Checks a parsed percentage against the limits.
    #[must_use]
    pub fn rate_percent_ok(&self, percent: Decimal) -> bool {
        percent >= Decimal::ZERO && percent <= self.max_rate_percent
    }
}
