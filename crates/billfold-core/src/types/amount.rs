//! Currency amount type.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Currency;
use crate::error::{BillError, BillResult};

/// An exact decimal amount in a currency.
///
/// Amounts are value types, constructed fresh for each calculation pass
/// and carried at full precision. Rounding to a display or settlement
/// precision is an explicit caller step via [`CurrencyAmount::rounded`];
/// the discount engine never rounds amounts itself.
///
/// # Example
///
/// ```rust
/// use billfold_core::types::{Currency, CurrencyAmount};
/// use rust_decimal_macros::dec;
///
/// let amount = CurrencyAmount::new(dec!(10.12), Currency::new("sat"));
/// assert_eq!(amount.value(), dec!(10.12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    /// Exact decimal value
    value: Decimal,
    /// Currency of the amount
    currency: Currency,
}

impl CurrencyAmount {
    /// Creates a new amount.
    #[must_use]
    pub fn new(value: Decimal, currency: Currency) -> Self {
        Self { value, currency }
    }

    /// Returns the decimal value.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Validates that the amount is positive.
    ///
    /// Opt-in: the engine itself computes for any value, including the
    /// negative gross amounts produced past the Act/360 singularity.
    ///
    /// # Errors
    ///
    /// Returns `BillError::InvalidAmount` if the value is not positive.
    pub fn validate(&self) -> BillResult<()> {
        if self.value <= Decimal::ZERO {
            return Err(BillError::invalid_amount(
                self.value,
                "amount must be positive",
            ));
        }
        Ok(())
    }

    /// Adds another amount in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `BillError::CurrencyMismatch` if the currencies differ.
    pub fn checked_add(&self, other: &CurrencyAmount) -> BillResult<CurrencyAmount> {
        self.require_same_currency(other)?;
        Ok(CurrencyAmount {
            value: self.value + other.value,
            currency: self.currency.clone(),
        })
    }

    /// Subtracts another amount in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `BillError::CurrencyMismatch` if the currencies differ.
    pub fn checked_sub(&self, other: &CurrencyAmount) -> BillResult<CurrencyAmount> {
        self.require_same_currency(other)?;
        Ok(CurrencyAmount {
            value: self.value - other.value,
            currency: self.currency.clone(),
        })
    }

    /// Returns the amount rounded to `dp` decimal places, half away
    /// from zero.
    ///
    /// This is the settlement-handoff step (`dp = 0` for satoshi sums);
    /// it is never applied inside the discount engine.
    #[must_use]
    pub fn rounded(&self, dp: u32) -> Self {
        Self {
            value: self
                .value
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
            currency: self.currency.clone(),
        }
    }

    fn require_same_currency(&self, other: &CurrencyAmount) -> BillResult<()> {
        if self.currency != other.currency {
            return Err(BillError::currency_mismatch(
                self.currency.code(),
                other.currency.code(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}
