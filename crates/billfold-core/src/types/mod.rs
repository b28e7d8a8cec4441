//! Domain types for bill discounting.
//!
//! This module provides type-safe representations of the values a bill
//! quote is made of:
//!
//! - [`Date`]: Calendar date (UTC-normalized for timestamp inputs)
//! - [`Currency`]: Opaque pass-through currency code
//! - [`CurrencyAmount`]: Exact decimal amount with currency
//! - [`DiscountRate`]: Annualized discount rate as an exact fraction

mod amount;
mod currency;
mod date;
mod rate;

pub use amount::CurrencyAmount;
pub use currency::Currency;
pub use date::Date;
pub use rate::DiscountRate;
