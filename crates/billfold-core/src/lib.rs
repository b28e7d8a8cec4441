//! # Billfold Core
//!
//! Pure calculation core for discounting promissory bills.
//!
//! This crate provides the numeric foundation of the Billfold wallet:
//!
//! - **Types**: Domain-specific types like [`Date`], [`CurrencyAmount`],
//!   [`DiscountRate`]
//! - **Day Count**: Signed calendar-day counting, UTC-normalized for
//!   timestamp inputs
//! - **Discount Engine**: Act/360 conversion between the net (present)
//!   and gross (face) value of a bill
//!
//! ## Design Philosophy
//!
//! - **Exact decimals**: All amounts are `rust_decimal::Decimal`; the
//!   engine never touches binary floating point, so results reproduce
//!   bit-for-bit
//! - **Total where possible**: The one genuine edge case — a zero
//!   Act/360 divisor — is an `Option::None`, not an error or infinity
//! - **No policy in the core**: Range limits, display rounding and
//!   "nonsensical" negative quotes are caller concerns; the engine
//!   computes the mathematical result for any input
//!
//! ## Example
//!
//! ```rust
//! use billfold_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let issue = Date::from_ymd(2024, 12, 6).unwrap();
//! let maturity = Date::from_ymd(2025, 3, 31).unwrap();
//! let days = daycount::days_between(issue, maturity);
//! assert_eq!(days, 115);
//!
//! let rate = DiscountRate::from_percentage(dec!(4.5));
//! let gross = discount::net_to_gross(dec!(10.12), rate.as_fraction(), days).unwrap();
//! assert_eq!(gross, dec!(10.26759670259987317692));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod daycount;
pub mod decimal;
pub mod discount;
pub mod error;
pub mod types;

#[cfg(test)]
mod validation_tests;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycount;
    pub use crate::discount;
    pub use crate::discount::{DiscountResult, DiscountTerms};
    pub use crate::error::{BillError, BillResult};
    pub use crate::types::{Currency, CurrencyAmount, Date, DiscountRate};
}

// Re-export commonly used types at crate root
pub use discount::{DiscountResult, DiscountTerms};
pub use error::{BillError, BillResult};
pub use types::{Currency, CurrencyAmount, Date, DiscountRate};
