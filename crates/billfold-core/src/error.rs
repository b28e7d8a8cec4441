//! Error types for the Billfold core.
//!
//! The calculation engine itself is total apart from the singular
//! Act/360 divisor (reported as `None`, see [`crate::discount`]);
//! errors here cover construction and validation of domain values.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for Billfold operations.
pub type BillResult<T> = Result<T, BillError>;

/// The main error type for Billfold operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BillError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid currency amount.
    #[error("Invalid amount: {value} - {reason}")]
    InvalidAmount {
        /// The invalid amount value.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Invalid discount rate.
    #[error("Invalid discount rate: {value} - {reason}")]
    InvalidRate {
        /// The invalid rate value (as a fraction).
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Arithmetic between amounts in different currencies.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency code on the left-hand side.
        left: String,
        /// Currency code on the right-hand side.
        right: String,
    },
}

impl BillError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            value,
            reason: reason.into(),
        }
    }

    /// Creates an invalid rate error.
    #[must_use]
    pub fn invalid_rate(value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidRate {
            value,
            reason: reason.into(),
        }
    }

    /// Creates a currency mismatch error.
    #[must_use]
    pub fn currency_mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            left: left.into(),
            right: right.into(),
        }
    }
}
