//! Defensive parsing of raw form text.
//!
//! Every parser here returns `Option`: empty, half-typed or garbage
//! text is "no value" — not zero and not an error. The pipeline treats
//! `None` as an incomplete form, so the engine is never invoked with
//! anything unparsed and the UI never shows an error mid-keystroke.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a decimal amount from raw text.
///
/// Leading/trailing whitespace is ignored. Scientific notation, group
/// separators and currency symbols are rejected — the form feeds plain
/// numeric text only.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// Parses a whole day count from raw text.
#[must_use]
pub fn parse_days(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    i64::from_str(trimmed).ok()
}

/// Parses a percentage from raw text (e.g. `"4.5"` for 4.5%).
///
/// Returns the percentage value itself; conversion to a fraction is
/// the [`billfold_core::types::DiscountRate`] boundary's job.
#[must_use]
pub fn parse_percentage(text: &str) -> Option<Decimal> {
    parse_decimal(text)
}
