//! Day counting for bill terms.
//!
//! Bill discounts accrue on actual elapsed calendar days over a fixed
//! 360-day year (the Act/360 money-market convention). The functions
//! here produce the signed whole-day numerator; the basis lives in
//! [`YEAR_BASIS`] and is applied by the discount engine.

use chrono::{DateTime, TimeZone};
use rust_decimal::Decimal;

use crate::types::Date;

/// The Act/360 year basis.
pub const YEAR_BASIS: Decimal = Decimal::from_parts(360, 0, 0, false, 0);

/// Counts the signed whole calendar days from `start` to `end`.
///
/// Antisymmetric (`days_between(a, b) == -days_between(b, a)`) and
/// leap-year correct, since it differences calendar dates rather than
/// assuming a fixed-length year. A negative result means `end` is
/// before `start`; callers decide whether that is an error.
#[must_use]
pub fn days_between(start: Date, end: Date) -> i64 {
    start.days_between(&end)
}

/// Counts the signed whole calendar days between two timestamps.
///
/// Both timestamps are normalized to their UTC calendar day before
/// differencing, so time-of-day, zone offsets and daylight-saving
/// transitions never shift the count: same UTC day contributes 0,
/// crossing a UTC midnight contributes exactly ±1.
#[must_use]
pub fn days_between_timestamps<S: TimeZone, E: TimeZone>(
    start: &DateTime<S>,
    end: &DateTime<E>,
) -> i64 {
    days_between(Date::from_datetime(start), Date::from_datetime(end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_year_basis() {
        assert_eq!(YEAR_BASIS, dec!(360));
    }

    #[test]
    fn test_days_between_reference_window() {
        let issue = Date::from_ymd(2024, 12, 6).unwrap();
        let maturity = Date::from_ymd(2025, 3, 31).unwrap();
        assert_eq!(days_between(issue, maturity), 115);
    }

    #[test]
    fn test_days_between_sign_convention() {
        let a = Date::from_ymd(2025, 6, 15).unwrap();
        let b = Date::from_ymd(2025, 6, 1).unwrap();
        assert_eq!(days_between(a, b), -14);
        assert_eq!(days_between(b, a), 14);
    }

    #[test]
    fn test_days_between_leap_years() {
        let start = Date::from_ymd(2004, 1, 3).unwrap();
        assert_eq!(days_between(start, Date::from_ymd(2005, 1, 3).unwrap()), 366);

        let start = Date::from_ymd(2009, 1, 3).unwrap();
        assert_eq!(days_between(start, Date::from_ymd(2010, 1, 3).unwrap()), 365);
    }

    #[test]
    fn test_timestamps_same_calendar_day() {
        let early = Utc.with_ymd_and_hms(2025, 3, 31, 0, 0, 1).unwrap();
        let late = Utc.with_ymd_and_hms(2025, 3, 31, 23, 59, 59).unwrap();
        assert_eq!(days_between_timestamps(&early, &late), 0);
    }

    #[test]
    fn test_timestamps_crossing_midnight() {
        let before = Utc.with_ymd_and_hms(2025, 3, 30, 23, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 3, 31, 0, 0, 1).unwrap();
        assert_eq!(days_between_timestamps(&before, &after), 1);
        assert_eq!(days_between_timestamps(&after, &before), -1);
    }

    #[test]
    fn test_timestamps_offset_invariance() {
        // The same two instants viewed from different zones give the
        // same count as their UTC rendition
        let start_utc = Utc.with_ymd_and_hms(2024, 12, 6, 10, 0, 0).unwrap();
        let end_utc = Utc.with_ymd_and_hms(2025, 3, 31, 4, 0, 0).unwrap();

        let west = FixedOffset::west_opt(7 * 3600).unwrap();
        let start_local = start_utc.with_timezone(&west);
        let end_local = end_utc.with_timezone(&west);

        assert_eq!(days_between_timestamps(&start_utc, &end_utc), 115);
        assert_eq!(days_between_timestamps(&start_local, &end_local), 115);
        assert_eq!(days_between_timestamps(&start_local, &end_utc), 115);
    }
}
