//! Date type for bill calculations.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{BillError, BillResult};

/// A calendar date for bill calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Bill terms are
/// calendar-day quantities: the issue and maturity dates a wallet user
/// picks carry no meaningful time-of-day, so anything with a timestamp
/// is normalized to its UTC calendar day on the way in
/// (see [`Date::from_datetime`]).
///
/// # Example
///
/// ```rust
/// use billfold_core::types::Date;
///
/// let issue = Date::from_ymd(2024, 12, 6).unwrap();
/// let maturity = Date::from_ymd(2025, 3, 31).unwrap();
/// assert_eq!(issue.days_between(&maturity), 115);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `BillError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> BillResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| BillError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `BillError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> BillResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| BillError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Creates a date from a timestamp by taking its UTC calendar day.
    ///
    /// The timestamp is converted to UTC first, then the time-of-day is
    /// discarded. Two timestamps on the same UTC calendar day always map
    /// to the same `Date` regardless of their local zone offset, and
    /// crossing a UTC midnight always moves the result by exactly one day.
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Date(dt.naive_utc().date())
    }

    /// Returns today's date.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the signed number of calendar days between two dates.
    ///
    /// Positive if `other` is after `self`, negative otherwise, so
    /// `a.days_between(&b) == -b.days_between(&a)` for all dates.
    /// Leap days are counted like any other calendar day.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2024, 12, 6).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 12);
        assert_eq!(date.day(), 6);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2025-03-31").unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 31);

        assert!(Date::parse("31/03/2025").is_err());
    }

    #[test]
    fn test_days_between() {
        let issue = Date::from_ymd(2024, 12, 6).unwrap();
        let maturity = Date::from_ymd(2025, 3, 31).unwrap();
        assert_eq!(issue.days_between(&maturity), 115);
    }

    #[test]
    fn test_days_between_antisymmetric() {
        let a = Date::from_ymd(2024, 2, 28).unwrap();
        let b = Date::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(a.days_between(&b), 2); // leap day in between
        assert_eq!(b.days_between(&a), -2);
        assert_eq!(a.days_between(&a), 0);
    }

    #[test]
    fn test_days_between_leap_years() {
        let d1 = Date::from_ymd(2004, 1, 3).unwrap();
        let d2 = Date::from_ymd(2005, 1, 3).unwrap();
        assert_eq!(d1.days_between(&d2), 366);

        let d3 = Date::from_ymd(2009, 1, 3).unwrap();
        let d4 = Date::from_ymd(2010, 1, 3).unwrap();
        assert_eq!(d3.days_between(&d4), 365);
    }

    #[test]
    fn test_leap_year() {
        assert!(Date::from_ymd(2024, 1, 1).unwrap().is_leap_year());
        assert!(!Date::from_ymd(2025, 1, 1).unwrap().is_leap_year());
        assert!(!Date::from_ymd(2100, 1, 1).unwrap().is_leap_year());
        assert!(Date::from_ymd(2000, 1, 1).unwrap().is_leap_year());
    }

    #[test]
    fn test_from_datetime_discards_time_of_day() {
        let morning = Utc.with_ymd_and_hms(2024, 12, 6, 1, 5, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2024, 12, 6, 23, 59, 59).unwrap();

        assert_eq!(Date::from_datetime(&morning), Date::from_datetime(&evening));
        assert_eq!(
            Date::from_datetime(&morning),
            Date::from_ymd(2024, 12, 6).unwrap()
        );
    }

    #[test]
    fn test_from_datetime_normalizes_offset() {
        // 2024-12-07 01:00 at UTC+2 is 2024-12-06 23:00 UTC
        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = east.with_ymd_and_hms(2024, 12, 7, 1, 0, 0).unwrap();
        assert_eq!(
            Date::from_datetime(&local),
            Date::from_ymd(2024, 12, 6).unwrap()
        );

        // Same wall-clock instant expressed in UTC maps identically
        let utc = local.with_timezone(&Utc);
        assert_eq!(Date::from_datetime(&utc), Date::from_datetime(&local));
    }

    #[test]
    fn test_date_arithmetic_operators() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();

        let d2 = d1 + 10;
        assert_eq!(d2.day(), 11);

        let d3 = d2 - 5;
        assert_eq!(d3.day(), 6);

        assert_eq!(d2 - d1, 10);
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(format!("{}", date), "2025-06-15");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
