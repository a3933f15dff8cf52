//! Time module: civil dates and Julian Day conversions
//!
//! This module provides the validated Gregorian calendar date used as input
//! everywhere in the crate, plus the Julian Day number conversions the
//! astronomical engines compute with. The epoch relation used throughout is
//! Julian Day 2440587.5 == 1970-01-01T00:00 UTC (the Unix epoch).

use crate::constants::{DAY_S, J2000, UNIX_EPOCH_JD};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Error type for time operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    /// The (year, month, day) triple does not name a real Gregorian date
    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// A validated Gregorian calendar day with no time-of-day component.
///
/// Construction checks month lengths and leap years, so a `CivilDate` value
/// always names a real calendar day. Conversions to UTC instants are provided
/// for the engines that need a time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CivilDate(NaiveDate);

impl CivilDate {
    /// Create a civil date, rejecting impossible dates (Feb 30 and friends)
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CivilDate)
            .ok_or(TimeError::InvalidDate { year, month, day })
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Calendar month in 1..=12
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month in 1..=31
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The underlying chrono date
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// This calendar day at 00:00 UTC
    pub fn midnight_utc(&self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }

    /// This calendar day at 12:00 UTC, the fixed reference instant used by
    /// the solar and lunar engines
    pub fn midday_utc(&self) -> DateTime<Utc> {
        self.midnight_utc() + Duration::hours(12)
    }

    /// Whole days from `other` to `self` (negative when `self` is earlier)
    pub fn days_since(&self, other: &CivilDate) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        CivilDate(date)
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Convert a UTC instant to a Julian Day number.
///
/// Defined for any chrono-representable instant, including dates before 1970
/// and proleptic Gregorian dates. Leap seconds are ignored, which is well
/// inside the accuracy of the closed-form formulas built on top of this.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    let seconds = instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) / 1e9;
    UNIX_EPOCH_JD + seconds / DAY_S
}

/// Convert a Julian Day number back to a UTC instant.
///
/// Returns `None` only when the Julian Day falls outside chrono's
/// representable range (roughly +/-262000 years).
pub fn jd_to_instant(jd: f64) -> Option<DateTime<Utc>> {
    let seconds = (jd - UNIX_EPOCH_JD) * DAY_S;
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9).round() as u32;
    DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
}

/// Days elapsed since the J2000.0 epoch, fractional
pub fn days_since_j2000(instant: DateTime<Utc>) -> f64 {
    julian_day(instant) - J2000
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{NAKSHATRA_EPOCH_JD, NEW_MOON_2000_JD};
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    #[test]
    fn test_unix_epoch_julian_day() {
        let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_relative_eq!(julian_day(epoch), UNIX_EPOCH_JD, epsilon = 1e-9);
    }

    #[test]
    fn test_j2000_julian_day() {
        // J2000.0 is 2000-01-01T12:00, JD 2451545.0
        let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_relative_eq!(julian_day(j2000), J2000, epsilon = 1e-9);
        assert_relative_eq!(days_since_j2000(j2000), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_epoch_constants_match_their_instants() {
        let new_moon = Utc.with_ymd_and_hms(2000, 1, 6, 18, 14, 0).unwrap();
        assert_relative_eq!(julian_day(new_moon), NEW_MOON_2000_JD, epsilon = 1e-6);

        let nakshatra_epoch = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert_relative_eq!(julian_day(nakshatra_epoch), NAKSHATRA_EPOCH_JD, epsilon = 1e-9);
    }

    #[test]
    fn test_jd_round_trip() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 15, 6, 30, 45).unwrap();
        let restored = jd_to_instant(julian_day(instant)).unwrap();
        let drift = (restored - instant).num_milliseconds().abs();
        assert!(drift < 10, "round trip drifted by {} ms", drift);
    }

    #[test]
    fn test_jd_before_unix_epoch() {
        let apollo = Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 0).unwrap();
        let jd = julian_day(apollo);
        assert!(jd < UNIX_EPOCH_JD);
        // 1969-07-20 starts at JD 2440422.5
        assert!(jd > 2_440_422.5 && jd < 2_440_423.5);
    }

    #[test]
    fn test_civil_date_validation() {
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(2024, 4, 31).is_err());
        assert!(CivilDate::new(2024, 13, 1).is_err());
        assert!(CivilDate::new(2024, 0, 1).is_err());

        let err = CivilDate::new(2023, 2, 29).unwrap_err();
        assert_eq!(
            err,
            TimeError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            }
        );
    }

    #[test]
    fn test_civil_date_instants() {
        let date = CivilDate::new(2024, 1, 1).unwrap();
        assert_eq!(
            date.midnight_utc(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            date.midday_utc(),
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_days_since() {
        let anchor = CivilDate::new(2023, 8, 17).unwrap();
        let query = CivilDate::new(2024, 1, 1).unwrap();
        assert_eq!(query.days_since(&anchor), 137);
        assert_eq!(anchor.days_since(&query), -137);
    }

    #[test]
    fn test_display() {
        let date = CivilDate::new(2024, 1, 1).unwrap();
        assert_eq!(date.to_string(), "2024-01-01");
    }
}
