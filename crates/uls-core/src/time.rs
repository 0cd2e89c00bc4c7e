//! Time primitives for ULS
//!
//! ULS is a single continuous coordinate: seconds elapsed since civil
//! 0001-01-01T00:00:00 UTC. Every calendar rendering is a pure function
//! of one ULS value.
//! - Uls: the coordinate itself (real-valued, unbounded in both directions)
//! - CivilInstant: the proleptic Gregorian date and time-of-day it lands on

use std::ops::{Add, Sub};

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::{UlsError, UlsResult};

/// ULS epoch (0001-01-01T00:00:00Z) as milliseconds from the Unix epoch
pub const ULS_EPOCH_UNIX_MS: i64 = -62_135_596_800_000;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Mean tropical year in seconds
pub const TROPICAL_YEAR_SECONDS: f64 = 31_556_925.26;

/// 360-day prophetic year in seconds
pub const PROPHETIC_YEAR_SECONDS: f64 = 31_104_000.0;

/// Sidereal day (one true rotation) in seconds
pub const SIDEREAL_DAY_SECONDS: f64 = 86_164.0905;

/// Years for one full 360° precession of the equinoxes (linear model)
pub const PRECESSION_CYCLE_YEARS: f64 = 25_772.0;

/// Years in one Nibiru orbit
pub const NIBIRU_CYCLE_YEARS: f64 = 3_600.0;

/// Years removed by the phantom-time theory
pub const PHANTOM_TIME_YEARS: f64 = 297.0;

/// Fixed Julian/Gregorian date difference (modern era only)
pub const JULIAN_OFFSET_DAYS: f64 = 13.0;

/// Long Count correlation: kins elapsed at the ULS epoch
pub const MAYAN_CORRELATION_KINS: i64 = 1_872_000;

/// Continuous time coordinate - seconds since the ULS epoch
///
/// Negative values are proleptic instants before 0001-01-01.
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Uls(pub f64);

impl Uls {
    pub const EPOCH: Uls = Uls(0.0);

    #[inline]
    pub fn from_secs(secs: f64) -> Self {
        Uls(secs)
    }

    #[inline]
    pub fn from_days(days: f64) -> Self {
        Uls(days * SECONDS_PER_DAY)
    }

    #[inline]
    pub fn as_secs(self) -> f64 {
        self.0
    }

    /// Coordinate of a wall-clock instant
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        Self::from_unix_millis(instant.timestamp_millis())
    }

    #[inline]
    pub fn from_unix_millis(millis: i64) -> Self {
        Uls((millis - ULS_EPOCH_UNIX_MS) as f64 / 1000.0)
    }

    /// Coordinate of UTC midnight on a proleptic Gregorian date (1-based month)
    pub fn from_civil(year: i32, month: u32, day: u32) -> UlsResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(UlsError::InvalidDate { year, month, day })?;
        Ok(Self::from_date(date))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        let days = i64::from(date.num_days_from_ce()) - 1;
        Uls(days as f64 * SECONDS_PER_DAY)
    }

    /// Unix milliseconds, truncated toward zero
    ///
    /// Saturates outside the i64 range; NaN maps to the Unix epoch.
    #[inline]
    pub fn to_unix_millis(self) -> i64 {
        (ULS_EPOCH_UNIX_MS as f64 + self.0 * 1000.0).trunc() as i64
    }

    /// Continuous day index: floor(ULS / 86400)
    #[inline]
    pub fn day_index(self) -> i64 {
        (self.0 / SECONDS_PER_DAY).floor() as i64
    }

    /// Civil (proleptic Gregorian, UTC) date and time of day
    ///
    /// Instants beyond chrono's representable range saturate to its
    /// first or last date.
    pub fn civil(self) -> CivilInstant {
        let millis = self.to_unix_millis().saturating_sub(ULS_EPOCH_UNIX_MS);
        let days = millis.div_euclid(MILLIS_PER_DAY);
        let millis_of_day = millis.rem_euclid(MILLIS_PER_DAY) as u32;

        let date = i32::try_from(days + 1)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX });

        CivilInstant { date, millis_of_day }
    }

    #[inline]
    pub fn shifted(self, secs: f64) -> Self {
        Uls(self.0 + secs)
    }
}

impl Add<f64> for Uls {
    type Output = Uls;

    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        Uls(self.0 + rhs)
    }
}

impl Sub<f64> for Uls {
    type Output = Uls;

    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        Uls(self.0 - rhs)
    }
}

impl Sub<Uls> for Uls {
    type Output = f64;

    /// Signed distance in seconds
    #[inline]
    fn sub(self, rhs: Uls) -> Self::Output {
        self.0 - rhs.0
    }
}

impl std::fmt::Debug for Uls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ULS({:.3}s)", self.0)
    }
}

impl std::fmt::Display for Uls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

/// A ULS coordinate resolved onto the civil calendar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CivilInstant {
    pub date: NaiveDate,
    /// Milliseconds since UTC midnight
    pub millis_of_day: u32,
}

impl CivilInstant {
    #[inline]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// 1-based month
    #[inline]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// `YYYY-MM-DD`, switching to a signed six-digit year outside 0..=9999
    pub fn date_string(&self) -> String {
        format_civil_date(self.date)
    }
}

/// Extended ISO-8601 date rendering
pub fn format_civil_date(date: NaiveDate) -> String {
    let year = date.year();
    if (0..=9999).contains(&year) {
        format!("{:04}-{:02}-{:02}", year, date.month(), date.day())
    } else {
        let sign = if year < 0 { '-' } else { '+' };
        format!(
            "{}{:06}-{:02}-{:02}",
            sign,
            year.unsigned_abs(),
            date.month(),
            date.day()
        )
    }
}
