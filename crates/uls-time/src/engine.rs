//! Conversion engine - ULS to calendar renderings
//!
//! Every function here is a closed-form map of one ULS value. None can fail:
//! inputs outside chrono's date range saturate instead of erroring.

use chrono::{DateTime, Utc};
use uls_core::{
    CalendarKind, TheoryFactor, Uls, JULIAN_OFFSET_DAYS, MAYAN_CORRELATION_KINS,
    NIBIRU_CYCLE_YEARS, PRECESSION_CYCLE_YEARS, PROPHETIC_YEAR_SECONDS, SECONDS_PER_DAY,
    TROPICAL_YEAR_SECONDS,
};

use crate::{apply_theories, sidereal_zodiac, tropical_zodiac, ClockSource, TimeParts, ZodiacSign};

const KINS_PER_BAKTUN: i64 = 144_000;
const KINS_PER_KATUN: i64 = 7_200;
const KINS_PER_TUN: i64 = 360;
const KINS_PER_WINAL: i64 = 20;

/// Coordinate of a wall-clock instant with the enabled theories applied
pub fn current_uls(now: DateTime<Utc>, theories: &[TheoryFactor]) -> Uls {
    apply_theories(Uls::from_datetime(now), theories)
}

/// Render a coordinate in the requested calendar
pub fn render(uls: Uls, kind: CalendarKind) -> String {
    match kind {
        CalendarKind::Civil => civil_date(uls),
        CalendarKind::Julian => julian_date(uls),
        CalendarKind::MayanLongCount => MayanLongCount::from_uls(uls).to_string(),
        CalendarKind::Prophetic360 => PropheticDate::from_uls(uls).to_string(),
        CalendarKind::Nibiru => format!("Orb {}", nibiru_cycle(uls)),
    }
}

/// Civil `YYYY-MM-DD`, always UTC
pub fn civil_date(uls: Uls) -> String {
    uls.civil().date_string()
}

/// Civil rendering shifted back by the fixed 13-day Julian offset
pub fn julian_date(uls: Uls) -> String {
    civil_date(uls - JULIAN_OFFSET_DAYS * SECONDS_PER_DAY)
}

/// Completed 3600-year Nibiru orbits since the epoch
pub fn nibiru_cycle(uls: Uls) -> i64 {
    (uls.0 / (NIBIRU_CYCLE_YEARS * TROPICAL_YEAR_SECONDS)).floor() as i64
}

/// Linear precession drift in degrees, zero at the epoch
///
/// Treats precession as a constant-rate rotation of 360° every 25,772
/// tropical years. Not an ephemeris.
pub fn precession_offset(uls: Uls) -> f64 {
    let years = uls.0 / TROPICAL_YEAR_SECONDS;
    years * 360.0 / PRECESSION_CYCLE_YEARS
}

/// Mayan Long Count position
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct MayanLongCount {
    pub baktun: i64,
    pub katun: i64,
    pub tun: i64,
    pub winal: i64,
    pub kin: i64,
}

impl MayanLongCount {
    /// Kins elapsed since the Long Count zero date
    pub fn total_kins(uls: Uls) -> i64 {
        uls.day_index().saturating_add(MAYAN_CORRELATION_KINS)
    }

    pub fn from_uls(uls: Uls) -> Self {
        let kins = Self::total_kins(uls);
        MayanLongCount {
            baktun: kins.div_euclid(KINS_PER_BAKTUN),
            katun: kins.rem_euclid(KINS_PER_BAKTUN) / KINS_PER_KATUN,
            tun: kins.rem_euclid(KINS_PER_KATUN) / KINS_PER_TUN,
            winal: kins.rem_euclid(KINS_PER_TUN) / KINS_PER_WINAL,
            kin: kins.rem_euclid(KINS_PER_WINAL),
        }
    }
}

/// Renders `baktun.katun.tun`; winal and kin are not shown
impl std::fmt::Display for MayanLongCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.baktun, self.katun, self.tun)
    }
}

/// Position in the 360-day prophetic calendar
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PropheticDate {
    pub years: i64,
    /// Always in 0..360
    pub days: i64,
}

impl PropheticDate {
    /// Floor-division split: the remainder takes the sign of the divisor,
    /// so negative coordinates still land on a day in 0..360.
    pub fn from_uls(uls: Uls) -> Self {
        let years = (uls.0 / PROPHETIC_YEAR_SECONDS).floor();
        let remainder = uls.0.rem_euclid(PROPHETIC_YEAR_SECONDS);
        // rem_euclid may round up to the divisor for tiny negative inputs
        let days = ((remainder / SECONDS_PER_DAY).floor() as i64).clamp(0, 359);
        PropheticDate {
            years: years as i64,
            days,
        }
    }

    /// Continuous day index this position names, saturating at the i64 bounds
    pub fn day_bucket(&self) -> i64 {
        self.years.saturating_mul(360).saturating_add(self.days)
    }
}

impl std::fmt::Display for PropheticDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Y{} D{}", self.years, self.days)
    }
}

/// Every reading derived from one sampled instant
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateSnapshot {
    pub uls: Uls,
    pub civil: String,
    pub julian: String,
    pub mayan: MayanLongCount,
    pub prophetic: PropheticDate,
    pub nibiru_cycle: i64,
    pub precession_offset: f64,
    pub tropical_sign: ZodiacSign,
    pub sidereal_sign: ZodiacSign,
    pub time: TimeParts,
}

impl CoordinateSnapshot {
    /// Sample the clock once and derive every reading from that sample
    pub fn capture<C: ClockSource + ?Sized>(clock: &C, theories: &[TheoryFactor]) -> Self {
        Self::at(current_uls(clock.now(), theories))
    }

    pub fn at(uls: Uls) -> Self {
        CoordinateSnapshot {
            uls,
            civil: civil_date(uls),
            julian: julian_date(uls),
            mayan: MayanLongCount::from_uls(uls),
            prophetic: PropheticDate::from_uls(uls),
            nibiru_cycle: nibiru_cycle(uls),
            precession_offset: precession_offset(uls),
            tropical_sign: tropical_zodiac(uls),
            sidereal_sign: sidereal_zodiac(uls),
            time: TimeParts::from_uls(uls),
        }
    }

    /// Rendering for one calendar, consistent with the other fields
    pub fn rendered(&self, kind: CalendarKind) -> String {
        match kind {
            CalendarKind::Civil => self.civil.clone(),
            CalendarKind::Julian => self.julian.clone(),
            CalendarKind::MayanLongCount => self.mayan.to_string(),
            CalendarKind::Prophetic360 => self.prophetic.to_string(),
            CalendarKind::Nibiru => format!("Orb {}", self.nibiru_cycle),
        }
    }
}
