//! Zodiac sign lookup
//!
//! Tropical signs come straight from the civil month and day. The sidereal
//! variant first shifts the coordinate back by the precession drift.

use uls_core::{Uls, PRECESSION_CYCLE_YEARS, TROPICAL_YEAR_SECONDS};

use crate::precession_offset;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive (month, day) range of one sign
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignRange {
    pub sign: ZodiacSign,
    pub start: (u32, u32),
    pub end: (u32, u32),
}

impl SignRange {
    const fn new(sign: ZodiacSign, start: (u32, u32), end: (u32, u32)) -> Self {
        SignRange { sign, start, end }
    }

    /// Matches the start month from its day onward, or the end month up to its day
    pub fn contains(&self, month: u32, day: u32) -> bool {
        (month == self.start.0 && day >= self.start.1) || (month == self.end.0 && day <= self.end.1)
    }
}

/// Boundary table, checked in order. Pisces has no row: it is whatever is left.
pub static ZODIAC_BOUNDARIES: [SignRange; 11] = [
    SignRange::new(ZodiacSign::Aries, (3, 21), (4, 19)),
    SignRange::new(ZodiacSign::Taurus, (4, 20), (5, 20)),
    SignRange::new(ZodiacSign::Gemini, (5, 21), (6, 20)),
    SignRange::new(ZodiacSign::Cancer, (6, 21), (7, 22)),
    SignRange::new(ZodiacSign::Leo, (7, 23), (8, 22)),
    SignRange::new(ZodiacSign::Virgo, (8, 23), (9, 22)),
    SignRange::new(ZodiacSign::Libra, (9, 23), (10, 22)),
    SignRange::new(ZodiacSign::Scorpio, (10, 23), (11, 21)),
    SignRange::new(ZodiacSign::Sagittarius, (11, 22), (12, 21)),
    SignRange::new(ZodiacSign::Capricorn, (12, 22), (1, 19)),
    SignRange::new(ZodiacSign::Aquarius, (1, 20), (2, 18)),
];

/// Sign for a 1-based civil month and day
pub fn sign_for(month: u32, day: u32) -> ZodiacSign {
    ZODIAC_BOUNDARIES
        .iter()
        .find(|range| range.contains(month, day))
        .map_or(ZodiacSign::Pisces, |range| range.sign)
}

/// Tropical sign from the civil calendar date
pub fn tropical_zodiac(uls: Uls) -> ZodiacSign {
    let civil = uls.civil();
    sign_for(civil.month(), civil.day())
}

/// Seconds the precession-adjusted lookup shifts back by
///
/// `(offset / 360) × 25772 × tropical_year`. With the linear offset model
/// this recovers the whole elapsed coordinate.
pub fn precession_shift_seconds(uls: Uls) -> f64 {
    let offset = precession_offset(uls);
    (offset / 360.0) * (PRECESSION_CYCLE_YEARS * TROPICAL_YEAR_SECONDS)
}

/// Precession-adjusted sign
pub fn sidereal_zodiac(uls: Uls) -> ZodiacSign {
    tropical_zodiac(uls - precession_shift_seconds(uls))
}
