//! Clock readouts derived from a coordinate

use uls_core::{Uls, SECONDS_PER_DAY};

use crate::precession_offset;

/// UTC time of day and civil date of a coordinate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeParts {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub millis: u32,
    pub date: String,
}

impl TimeParts {
    pub fn from_uls(uls: Uls) -> Self {
        let civil = uls.civil();
        let ms = civil.millis_of_day;
        TimeParts {
            hours: ms / 3_600_000,
            minutes: ms / 60_000 % 60,
            seconds: ms / 1_000 % 60,
            millis: ms % 1_000,
            date: civil.date_string(),
        }
    }
}

/// `HH:MM:SS.mmm`
impl std::fmt::Display for TimeParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hours, self.minutes, self.seconds, self.millis
        )
    }
}

/// Fixed four-decimal coordinate readout
pub fn format_uls(uls: Uls) -> String {
    format!("{:.4}", uls.0)
}

/// Hand angles of the dual clock face, in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockFace {
    /// Position within the civil day, 0..360
    pub alpha_angle: f64,
    /// Accumulated precession drift
    pub drift_angle: f64,
}

impl ClockFace {
    pub fn from_uls(uls: Uls) -> Self {
        ClockFace {
            alpha_angle: uls.0.rem_euclid(SECONDS_PER_DAY) / SECONDS_PER_DAY * 360.0,
            drift_angle: precession_offset(uls),
        }
    }
}
