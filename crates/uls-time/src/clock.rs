//! Clock sources for the ULS engine
//!
//! The engine never reads the system clock itself. A clock source is sampled
//! once per logical computation and the resulting instant is passed down.

use std::time::Duration;

use chrono::{DateTime, Utc};
use uls_core::Uls;

/// Source of the current wall-clock instant
pub trait ClockSource {
    fn now(&self) -> DateTime<Utc>;

    /// Current instant as a raw ULS coordinate (no theories applied)
    fn now_uls(&self) -> Uls {
        Uls::from_datetime(self.now())
    }
}

/// Operating-system wall clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a chosen instant
///
/// Only moves when advanced explicitly; used for replays and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        FixedClock { instant }
    }

    /// Pin the clock to a ULS coordinate
    ///
    /// Coordinates outside chrono's range pin to the Unix epoch.
    pub fn at_uls(uls: Uls) -> Self {
        let instant = DateTime::<Utc>::from_timestamp_millis(uls.to_unix_millis())
            .unwrap_or_default();
        FixedClock { instant }
    }

    /// Move forward by a duration
    pub fn advance(&mut self, dt: Duration) {
        let step = chrono::Duration::from_std(dt).unwrap_or(chrono::Duration::zero());
        self.instant = self.instant.checked_add_signed(step).unwrap_or(self.instant);
    }

    /// Jump to an instant (either direction)
    pub fn set(&mut self, instant: DateTime<Utc>) {
        self.instant = instant;
    }
}

impl ClockSource for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
