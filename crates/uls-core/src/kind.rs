//! Calendar kind definitions
//!
//! The engine renders a single ULS coordinate in several calendars:
//! - Civil: proleptic Gregorian, UTC
//! - Julian: fixed 13-day offset from civil
//! - MayanLongCount: baktun.katun.tun
//! - Prophetic360: 360-day years
//! - Nibiru: 3600-year orbital cycles

use std::str::FromStr;

use serde::Deserialize;

use crate::UlsError;

/// Target calendar for rendering a ULS coordinate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalendarKind {
    /// Civil (Gregorian-equivalent) calendar
    #[default]
    Civil,
    /// Julian calendar (modern-era approximation)
    Julian,
    /// Mayan Long Count
    MayanLongCount,
    /// 360-day prophetic calendar
    Prophetic360,
    /// Speculative 3600-year cycle
    Nibiru,
}

impl CalendarKind {
    pub const ALL: [CalendarKind; 5] = [
        CalendarKind::Civil,
        CalendarKind::Julian,
        CalendarKind::MayanLongCount,
        CalendarKind::Prophetic360,
        CalendarKind::Nibiru,
    ];

    /// Stable identifier
    pub fn as_str(self) -> &'static str {
        match self {
            CalendarKind::Civil => "civil",
            CalendarKind::Julian => "julian",
            CalendarKind::MayanLongCount => "mayan-long-count",
            CalendarKind::Prophetic360 => "prophetic-360",
            CalendarKind::Nibiru => "nibiru",
        }
    }

    /// Short display tag
    pub fn tag(self) -> &'static str {
        match self {
            CalendarKind::Civil => "GRE",
            CalendarKind::Julian => "JUL",
            CalendarKind::MayanLongCount => "MAY",
            CalendarKind::Prophetic360 => "PRO",
            CalendarKind::Nibiru => "NIB",
        }
    }
}

impl FromStr for CalendarKind {
    type Err = UlsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "civil" | "gregorian" => Ok(CalendarKind::Civil),
            "julian" => Ok(CalendarKind::Julian),
            "mayan" | "mayan-long-count" => Ok(CalendarKind::MayanLongCount),
            "prophetic" | "prophetic-360" => Ok(CalendarKind::Prophetic360),
            "nibiru" => Ok(CalendarKind::Nibiru),
            _ => Err(UlsError::UnknownCalendar(s.to_string())),
        }
    }
}

impl std::fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_roundtrip() {
        for kind in CalendarKind::ALL {
            assert_eq!(kind.as_str().parse::<CalendarKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("Gregorian".parse(), Ok(CalendarKind::Civil));
        assert_eq!("MAYAN".parse(), Ok(CalendarKind::MayanLongCount));
        assert_eq!("prophetic".parse(), Ok(CalendarKind::Prophetic360));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert_eq!(
            "soviet".parse::<CalendarKind>(),
            Err(UlsError::UnknownCalendar("soviet".to_string()))
        );
    }
}
