//! Forensic anchors
//!
//! Fixed historical, astronomical and prophetic events pinned to ULS
//! coordinates. The table is static configuration: never created or mutated
//! at runtime.

use crate::{UlsError, UlsResult, Uls, TROPICAL_YEAR_SECONDS};

/// Anchor category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnchorCategory {
    Institutional,
    Prophecy,
    Historical,
    Celestial,
    Political,
}

impl AnchorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            AnchorCategory::Institutional => "INSTITUTIONAL",
            AnchorCategory::Prophecy => "PROPHECY",
            AnchorCategory::Historical => "HISTORICAL",
            AnchorCategory::Celestial => "CELESTIAL",
            AnchorCategory::Political => "POLITICAL",
        }
    }
}

/// An immutable timeline annotation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForensicAnchor {
    pub id: &'static str,
    pub name: &'static str,
    pub category: AnchorCategory,
    /// When the event happens (or, for prophecies, the targeted moment)
    pub uls: Uls,
    /// When a prophecy was issued; None for every other category
    pub origin_uls: Option<Uls>,
    pub description: &'static str,
    /// Display color tag
    pub color: &'static str,
}

impl ForensicAnchor {
    #[inline]
    pub fn is_prophecy(&self) -> bool {
        self.category == AnchorCategory::Prophecy
    }

    /// Tropical years between issue and target of a prophecy
    pub fn lead_time_years(&self) -> Option<f64> {
        self.origin_uls
            .map(|origin| (self.uls - origin) / TROPICAL_YEAR_SECONDS)
    }

    /// Does the event or its origin fall in `[start, start + span)`?
    pub fn falls_within(&self, start: Uls, span: f64) -> bool {
        let end = start + span;
        let hit = |u: Uls| u >= start && u < end;
        hit(self.uls) || self.origin_uls.map_or(false, hit)
    }
}

/// The anchor table, oldest entries first within each era
pub static FORENSIC_ANCHORS: &[ForensicAnchor] = &[
    // Antediluvian
    ForensicAnchor {
        id: "great-flood",
        name: "The Great Deluge",
        category: AnchorCategory::Historical,
        uls: Uls(-74_100_000_000.0),
        origin_uls: None,
        description: "The primary reset of human chronological records.",
        color: "blue-600",
    },
    ForensicAnchor {
        id: "pyramids-giza",
        name: "Giza Construction",
        category: AnchorCategory::Celestial,
        uls: Uls(-80_700_000_000.0),
        origin_uls: None,
        description: "Stellar alignment with Orion belt, establishing the first Alpha Anchor.",
        color: "yellow-500",
    },
    // Prophetic origins
    ForensicAnchor {
        id: "daniel-decree",
        name: "Artaxerxes' Decree",
        category: AnchorCategory::Political,
        uls: Uls(-14_000_000_000.0),
        origin_uls: None,
        description: "The start of the 70-weeks prophetic count.",
        color: "purple-400",
    },
    // Classical recalibrations
    ForensicAnchor {
        id: "council-nicaea",
        name: "Council of Nicaea",
        category: AnchorCategory::Political,
        uls: Uls(10_224_403_200.0),
        origin_uls: None,
        description: "Stabilization of the Easter cycle and Julian calendar constraints.",
        color: "purple-600",
    },
    ForensicAnchor {
        id: "printing-press",
        name: "Gutenberg Printing Press",
        category: AnchorCategory::Historical,
        uls: Uls(45_412_896_000.0),
        origin_uls: None,
        description: "The locking of chronological history via mass-produced records.",
        color: "indigo-500",
    },
    // Reforms
    ForensicAnchor {
        id: "gregorian-reform",
        name: "Papal Bull: Oct 1582",
        category: AnchorCategory::Institutional,
        uls: Uls(49_914_432_000.0),
        origin_uls: None,
        description: "10 days deleted (Oct 5-14) to create the Gregorian Mask.",
        color: "red-500",
    },
    ForensicAnchor {
        id: "british-calendar-act",
        name: "British Reform 1752",
        category: AnchorCategory::Institutional,
        uls: Uls(55_276_416_000.0),
        origin_uls: None,
        description: "11 days deleted in Britain/Americas (Sep 3-13).",
        color: "red-400",
    },
    // Celestial
    ForensicAnchor {
        id: "halleys-comet-1066",
        name: "Halley's Comet (1066)",
        category: AnchorCategory::Celestial,
        uls: Uls(33_608_352_000.0),
        origin_uls: None,
        description: "Celestial omen recorded during the Battle of Hastings.",
        color: "cyan-400",
    },
    ForensicAnchor {
        id: "great-conjunction-1603",
        name: "Great Conjunction 1603",
        category: AnchorCategory::Celestial,
        uls: Uls(50_579_616_000.0),
        origin_uls: None,
        description: "Jupiter-Saturn alignment analyzed by Johannes Kepler.",
        color: "yellow-300",
    },
    // Modern and future fulfilments
    ForensicAnchor {
        id: "atomic-clock-1955",
        name: "Atomic Time Inception",
        category: AnchorCategory::Institutional,
        uls: Uls(61_664_160_000.0),
        origin_uls: None,
        description: "Definition of the second via Caesium-133 vibration.",
        color: "#00ffaa",
    },
    ForensicAnchor {
        id: "nostradamus-quatrain",
        name: "X-72 King of Terror",
        category: AnchorCategory::Prophecy,
        uls: Uls(63_063_552_000.0),
        origin_uls: Some(Uls(49_052_544_000.0)),
        description: "The arrival of the \"Great King of Terror\" from the sky.",
        color: "orange-500",
    },
    ForensicAnchor {
        id: "newton-2060",
        name: "Newton's 2060",
        category: AnchorCategory::Prophecy,
        uls: Uls(65_000_000_000.0),
        origin_uls: Some(Uls(53_772_288_000.0)),
        description: "Calculated end of the 1260-year count from 800 AD.",
        color: "yellow-600",
    },
];

/// Look up an anchor by identifier
pub fn find_anchor(id: &str) -> UlsResult<&'static ForensicAnchor> {
    FORENSIC_ANCHORS
        .iter()
        .find(|a| a.id == id)
        .ok_or_else(|| UlsError::UnknownAnchor(id.to_string()))
}
