//! Time-grid scale descriptors
//!
//! One descriptor per zoom level of the timeline grid. Unit sizes are the
//! rounded civil approximations used for display bucketing, not calendar
//! arithmetic.

use crate::{UlsError, UlsResult};

/// One zoom level of a time-grid view
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    /// Width of one grid cell in seconds
    pub unit_seconds: f64,
    /// Number of cells shown
    pub cell_count: usize,
}

impl ScaleDescriptor {
    /// Seconds covered by the whole grid
    #[inline]
    pub fn span_seconds(&self) -> f64 {
        self.unit_seconds * self.cell_count as f64
    }
}

pub static SCALES: &[ScaleDescriptor] = &[
    ScaleDescriptor {
        id: "24h",
        label: "24 Hours",
        unit_seconds: 86_400.0,
        cell_count: 24,
    },
    ScaleDescriptor {
        id: "month",
        label: "Month",
        unit_seconds: 2_629_743.0,
        cell_count: 31,
    },
    ScaleDescriptor {
        id: "year",
        label: "Year",
        unit_seconds: 31_556_925.0,
        cell_count: 12,
    },
    ScaleDescriptor {
        id: "decade",
        label: "Decade",
        unit_seconds: 315_569_250.0,
        cell_count: 10,
    },
    ScaleDescriptor {
        id: "century",
        label: "Century",
        unit_seconds: 3_155_692_500.0,
        cell_count: 10,
    },
    ScaleDescriptor {
        id: "millennium",
        label: "Millennium",
        unit_seconds: 31_556_925_000.0,
        cell_count: 10,
    },
];

pub const DEFAULT_SCALE_ID: &str = "month";

/// Look up a scale by identifier
pub fn find_scale(id: &str) -> UlsResult<&'static ScaleDescriptor> {
    SCALES
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| UlsError::UnknownScale(id.to_string()))
}

/// The scale a fresh grid view opens at
pub fn default_scale() -> &'static ScaleDescriptor {
    &SCALES[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale_is_month() {
        assert_eq!(default_scale().id, DEFAULT_SCALE_ID);
    }

    #[test]
    fn test_scales_grow() {
        for pair in SCALES.windows(2) {
            assert!(pair[0].unit_seconds < pair[1].unit_seconds);
        }
    }

    #[test]
    fn test_find_scale() {
        assert_eq!(find_scale("century").unwrap().cell_count, 10);
        assert_eq!(
            find_scale("eon"),
            Err(UlsError::UnknownScale("eon".to_string()))
        );
    }
}
