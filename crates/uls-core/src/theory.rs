//! Theory factor definitions
//!
//! A theory factor is a named, toggleable adjustment to the raw elapsed-time
//! computation. Factors are grouped into stages; the engine always runs the
//! additive stage before the multiplicative one, whatever the display order.

use std::str::FromStr;

use serde::Deserialize;

use crate::{UlsError, NIBIRU_CYCLE_YEARS, PHANTOM_TIME_YEARS};

/// Known theories
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TheoryId {
    /// Early Middle Ages (614-911 AD) were fabricated
    PhantomTime,
    /// True rotation period vs. atomic civil clock
    AxialShift,
    /// Orbital factor for cataclysm synchronization
    NibiruCycle,
}

/// Pipeline stage a theory belongs to
///
/// Ordering of the variants is the application order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TheoryStage {
    /// Time-shift: adds or removes seconds
    Additive,
    /// Rate: rescales elapsed seconds
    Multiplicative,
    /// Shown on the switchboard, never touches the coordinate
    DisplayOnly,
}

impl TheoryId {
    pub const ALL: [TheoryId; 3] = [
        TheoryId::PhantomTime,
        TheoryId::AxialShift,
        TheoryId::NibiruCycle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TheoryId::PhantomTime => "phantom-time",
            TheoryId::AxialShift => "axial-shift",
            TheoryId::NibiruCycle => "nibiru-cycle",
        }
    }

    pub fn stage(self) -> TheoryStage {
        match self {
            TheoryId::PhantomTime => TheoryStage::Additive,
            TheoryId::AxialShift => TheoryStage::Multiplicative,
            TheoryId::NibiruCycle => TheoryStage::DisplayOnly,
        }
    }
}

impl FromStr for TheoryId {
    type Err = UlsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TheoryId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UlsError::UnknownTheory(s.to_string()))
    }
}

impl std::fmt::Display for TheoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A toggleable adjustment as shown on the theory switchboard
#[derive(Clone, Debug, PartialEq)]
pub struct TheoryFactor {
    pub id: TheoryId,
    pub name: &'static str,
    pub enabled: bool,
    /// Display magnitude (years for phantom time and Nibiru)
    pub value: f64,
    pub description: &'static str,
}

impl TheoryFactor {
    /// Factor with its standard name, magnitude and description, disabled
    pub fn preset(id: TheoryId) -> Self {
        match id {
            TheoryId::PhantomTime => TheoryFactor {
                id,
                name: "Phantom Time (~297y)",
                enabled: false,
                value: PHANTOM_TIME_YEARS,
                description: "Theory that early Middle Ages (614-911 AD) were fabricated.",
            },
            TheoryId::AxialShift => TheoryFactor {
                id,
                name: "Sidereal Axial (23h56m)",
                enabled: false,
                value: 0.0,
                description: "True rotation period vs Atomic civil clock drift.",
            },
            TheoryId::NibiruCycle => TheoryFactor {
                id,
                name: "Nibiru Cycle (3600y)",
                enabled: false,
                value: NIBIRU_CYCLE_YEARS,
                description: "Orbital factor for cataclysm synchronization.",
            },
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn stage(&self) -> TheoryStage {
        self.id.stage()
    }
}

/// The switchboard: every known theory, all disabled, in display order
pub fn default_theories() -> Vec<TheoryFactor> {
    TheoryId::ALL.into_iter().map(TheoryFactor::preset).collect()
}

/// Theories with the given ids enabled
pub fn theories_with(enabled: &[TheoryId]) -> Vec<TheoryFactor> {
    default_theories()
        .into_iter()
        .map(|t| {
            let on = enabled.contains(&t.id);
            t.enabled(on)
        })
        .collect()
}

/// Flip one factor; returns the new state, or None if it is not in the set
pub fn toggle_theory(theories: &mut [TheoryFactor], id: TheoryId) -> Option<bool> {
    let factor = theories.iter_mut().find(|t| t.id == id)?;
    factor.enabled = !factor.enabled;
    Some(factor.enabled)
}

/// Whether a factor is present and enabled
pub fn is_enabled(theories: &[TheoryFactor], id: TheoryId) -> bool {
    theories.iter().any(|t| t.id == id && t.enabled)
}
