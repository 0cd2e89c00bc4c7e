//! Theory pipeline - ordered transforms over the raw coordinate
//!
//! Each enabled theory contributes one pure transform. Transforms run stage by
//! stage: every additive shift first, then every multiplicative rescale. The
//! two stages do not commute, so the order is part of the contract.

use uls_core::{
    is_enabled, TheoryFactor, TheoryId, TheoryStage, Uls, PHANTOM_TIME_YEARS, SECONDS_PER_DAY,
    SIDEREAL_DAY_SECONDS, TROPICAL_YEAR_SECONDS,
};

/// Ratio of a civil day to a sidereal day
pub const AXIAL_RATE: f64 = SECONDS_PER_DAY / SIDEREAL_DAY_SECONDS;

/// Seconds removed by the phantom-time theory
pub const PHANTOM_TIME_SHIFT_SECONDS: f64 = PHANTOM_TIME_YEARS * TROPICAL_YEAR_SECONDS;

pub type TransformFn = fn(Uls) -> Uls;

/// One named step of the pipeline
#[derive(Clone, Copy)]
pub struct TheoryTransform {
    pub id: TheoryId,
    pub stage: TheoryStage,
    pub apply: TransformFn,
}

impl std::fmt::Debug for TheoryTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TheoryTransform")
            .field("id", &self.id)
            .field("stage", &self.stage)
            .finish()
    }
}

/// Remove 297 tropical years
pub fn phantom_time_shift(uls: Uls) -> Uls {
    uls - PHANTOM_TIME_SHIFT_SECONDS
}

/// Re-measure elapsed seconds in sidereal days
pub fn axial_rate_correction(uls: Uls) -> Uls {
    Uls(uls.0 * AXIAL_RATE)
}

/// Built-in transforms in application order
pub static STANDARD_TRANSFORMS: [TheoryTransform; 2] = [
    TheoryTransform {
        id: TheoryId::PhantomTime,
        stage: TheoryStage::Additive,
        apply: phantom_time_shift,
    },
    TheoryTransform {
        id: TheoryId::AxialShift,
        stage: TheoryStage::Multiplicative,
        apply: axial_rate_correction,
    },
];

/// Apply the enabled built-in theories to a raw coordinate
pub fn apply_theories(raw: Uls, theories: &[TheoryFactor]) -> Uls {
    run_transforms(&STANDARD_TRANSFORMS, raw, theories)
}

fn run_transforms(transforms: &[TheoryTransform], raw: Uls, theories: &[TheoryFactor]) -> Uls {
    transforms
        .iter()
        .filter(|t| is_enabled(theories, t.id))
        .fold(raw, |uls, t| {
            let next = (t.apply)(uls);
            tracing::trace!(theory = %t.id, stage = ?t.stage, before = uls.0, after = next.0, "theory applied");
            next
        })
}

/// An ordered set of theory transforms
///
/// Construction sorts by stage (stable within a stage), so a pipeline can
/// never run a multiplicative step ahead of an additive one.
#[derive(Clone, Debug)]
pub struct TheoryPipeline {
    transforms: Vec<TheoryTransform>,
}

impl TheoryPipeline {
    pub fn new(mut transforms: Vec<TheoryTransform>) -> Self {
        transforms.sort_by_key(|t| t.stage);
        TheoryPipeline { transforms }
    }

    /// Pipeline with the built-in phantom-time and axial-shift transforms
    pub fn standard() -> Self {
        Self::new(STANDARD_TRANSFORMS.to_vec())
    }

    pub fn transforms(&self) -> &[TheoryTransform] {
        &self.transforms
    }

    pub fn apply(&self, raw: Uls, theories: &[TheoryFactor]) -> Uls {
        run_transforms(&self.transforms, raw, theories)
    }
}

impl Default for TheoryPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uls_core::{default_theories, theories_with};

    const RAW: Uls = Uls(63_900_000_000.0);

    #[test]
    fn test_no_theories_is_identity() {
        assert_eq!(apply_theories(RAW, &default_theories()), RAW);
        assert_eq!(apply_theories(RAW, &[]), RAW);
    }

    #[test]
    fn test_phantom_time_shift() {
        let theories = theories_with(&[TheoryId::PhantomTime]);
        let shifted = apply_theories(RAW, &theories);
        assert_eq!(shifted, Uls(RAW.0 - 297.0 * 31_556_925.26));
    }

    #[test]
    fn test_axial_rescale() {
        let theories = theories_with(&[TheoryId::AxialShift]);
        let scaled = apply_theories(RAW, &theories);
        assert_eq!(scaled, Uls(RAW.0 * (86_400.0 / 86_164.0905)));
    }

    #[test]
    fn test_nibiru_does_not_touch_coordinate() {
        let theories = theories_with(&[TheoryId::NibiruCycle]);
        assert_eq!(apply_theories(RAW, &theories), RAW);
    }

    #[test]
    fn test_additive_runs_before_multiplicative() {
        let theories = theories_with(&[TheoryId::AxialShift, TheoryId::PhantomTime]);
        let composed = apply_theories(RAW, &theories);

        let specified = axial_rate_correction(phantom_time_shift(RAW));
        let reversed = phantom_time_shift(axial_rate_correction(RAW));

        assert_eq!(composed, specified);
        assert_ne!(composed, reversed);
    }

    #[test]
    fn test_display_order_does_not_matter() {
        let mut theories = theories_with(&[TheoryId::AxialShift, TheoryId::PhantomTime]);
        let forward = apply_theories(RAW, &theories);
        theories.reverse();
        assert_eq!(apply_theories(RAW, &theories), forward);
    }

    #[test]
    fn test_pipeline_sorts_by_stage() {
        let mut reversed = STANDARD_TRANSFORMS.to_vec();
        reversed.reverse();
        let pipeline = TheoryPipeline::new(reversed);

        let stages: Vec<_> = pipeline.transforms().iter().map(|t| t.stage).collect();
        assert_eq!(stages, vec![TheoryStage::Additive, TheoryStage::Multiplicative]);

        let theories = theories_with(&[TheoryId::PhantomTime, TheoryId::AxialShift]);
        assert_eq!(pipeline.apply(RAW, &theories), apply_theories(RAW, &theories));
    }
}
