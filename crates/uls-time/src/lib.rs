//! ULS Time Engine - Coordinate conversion and calendar layering
//!
//! This crate implements the temporal coordinate engine:
//! - Clock sources (the single sampled "now")
//! - Theory pipeline (additive stage, then multiplicative stage)
//! - Calendar renderings (civil, Julian, Mayan, prophetic, Nibiru)
//! - Precession offset and zodiac lookup
//! - Reform-gap month grids and the anchor timeline grid
//! - Prophecy trajectory projection

pub mod clock;
pub mod pipeline;
pub mod engine;
pub mod zodiac;
pub mod readout;
pub mod calendar;
pub mod grid;
pub mod prophecy;

pub use clock::*;
pub use pipeline::*;
pub use engine::*;
pub use zodiac::*;
pub use readout::*;
pub use calendar::*;
pub use grid::*;
pub use prophecy::*;
