//! ULS Core - Fundamental types and static tables
//!
//! This crate defines the types shared by every ULS component:
//! - The continuous time coordinate (Uls) and its epoch constants
//! - Calendar kinds the engine can render
//! - Theory factors (speculative adjustments to the coordinate)
//! - Forensic anchors and time-grid scale descriptors

pub mod time;
pub mod kind;
pub mod theory;
pub mod anchor;
pub mod scale;
pub mod error;

pub use time::*;
pub use kind::*;
pub use theory::*;
pub use anchor::*;
pub use scale::*;
pub use error::*;
