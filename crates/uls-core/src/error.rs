//! Error types for ULS operations

use thiserror::Error;

/// Core ULS errors
///
/// Every conversion in the engine is total; these cover caller input that
/// cannot name a real calendar position or a known table entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UlsError {
    #[error("Invalid month index: {0} (expected 0..=11)")]
    InvalidMonth(u32),

    #[error("Invalid civil date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Unknown calendar kind: {0}")]
    UnknownCalendar(String),

    #[error("Unknown theory: {0}")]
    UnknownTheory(String),

    #[error("Unknown scale: {0}")]
    UnknownScale(String),

    #[error("Unknown anchor: {0}")]
    UnknownAnchor(String),

    #[error("Year out of range: {origin} + {duration}")]
    YearOverflow { origin: i64, duration: i64 },
}

/// Result type for ULS operations
pub type UlsResult<T> = Result<T, UlsError>;
