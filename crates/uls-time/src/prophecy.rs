//! Prophecy trajectory projection
//!
//! A prophecy counted in 360-day years ("alpha") reaches its target earlier
//! than the same count read off the tropical civil calendar ("beta"). The
//! projection reports where the two streams intersect.

use uls_core::{UlsError, UlsResult, PROPHETIC_YEAR_SECONDS, SECONDS_PER_DAY, TROPICAL_YEAR_SECONDS};

/// Where the current year sits relative to a trajectory
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrajectoryStatus {
    /// Alpha count already completed, civil calendar not there yet
    AlreadyPassed,
    /// Intersection still ahead
    Incoming,
    /// Both streams resolved
    Resolved,
}

/// Result of projecting a prophetic count onto the civil calendar
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProphecyTrajectory {
    pub origin_year: i64,
    pub duration_years: i64,
    /// Naive civil target: origin + duration
    pub alpha_target: i64,
    /// Civil year the prophetic count actually completes
    pub beta_intersection: i64,
    pub drift_days: i64,
    pub drift_years: f64,
    pub status: TrajectoryStatus,
}

impl ProphecyTrajectory {
    /// Fails only when `origin_year + duration_years` leaves the i64 range
    pub fn simulate(origin_year: i64, duration_years: i64, current_year: i64) -> UlsResult<Self> {
        let alpha_target = origin_year
            .checked_add(duration_years)
            .ok_or(UlsError::YearOverflow {
                origin: origin_year,
                duration: duration_years,
            })?;

        let duration = duration_years as f64;
        let alpha_seconds = duration * PROPHETIC_YEAR_SECONDS;
        let beta_seconds = duration * TROPICAL_YEAR_SECONDS;
        let drift_seconds = beta_seconds - alpha_seconds;

        let drift_years = drift_seconds / TROPICAL_YEAR_SECONDS;
        let beta_intersection = (alpha_target as f64 - drift_years).round() as i64;
        let drift_days = (drift_seconds / SECONDS_PER_DAY).round() as i64;

        let status = if beta_intersection < current_year && alpha_target > current_year {
            TrajectoryStatus::AlreadyPassed
        } else if beta_intersection > current_year {
            TrajectoryStatus::Incoming
        } else {
            TrajectoryStatus::Resolved
        };

        Ok(ProphecyTrajectory {
            origin_year,
            duration_years,
            alpha_target,
            beta_intersection,
            drift_days,
            drift_years,
            status,
        })
    }

    /// Days per year the tropical ruler runs long against the prophetic one
    pub fn drift_days_per_year() -> f64 {
        (TROPICAL_YEAR_SECONDS - PROPHETIC_YEAR_SECONDS) / SECONDS_PER_DAY
    }

    pub fn audit_message(&self) -> String {
        match self.status {
            TrajectoryStatus::AlreadyPassed => format!(
                "The {} prophetic years completed around {}; the civil calendar still points at {} \
                 because its ruler runs {:.2} days long every year.",
                self.duration_years,
                self.beta_intersection,
                self.alpha_target,
                Self::drift_days_per_year()
            ),
            TrajectoryStatus::Incoming => format!(
                "Trajectory incoming: the civil calendar expects {}, the prophetic count arrives in {}.",
                self.alpha_target, self.beta_intersection
            ),
            TrajectoryStatus::Resolved => {
                "Both streams have resolved this coordinate.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newton_trajectory() {
        let t = ProphecyTrajectory::simulate(800, 1260, 2026).unwrap();
        assert_eq!(t.alpha_target, 2060);
        // 1260 × 5.2422 days ≈ 6605 days ≈ 18.1 years
        assert_eq!(t.drift_days, 6605);
        assert!((t.drift_years - 18.08).abs() < 0.01);
        assert_eq!(t.beta_intersection, 2042);
        assert_eq!(t.status, TrajectoryStatus::Incoming);
    }

    #[test]
    fn test_already_passed() {
        let t = ProphecyTrajectory::simulate(800, 1260, 2050).unwrap();
        assert_eq!(t.status, TrajectoryStatus::AlreadyPassed);
        assert!(t.audit_message().contains("2060"));
    }

    #[test]
    fn test_resolved() {
        let t = ProphecyTrajectory::simulate(100, 70, 2026).unwrap();
        assert_eq!(t.status, TrajectoryStatus::Resolved);
    }

    #[test]
    fn test_zero_duration() {
        let t = ProphecyTrajectory::simulate(1555, 0, 2026).unwrap();
        assert_eq!(t.drift_days, 0);
        assert_eq!(t.alpha_target, 1555);
        assert_eq!(t.beta_intersection, 1555);
    }

    #[test]
    fn test_target_year_overflow_rejected() {
        assert_eq!(
            ProphecyTrajectory::simulate(i64::MAX, 1, 2026),
            Err(UlsError::YearOverflow {
                origin: i64::MAX,
                duration: 1
            })
        );
        assert!(ProphecyTrajectory::simulate(i64::MIN, -1, 2026).is_err());
        assert!(ProphecyTrajectory::simulate(i64::MAX - 1, 1, 2026).is_ok());
    }

    #[test]
    fn test_drift_rate() {
        assert!((ProphecyTrajectory::drift_days_per_year() - 5.2422).abs() < 1e-4);
    }
}
