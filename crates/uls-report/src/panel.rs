//! Last-known report display state

use crate::{ForensicReport, ReportResult};

/// Report panel state
///
/// A failed request never clears what is on display: the previous report
/// stays visible and only the error line changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportPanel {
    last: Option<ForensicReport>,
    last_error: Option<String>,
    pending: bool,
    completed: u64,
    failed: u64,
}

impl ReportPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a request as in flight
    pub fn begin(&mut self) {
        self.pending = true;
    }

    /// Record the outcome of a request
    pub fn apply(&mut self, result: ReportResult<ForensicReport>) {
        self.pending = false;
        match result {
            Ok(report) => {
                self.last = Some(report);
                self.last_error = None;
                self.completed += 1;
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                self.failed += 1;
            }
        }
    }

    pub fn report(&self) -> Option<&ForensicReport> {
        self.last.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// (completed, failed) request counts
    pub fn counts(&self) -> (u64, u64) {
        (self.completed, self.failed)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReportError;
    use std::time::Duration;

    fn report(summary: &str) -> ForensicReport {
        ForensicReport {
            timestamp: 0.0,
            uls_coordinate: "0.0000".to_string(),
            beta_date: "0001-01-01".to_string(),
            alpha_calculation: "Y0 D0".to_string(),
            inherited_debt: "13-day Julian offset".to_string(),
            contamination_factors: vec![],
            celestial_offset: 0.0,
            summary: summary.to_string(),
            sources: vec![],
        }
    }

    #[test]
    fn test_success_replaces_report() {
        let mut panel = ReportPanel::new();
        panel.begin();
        assert!(panel.is_pending());

        panel.apply(Ok(report("first")));
        panel.apply(Ok(report("second")));
        assert!(!panel.is_pending());
        assert_eq!(panel.report().map(|r| r.summary.as_str()), Some("second"));
        assert_eq!(panel.error(), None);
        assert_eq!(panel.counts(), (2, 0));
    }

    #[test]
    fn test_failure_keeps_last_report() {
        let mut panel = ReportPanel::new();
        panel.apply(Ok(report("kept")));
        panel.begin();
        panel.apply(Err(ReportError::Timeout(Duration::from_secs(30))));

        assert!(!panel.is_pending());
        assert_eq!(panel.report().map(|r| r.summary.as_str()), Some("kept"));
        assert!(panel.error().is_some_and(|e| e.contains("timed out")));
        assert_eq!(panel.counts(), (1, 1));
    }

    #[test]
    fn test_success_clears_error() {
        let mut panel = ReportPanel::new();
        panel.apply(Err(ReportError::EmptyResponse));
        assert!(panel.report().is_none());
        assert!(panel.error().is_some());

        panel.apply(Ok(report("recovered")));
        assert_eq!(panel.error(), None);

        panel.clear();
        assert_eq!(panel, ReportPanel::default());
    }
}
