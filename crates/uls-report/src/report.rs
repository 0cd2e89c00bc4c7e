//! Report payload, request context and prompt assembly

use serde::{Deserialize, Serialize};
use uls_core::{TheoryFactor, JULIAN_OFFSET_DAYS};
use uls_time::{format_uls, CoordinateSnapshot};

use crate::{ReportError, ReportResult};

/// A cited source
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportSource {
    pub title: String,
    pub uri: String,
}

/// Structured forensic report as returned by the backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForensicReport {
    pub timestamp: f64,
    pub uls_coordinate: String,
    /// Civil (institutional) date
    pub beta_date: String,
    pub alpha_calculation: String,
    pub inherited_debt: String,
    pub contamination_factors: Vec<String>,
    /// Precession offset in degrees
    pub celestial_offset: f64,
    pub summary: String,
    pub sources: Vec<ReportSource>,
}

impl ForensicReport {
    /// A well-formed report that carries no findings
    pub fn is_empty(&self) -> bool {
        self.contamination_factors.is_empty() && self.sources.is_empty() && self.summary.trim().is_empty()
    }
}

/// Context bundle sent alongside the free-text query
#[derive(Clone, Debug, PartialEq)]
pub struct ReportContext {
    pub uls: String,
    pub date: String,
    pub debt: String,
    /// Precession offset in degrees
    pub offset: f64,
}

impl ReportContext {
    pub fn from_snapshot(snapshot: &CoordinateSnapshot, theories: &[TheoryFactor]) -> Self {
        ReportContext {
            uls: format_uls(snapshot.uls),
            date: snapshot.civil.clone(),
            debt: describe_debt(theories),
            offset: snapshot.precession_offset,
        }
    }
}

/// Human-readable summary of the drift carried by the current configuration
pub fn describe_debt(theories: &[TheoryFactor]) -> String {
    let mut debt = format!("{JULIAN_OFFSET_DAYS:.0}-day Julian offset");
    for theory in theories.iter().filter(|t| t.enabled) {
        debt.push_str("; ");
        debt.push_str(theory.name);
    }
    debt
}

/// Prompt text for one audit request
pub fn build_prompt(query: &str, context: &ReportContext) -> String {
    format!(
        "Perform a temporal forensic audit for the request: \"{query}\".\n\
         Context:\n\
         - ULS coordinate: {uls}\n\
         - Institutional (beta) date: {date}\n\
         - Inherited debt: {debt}\n\
         - Celestial offset (precession): {offset:.4} degrees.\n\
         Respond with a JSON object with the fields timestamp, ulsCoordinate, betaDate, \
         alphaCalculation, inheritedDebt, contaminationFactors, celestialOffset, summary and \
         sources (title, uri). Focus on how institutional calendar layers distort the \
         astronomical record.",
        uls = context.uls,
        date = context.date,
        debt = context.debt,
        offset = context.offset,
    )
}

/// Decode a backend payload
///
/// Blank text is an error of its own, distinct from a malformed body.
pub fn parse_report(raw: &str) -> ReportResult<ForensicReport> {
    if raw.trim().is_empty() {
        return Err(ReportError::EmptyResponse);
    }
    Ok(serde_json::from_str(raw)?)
}
