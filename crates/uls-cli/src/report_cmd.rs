//! Report command: build the audit prompt, or decode a saved backend response.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use uls_report::{
    build_prompt, ForensicReport, ReportBackend, ReportClient, ReportClientConfig, ReportContext,
    ReportError, ReportPanel, ReportResult,
};
use uls_time::CoordinateSnapshot;

use crate::cli::ReportArgs;
use crate::commands::resolve_instant;
use crate::config::UlsConfig;

/// Backend that replays a response saved to disk.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ReportBackend for FileBackend {
    async fn complete(&self, _prompt: &str) -> ReportResult<String> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| ReportError::Network(format!("{}: {e}", self.path.display())))
    }
}

/// Run the report command.
pub fn run(args: ReportArgs, config: &UlsConfig) -> Result<()> {
    let theories = config.theory_factors();
    let uls = resolve_instant(&args.at, &theories)?;
    let context = ReportContext::from_snapshot(&CoordinateSnapshot::at(uls), &theories);

    let Some(path) = args.response else {
        println!("{}", build_prompt(&args.query, &context));
        return Ok(());
    };

    let client_config = match &args.timeout {
        Some(text) => ReportClientConfig::with_timeout(
            humantime::parse_duration(text).with_context(|| format!("bad --timeout: {text:?}"))?,
        ),
        None => config.report_client()?,
    };

    info!(path = %path.display(), timeout = ?client_config.timeout, "replaying report response");
    let client = ReportClient::with_config(FileBackend::new(path), client_config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start async runtime")?;

    let mut panel = ReportPanel::new();
    panel.begin();
    panel.apply(runtime.block_on(client.generate_report(&args.query, &context)));

    match (panel.report(), panel.error()) {
        (Some(report), _) => print!("{}", format_report(report)),
        (None, Some(error)) => anyhow::bail!("report failed: {error}"),
        (None, None) => anyhow::bail!("report produced no result"),
    }
    Ok(())
}

pub fn format_report(report: &ForensicReport) -> String {
    let mut out = format!(
        "ULS coordinate     {}\nBeta date          {}\nAlpha calculation  {}\n\
         Inherited debt     {}\nCelestial offset   {:.4} deg\n",
        report.uls_coordinate,
        report.beta_date,
        report.alpha_calculation,
        report.inherited_debt,
        report.celestial_offset
    );
    for factor in &report.contamination_factors {
        out.push_str(&format!("  ! {factor}\n"));
    }
    out.push_str(&report.summary);
    out.push('\n');
    for source in &report.sources {
        out.push_str(&format!("  [{}] {}\n", source.title, source.uri));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use uls_core::Uls;

    fn context() -> ReportContext {
        ReportContext::from_snapshot(&CoordinateSnapshot::at(Uls::EPOCH), &[])
    }

    fn scratch_file(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("uls-report-{}-{name}.json", std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[tokio::test]
    async fn test_file_backend_replays_response() {
        let path = scratch_file(
            "ok",
            r#"{"timestamp":0,"ulsCoordinate":"0.0000","betaDate":"0001-01-01",
                "alphaCalculation":"Y0 D0","inheritedDebt":"13-day Julian offset",
                "contaminationFactors":["none"],"celestialOffset":0,
                "summary":"Clean.","sources":[{"title":"t","uri":"u"}]}"#,
        );
        let client = ReportClient::new(FileBackend::new(path.clone()));
        let report = client.generate_report("epoch", &context()).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        let text = format_report(&report);
        assert!(text.contains("Beta date          0001-01-01"));
        assert!(text.contains("  ! none"));
        assert!(text.contains("  [t] u"));
    }

    #[tokio::test]
    async fn test_missing_file_is_transport_error() {
        let client = ReportClient::new(FileBackend::new(PathBuf::from("/nonexistent/uls.json")));
        let err = client.generate_report("q", &context()).await.unwrap_err();
        assert!(err.is_transport());
    }
}
