use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use uls_core::{find_scale, theories_with, ScaleDescriptor, TheoryFactor, TheoryId, DEFAULT_SCALE_ID};
use uls_report::ReportClientConfig;

/// Top-level configuration file.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UlsConfig {
    /// Theories enabled for live readouts; none by default.
    #[serde(default)]
    pub theories: Vec<TheoryId>,

    /// Default timeline scale id.
    #[serde(default = "default_scale")]
    pub scale: String,

    /// Flag reform-gap days in month grids.
    #[serde(default = "default_true")]
    pub reform_gaps: bool,

    /// Report request timeout, humantime syntax ("30s", "2m").
    #[serde(default = "default_report_timeout")]
    pub report_timeout: String,
}

fn default_scale() -> String {
    DEFAULT_SCALE_ID.to_string()
}
fn default_true() -> bool {
    true
}
fn default_report_timeout() -> String {
    "30s".to_string()
}

impl Default for UlsConfig {
    fn default() -> Self {
        Self {
            theories: Vec::new(),
            scale: default_scale(),
            reform_gaps: true,
            report_timeout: default_report_timeout(),
        }
    }
}

impl UlsConfig {
    /// Read the file if given, otherwise fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("invalid config: {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.scale()?;
        self.report_timeout()?;
        Ok(())
    }

    pub fn theory_factors(&self) -> Vec<TheoryFactor> {
        theories_with(&self.theories)
    }

    pub fn scale(&self) -> Result<&'static ScaleDescriptor> {
        Ok(find_scale(&self.scale)?)
    }

    pub fn report_timeout(&self) -> Result<Duration> {
        humantime::parse_duration(&self.report_timeout)
            .with_context(|| format!("bad report_timeout: {:?}", self.report_timeout))
    }

    pub fn report_client(&self) -> Result<ReportClientConfig> {
        Ok(ReportClientConfig::with_timeout(self.report_timeout()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = UlsConfig::parse("").unwrap();
        assert_eq!(config, UlsConfig::default());
        assert_eq!(config.scale().unwrap().id, "month");
        assert_eq!(config.report_timeout().unwrap(), Duration::from_secs(30));
    }

    #[test]
    fn test_full_file() {
        let config = UlsConfig::parse(
            r#"
            theories = ["phantom-time", "axial-shift"]
            scale = "century"
            reform_gaps = false
            report_timeout = "2m 30s"
            "#,
        )
        .unwrap();

        assert_eq!(config.theories, vec![TheoryId::PhantomTime, TheoryId::AxialShift]);
        assert!(!config.reform_gaps);
        assert_eq!(config.scale().unwrap().id, "century");
        assert_eq!(config.report_client().unwrap().timeout, Duration::from_secs(150));

        let factors = config.theory_factors();
        assert_eq!(factors.iter().filter(|t| t.enabled).count(), 2);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(UlsConfig::parse("colour = \"red\"").is_err());
    }

    #[test]
    fn test_unknown_theory_rejected() {
        assert!(UlsConfig::parse("theories = [\"flat-earth\"]").is_err());
    }

    #[test]
    fn test_bad_values_rejected() {
        assert!(UlsConfig::parse("scale = \"fortnight\"").is_err());
        assert!(UlsConfig::parse("report_timeout = \"soon\"").is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        assert_eq!(UlsConfig::load(None).unwrap(), UlsConfig::default());
    }
}
