//! Report client
//!
//! Wraps an opaque request/response backend with prompt assembly, a request
//! timeout and payload validation. Every failure surfaces as a `ReportError`;
//! nothing here panics on a bad backend.

use std::future::Future;
use std::time::Duration;

use tokio::time::timeout;

use crate::{build_prompt, parse_report, ForensicReport, ReportContext, ReportError, ReportResult};

/// Transport to the report generator
pub trait ReportBackend {
    /// Send one prompt and return the raw response text
    fn complete(&self, prompt: &str) -> impl Future<Output = ReportResult<String>> + Send;
}

/// Report client configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportClientConfig {
    /// Upper bound for a single backend round trip
    pub timeout: Duration,
}

impl Default for ReportClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl ReportClientConfig {
    /// Short deadline for interactive use
    pub fn interactive() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }

    /// Long deadline for batch audits
    pub fn batch() -> Self {
        Self {
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

/// Report client
pub struct ReportClient<B> {
    backend: B,
    config: ReportClientConfig,
}

impl<B: ReportBackend> ReportClient<B> {
    /// Create a client with default settings
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, ReportClientConfig::default())
    }

    pub fn with_config(backend: B, config: ReportClientConfig) -> Self {
        Self { backend, config }
    }

    pub fn config(&self) -> &ReportClientConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Request a forensic report for a free-text query
    pub async fn generate_report(
        &self,
        query: &str,
        context: &ReportContext,
    ) -> ReportResult<ForensicReport> {
        let prompt = build_prompt(query, context);
        tracing::debug!(query, uls = %context.uls, "requesting forensic report");

        let result = match timeout(self.config.timeout, self.backend.complete(&prompt)).await {
            Ok(Ok(raw)) => parse_report(&raw),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(ReportError::Timeout(self.config.timeout)),
        };

        if let Err(e) = &result {
            tracing::warn!(query, error = %e, transport = e.is_transport(), "forensic report failed");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const REPORT: &str = r#"{"timestamp":1767225600000,"ulsCoordinate":"63902908800.0000",
        "betaDate":"2026-01-01","alphaCalculation":"Y2054 D174",
        "inheritedDebt":"13-day Julian offset","contaminationFactors":["Gregorian reform"],
        "celestialOffset":28.2805,"summary":"One layer.","sources":[]}"#;

    enum MockBackend {
        Reply(&'static str),
        Fail(&'static str),
        Stall(Duration),
    }

    impl ReportBackend for MockBackend {
        async fn complete(&self, _prompt: &str) -> ReportResult<String> {
            match self {
                MockBackend::Reply(body) => Ok(body.to_string()),
                MockBackend::Fail(msg) => Err(ReportError::Network(msg.to_string())),
                MockBackend::Stall(delay) => {
                    tokio::time::sleep(*delay).await;
                    Ok(REPORT.to_string())
                }
            }
        }
    }

    struct CountingBackend {
        calls: AtomicUsize,
    }

    impl ReportBackend for CountingBackend {
        async fn complete(&self, prompt: &str) -> ReportResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert!(prompt.contains("Why 1752?"));
            Ok(REPORT.to_string())
        }
    }

    fn context() -> ReportContext {
        ReportContext {
            uls: "63902908800.0000".to_string(),
            date: "2026-01-01".to_string(),
            debt: "13-day Julian offset".to_string(),
            offset: 28.2805,
        }
    }

    #[tokio::test]
    async fn test_generate_report() {
        let client = ReportClient::new(MockBackend::Reply(REPORT));
        let report = client.generate_report("Why 1582?", &context()).await.unwrap();
        assert_eq!(report.beta_date, "2026-01-01");
        assert_eq!(report.contamination_factors, vec!["Gregorian reform".to_string()]);
    }

    #[tokio::test]
    async fn test_prompt_reaches_backend() {
        let client = ReportClient::new(CountingBackend {
            calls: AtomicUsize::new(0),
        });
        client.generate_report("Why 1752?", &context()).await.unwrap();
        assert_eq!(client.backend().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_network_error() {
        let client = ReportClient::new(MockBackend::Fail("connection refused"));
        let err = client.generate_report("q", &context()).await.unwrap_err();
        assert!(matches!(err, ReportError::Network(ref m) if m == "connection refused"));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_timeout() {
        let config = ReportClientConfig::with_timeout(Duration::from_millis(20));
        let client = ReportClient::with_config(MockBackend::Stall(Duration::from_secs(5)), config);
        let err = client.generate_report("q", &context()).await.unwrap_err();
        assert!(matches!(err, ReportError::Timeout(d) if d == Duration::from_millis(20)));
    }

    #[tokio::test]
    async fn test_empty_response() {
        let client = ReportClient::new(MockBackend::Reply(""));
        let err = client.generate_report("q", &context()).await.unwrap_err();
        assert!(matches!(err, ReportError::EmptyResponse));
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let client = ReportClient::new(MockBackend::Reply("{\"betaDate\": 1}"));
        let err = client.generate_report("q", &context()).await.unwrap_err();
        assert!(matches!(err, ReportError::Parse(_)));
    }

    #[test]
    fn test_config_presets() {
        assert_eq!(ReportClientConfig::default().timeout, Duration::from_secs(30));
        assert!(ReportClientConfig::interactive().timeout < ReportClientConfig::batch().timeout);
    }
}
