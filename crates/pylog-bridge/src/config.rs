//! Bridge configuration

use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// Per-plugin bridge configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Plugin name attached to every forwarded record
    pub name: String,
    /// Severity used by `write` and `writelines`
    pub stream_severity: Severity,
    /// Replace `sys.stdout` and `sys.stderr` with bridge objects on bootstrap
    pub redirect_stdio: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            name: "python".to_string(),
            stream_severity: Severity::Error,
            redirect_stdio: false,
        }
    }
}

impl BridgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_stream_severity(mut self, severity: Severity) -> Self {
        self.stream_severity = severity;
        self
    }

    pub fn with_redirect_stdio(mut self, redirect: bool) -> Self {
        self.redirect_stdio = redirect;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BridgeConfig::default();
        assert_eq!(config.name, "python");
        assert_eq!(config.stream_severity, Severity::Error);
        assert!(!config.redirect_stdio);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config: BridgeConfig =
            serde_json::from_str(r#"{"name": "worker", "stream_severity": "warn"}"#).unwrap();
        assert_eq!(config.name, "worker");
        assert_eq!(config.stream_severity, Severity::Warning);
        assert!(!config.redirect_stdio);
    }

    #[test]
    fn test_unknown_severity_is_rejected() {
        let result = serde_json::from_str::<BridgeConfig>(r#"{"stream_severity": "fatal"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_builder() {
        let config = BridgeConfig::new()
            .with_name("echo")
            .with_stream_severity(Severity::Info)
            .with_redirect_stdio(true);
        assert_eq!(config.name, "echo");
        assert_eq!(config.stream_severity, Severity::Info);
        assert!(config.redirect_stdio);
    }
}
