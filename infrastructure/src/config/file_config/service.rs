//! Chat service configuration from TOML (`[service]` section)

use crate::http::ollama::DEFAULT_OLLAMA_MODEL;
use localchat_domain::ServiceProtocol;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw service configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Wire protocol spoken by the service
    pub protocol: ServiceProtocol,
    /// Endpoint URL; the protocol's default when unset
    pub endpoint: Option<String>,
    /// Model name (ollama protocol only)
    pub model: String,
    /// Request timeout in seconds; no timeout when unset
    pub timeout_seconds: Option<u64>,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            protocol: ServiceProtocol::default(),
            endpoint: None,
            model: DEFAULT_OLLAMA_MODEL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileServiceConfig {
    pub fn resolved_endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or_else(|| self.protocol.default_endpoint())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_follows_protocol_default() {
        let service = FileServiceConfig {
            protocol: ServiceProtocol::Ollama,
            ..Default::default()
        };
        assert_eq!(
            service.resolved_endpoint(),
            "http://localhost:11434/api/generate"
        );
        assert!(service.timeout().is_none());
    }

    #[test]
    fn test_explicit_endpoint_wins() {
        let service = FileServiceConfig {
            endpoint: Some("http://chat.lan:9000/api/chat".to_string()),
            timeout_seconds: Some(12),
            ..Default::default()
        };
        assert_eq!(service.resolved_endpoint(), "http://chat.lan:9000/api/chat");
        assert_eq!(service.timeout(), Some(Duration::from_secs(12)));
    }
}
