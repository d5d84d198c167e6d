//! Adapter selection

use super::error::Result;
use super::ollama::OllamaExchange;
use super::relay::RelayExchange;
use crate::config::FileServiceConfig;
use localchat_application::MessageExchange;
use localchat_domain::ServiceProtocol;
use std::sync::Arc;

/// Build the exchange adapter described by the `[service]` settings.
pub fn build_exchange(service: &FileServiceConfig) -> Result<Arc<dyn MessageExchange>> {
    let endpoint = service.resolved_endpoint();
    let timeout = service.timeout();

    let exchange: Arc<dyn MessageExchange> = match service.protocol {
        ServiceProtocol::Relay => Arc::new(RelayExchange::new(endpoint, timeout)?),
        ServiceProtocol::Ollama => {
            Arc::new(OllamaExchange::new(endpoint, service.model.clone(), timeout)?)
        }
    };
    Ok(exchange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::error::HttpError;

    #[test]
    fn test_builds_adapter_for_each_protocol() {
        for protocol in [ServiceProtocol::Relay, ServiceProtocol::Ollama] {
            let service = FileServiceConfig {
                protocol,
                ..Default::default()
            };
            assert!(build_exchange(&service).is_ok());
        }
    }

    #[test]
    fn test_invalid_endpoint_is_reported() {
        let service = FileServiceConfig {
            endpoint: Some("localhost:8080".to_string()),
            ..Default::default()
        };
        let err = build_exchange(&service).err().unwrap();
        assert!(matches!(err, HttpError::InvalidEndpoint { .. }));
    }
}
