//! Ollama adapter
//!
//! Talks to an Ollama server's `/api/generate` directly, without a relay in
//! between. Streaming is disabled so the reply arrives as one JSON object.

use super::client::JsonEndpoint;
use super::error::Result;
use async_trait::async_trait;
use localchat_application::{ExchangeError, MessageExchange};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// Model used when none is configured
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2:3b";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// [`MessageExchange`] over Ollama's generate endpoint
pub struct OllamaExchange {
    endpoint: JsonEndpoint,
    model: String,
}

impl OllamaExchange {
    pub fn new(endpoint: &str, model: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = JsonEndpoint::new(endpoint, timeout)?;
        let model = model.into();
        info!("OllamaExchange targeting {} with model {}", endpoint.url(), model);
        Ok(Self { endpoint, model })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl MessageExchange for OllamaExchange {
    async fn exchange(&self, message: &str) -> std::result::Result<String, ExchangeError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt: message,
            stream: false,
        };
        let reply: GenerateResponse = self.endpoint.post_json(&request).await?;
        Ok(reply.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, method, path},
    };

    #[tokio::test]
    async fn test_sends_non_streaming_generate_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_json(json!({
                "model": "llama3.2:3b",
                "prompt": "Why is the sky blue?",
                "stream": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "model": "llama3.2:3b",
                "response": "Rayleigh scattering.",
                "done": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let ollama = OllamaExchange::new(
            &format!("{}/api/generate", server.uri()),
            DEFAULT_OLLAMA_MODEL,
            None,
        )
        .unwrap();
        let reply = ollama.exchange("Why is the sky blue?").await.unwrap();

        assert_eq!(reply, "Rayleigh scattering.");
    }

    #[tokio::test]
    async fn test_model_not_found_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({ "error": "model 'missing' not found" })),
            )
            .mount(&server)
            .await;

        let ollama =
            OllamaExchange::new(&format!("{}/api/generate", server.uri()), "missing", None)
                .unwrap();
        let err = ollama.exchange("hello").await.unwrap_err();

        assert!(matches!(err, ExchangeError::Status { status: 404 }));
        assert_eq!(ollama.model(), "missing");
    }
}
