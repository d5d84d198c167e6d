//! Chat relay adapter
//!
//! Speaks the relay protocol: POST `{"message": ...}`, reply
//! `{"response": ...}`.

use super::client::JsonEndpoint;
use super::error::Result;
use async_trait::async_trait;
use localchat_application::{ExchangeError, MessageExchange};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct RelayResponse {
    response: String,
}

/// [`MessageExchange`] over a chat relay endpoint
pub struct RelayExchange {
    endpoint: JsonEndpoint,
}

impl RelayExchange {
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = JsonEndpoint::new(endpoint, timeout)?;
        info!("RelayExchange targeting {}", endpoint.url());
        Ok(Self { endpoint })
    }
}

#[async_trait]
impl MessageExchange for RelayExchange {
    async fn exchange(&self, message: &str) -> std::result::Result<String, ExchangeError> {
        let reply: RelayResponse = self.endpoint.post_json(&RelayRequest { message }).await?;
        Ok(reply.response)
    }
}
