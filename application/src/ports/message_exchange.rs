//! Message exchange port
//!
//! Defines the one outbound request/response cycle with the chat service.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during an exchange.
///
/// The controller never shows these to the user; they are logged and
/// collapsed into a single generic reply.
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Service returned HTTP {status}")]
    Status { status: u16 },

    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("Timeout")]
    Timeout,
}

/// Capability that sends one user message to the chat service and returns
/// its reply text.
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait MessageExchange: Send + Sync {
    /// Send `message` and wait for the reply
    async fn exchange(&self, message: &str) -> Result<String, ExchangeError>;
}
