//! Wire protocol of the chat service

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which chat service the client talks to.
///
/// - **Relay** (default): a chat relay taking `{"message"}` and answering `{"response"}`
/// - **Ollama**: an Ollama server's non-streaming `/api/generate` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceProtocol {
    #[default]
    Relay,
    Ollama,
}

impl ServiceProtocol {
    /// Endpoint used when none is configured
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            ServiceProtocol::Relay => "http://localhost:8080/api/chat",
            ServiceProtocol::Ollama => "http://localhost:11434/api/generate",
        }
    }
}

impl fmt::Display for ServiceProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceProtocol::Relay => write!(f, "relay"),
            ServiceProtocol::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for ServiceProtocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relay" => Ok(ServiceProtocol::Relay),
            "ollama" => Ok(ServiceProtocol::Ollama),
            _ => Err(format!("Invalid ServiceProtocol: {}", s)),
        }
    }
}
