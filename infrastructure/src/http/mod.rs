//! HTTP adapters for the [`MessageExchange`](localchat_application::MessageExchange) port.
//!
//! - [`relay::RelayExchange`] — `{"message"}` → `{"response"}` chat relay
//! - [`ollama::OllamaExchange`] — Ollama's non-streaming `/api/generate`
//! - [`factory::build_exchange`] — picks an adapter from [`ServiceProtocol`](localchat_domain::ServiceProtocol)

mod client;
pub mod error;
pub mod factory;
pub mod ollama;
pub mod relay;
