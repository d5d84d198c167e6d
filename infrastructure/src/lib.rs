//! Infrastructure layer for localchat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileChatConfig, FileConfig, FileReplConfig, FileServiceConfig,
};
pub use http::{
    error::{HttpError, Result},
    factory::build_exchange,
    ollama::OllamaExchange,
    relay::RelayExchange,
};
