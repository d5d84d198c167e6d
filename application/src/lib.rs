//! Application layer for localchat
//!
//! This crate contains the chat controller use case, port definitions, and
//! the behavior settings of the widget. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ChatBehavior;
pub use ports::{
    message_exchange::{ExchangeError, MessageExchange},
    render_sink::{NoRenderSink, RenderSink},
};
pub use use_cases::chat_controller::{ChatController, SubmitOutcome};
