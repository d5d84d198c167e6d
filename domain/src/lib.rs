//! Domain layer for localchat
//!
//! This crate contains the conversation model and the input semantics of the
//! chat widget. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! - **Message**: one turn of the conversation, sent by the user or the bot
//! - **Conversation**: the append-only sequence of messages
//! - **Submission state**: `Idle` or `AwaitingReply` while an exchange is outstanding
//! - **Key classification**: Enter submits, Shift+Enter inserts a newline

pub mod config;
pub mod conversation;
pub mod interaction;

// Re-export commonly used types
pub use config::ServiceProtocol;
pub use conversation::{
    entities::{Message, Sender},
    thread::Conversation,
};
pub use interaction::{
    input::{InputEvent, Key, KeyAction, KeyPress},
    state::SubmissionState,
};
