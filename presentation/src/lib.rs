//! Presentation layer for localchat
//!
//! This crate contains the CLI definition, the terminal render sink,
//! transcript output and the interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use chat::{ChatRepl, TerminalSurface};
pub use cli::commands::Cli;
pub use output::transcript::TranscriptFormatter;
