//! Conversation domain.
//!
//! - [`entities::Message`] — a single turn, tagged by [`entities::Sender`]
//! - [`thread::Conversation`] — the append-only message sequence

pub mod entities;
pub mod thread;
