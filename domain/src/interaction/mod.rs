//! Interaction domain module — how the user drives the widget.
//!
//! | Concept | Description |
//! |---------|-------------|
//! | [`SubmissionState`](state::SubmissionState) | `Idle` or `AwaitingReply` |
//! | [`KeyPress`](input::KeyPress) | A keystroke on the input field |
//! | [`KeyAction`](input::KeyAction) | What a keystroke means to the widget |
//! | [`InputEvent`](input::InputEvent) | Anything the user can do to the widget |
//!
//! # Examples
//!
//! ```
//! use localchat_domain::interaction::input::{KeyAction, KeyPress};
//!
//! assert_eq!(KeyPress::enter().action(), KeyAction::Submit);
//! assert_eq!(KeyPress::shift_enter().action(), KeyAction::InsertNewline);
//! ```

pub mod input;
pub mod state;
