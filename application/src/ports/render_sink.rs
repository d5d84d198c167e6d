//! Render sink port
//!
//! The display surface the controller draws through: the message list,
//! the input field and the send control.

use localchat_domain::Message;

/// Display surface of the chat widget.
///
/// Methods take `&self` and cannot fail; implementations use interior
/// mutability where they keep state.
pub trait RenderSink: Send + Sync {
    /// Append a styled entry for `message` and scroll it into view
    fn append_message(&self, message: &Message);

    /// Empty the input field
    fn clear_input(&self);

    /// Enable or disable the send control and set its label
    fn set_awaiting(&self, awaiting: bool, send_label: &str);
}

/// No-op sink for headless use.
pub struct NoRenderSink;

impl RenderSink for NoRenderSink {
    fn append_message(&self, _message: &Message) {}
    fn clear_input(&self) {}
    fn set_awaiting(&self, _awaiting: bool, _send_label: &str) {}
}
