//! Chat behavior — the texts the controller renders.

/// Default label of the send control when idle
pub const DEFAULT_SEND_LABEL: &str = "Send";

/// Default label of the send control while awaiting a reply
pub const DEFAULT_SENDING_LABEL: &str = "Sending...";

/// Default reply shown when an exchange fails
pub const DEFAULT_ERROR_MESSAGE: &str =
    "Sorry, I encountered an error. Please make sure the chat service is running.";

/// Labels and fixed texts used by [`ChatController`](crate::ChatController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatBehavior {
    /// Send control label while idle
    pub send_label: String,
    /// Send control label while awaiting a reply
    pub sending_label: String,
    /// Bot reply appended when an exchange fails
    pub error_message: String,
    /// Bot message appended by `greet()`, if any
    pub greeting: Option<String>,
}

impl Default for ChatBehavior {
    fn default() -> Self {
        Self {
            send_label: DEFAULT_SEND_LABEL.to_string(),
            sending_label: DEFAULT_SENDING_LABEL.to_string(),
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            greeting: None,
        }
    }
}

impl ChatBehavior {
    // ==================== Builder Methods ====================

    pub fn with_send_label(mut self, label: impl Into<String>) -> Self {
        self.send_label = label.into();
        self
    }

    pub fn with_sending_label(mut self, label: impl Into<String>) -> Self {
        self.sending_label = label.into();
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    pub fn with_greeting(mut self, greeting: Option<String>) -> Self {
        self.greeting = greeting;
        self
    }

    /// Label for the send control in the given state
    pub fn label_for(&self, awaiting: bool) -> &str {
        if awaiting {
            &self.sending_label
        } else {
            &self.send_label
        }
    }
}
