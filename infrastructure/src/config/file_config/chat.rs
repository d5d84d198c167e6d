//! Widget texts from TOML (`[chat]` section)

use localchat_application::ChatBehavior;
use localchat_application::config::chat_behavior::{
    DEFAULT_ERROR_MESSAGE, DEFAULT_SEND_LABEL, DEFAULT_SENDING_LABEL,
};
use serde::{Deserialize, Serialize};

/// Raw chat configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Send control label while idle
    pub send_label: String,
    /// Send control label while awaiting a reply
    pub sending_label: String,
    /// Reply shown when an exchange fails
    pub error_message: String,
    /// Bot message shown at startup
    pub greeting: Option<String>,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            send_label: DEFAULT_SEND_LABEL.to_string(),
            sending_label: DEFAULT_SENDING_LABEL.to_string(),
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            greeting: None,
        }
    }
}

impl FileChatConfig {
    /// Convert to the controller's behavior settings
    pub fn to_behavior(&self) -> ChatBehavior {
        ChatBehavior::default()
            .with_send_label(&self.send_label)
            .with_sending_label(&self.sending_label)
            .with_error_message(&self.error_message)
            .with_greeting(self.greeting.clone())
    }
}
