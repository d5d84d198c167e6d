//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod chat;
mod repl;
mod service;

pub use chat::FileChatConfig;
pub use repl::FileReplConfig;
pub use service::FileServiceConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat service connection
    pub service: FileServiceConfig,
    /// Widget labels and fixed texts
    pub chat: FileChatConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, returning a message per problem found.
    ///
    /// Problems are not fatal; the caller decides whether to warn or abort.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.service.timeout_seconds == Some(0) {
            issues.push(
                "service.timeout_seconds: 0 would fail every request; omit it to disable the timeout"
                    .to_string(),
            );
        }
        if self.service.endpoint.as_deref().is_some_and(|e| e.trim().is_empty()) {
            issues.push("service.endpoint: empty value, the protocol default will not be used".to_string());
        }
        if self.service.model.trim().is_empty() {
            issues.push("service.model: empty model name".to_string());
        }
        for (field, value) in [
            ("chat.send_label", &self.chat.send_label),
            ("chat.sending_label", &self.chat.sending_label),
            ("chat.error_message", &self.chat.error_message),
        ] {
            if value.trim().is_empty() {
                issues.push(format!("{}: empty value", field));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use localchat_domain::ServiceProtocol;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[service]
protocol = "ollama"
endpoint = "http://127.0.0.1:11434/api/generate"
model = "llama3.1:8b"
timeout_seconds = 30

[chat]
send_label = "Ask"
sending_label = "Thinking..."
error_message = "Sorry, I encountered an error. Please make sure Ollama is running."
greeting = "Hello! How can I help you today?"

[repl]
show_progress = false
history_file = "~/.local/share/localchat/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.service.protocol, ServiceProtocol::Ollama);
        assert_eq!(config.service.model, "llama3.1:8b");
        assert_eq!(config.service.timeout_seconds, Some(30));
        assert_eq!(config.chat.send_label, "Ask");
        assert!(config.chat.greeting.is_some());
        assert!(!config.repl.show_progress);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[chat]
greeting = "hi"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chat.greeting.as_deref(), Some("hi"));
        // Defaults should apply
        assert_eq!(config.service, FileServiceConfig::default());
        assert_eq!(config.chat.send_label, "Send");
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_validate_reports_problems() {
        let mut config = FileConfig::default();
        config.service.timeout_seconds = Some(0);
        config.chat.send_label = "  ".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues[0].starts_with("service.timeout_seconds"));
        assert!(issues[1].starts_with("chat.send_label"));
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }
}
