//! Conversation transcript formatting

use colored::Colorize;
use localchat_domain::{Conversation, Message, Sender};

/// Formats messages and whole conversations for the terminal
pub struct TranscriptFormatter;

impl TranscriptFormatter {
    /// One styled entry: a sender tag followed by the text.
    ///
    /// Continuation lines of multi-line text are indented under the first.
    pub fn entry(message: &Message) -> String {
        let tag = match message.sender() {
            Sender::User => format!("{:>4} │", "you").cyan().bold(),
            Sender::Bot => format!("{:>4} │", "bot").green().bold(),
        };
        let indent = format!("{:>4} │", "").dimmed();

        let mut output = String::new();
        for (i, line) in message.text().lines().enumerate() {
            if i > 0 {
                output.push('\n');
                output.push_str(&format!("{} {}", indent, line));
            } else {
                output.push_str(&format!("{} {}", tag, line));
            }
        }
        if output.is_empty() {
            output.push_str(&tag.to_string());
        }
        output
    }

    /// Every entry of the conversation, separated by blank lines
    pub fn plain(conversation: &Conversation) -> String {
        conversation
            .iter()
            .map(Self::entry)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// The conversation as a JSON array of `{sender, text}` objects
    pub fn json(conversation: &Conversation) -> String {
        serde_json::to_string_pretty(conversation).unwrap_or_else(|_| "[]".to_string())
    }
}
