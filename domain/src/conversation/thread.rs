//! The append-only conversation thread

use super::entities::Message;
use serde::Serialize;

/// Ordered, append-only sequence of messages.
///
/// There is no API to edit or remove a message once pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return a reference to it as stored.
    pub fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::entities::Sender;

    #[test]
    fn test_push_preserves_order() {
        let mut conversation = Conversation::new();
        conversation.push(Message::user("Hi"));
        conversation.push(Message::bot("Hello!"));

        assert_eq!(
            conversation.messages(),
            &[Message::user("Hi"), Message::bot("Hello!")]
        );
        assert_eq!(conversation.last().map(|m| m.sender()), Some(Sender::Bot));
    }

    #[test]
    fn test_push_returns_stored_message() {
        let mut conversation = Conversation::new();
        let stored = conversation.push(Message::user("ping"));
        assert_eq!(stored.text(), "ping");
        assert_eq!(conversation.len(), 1);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut conversation = Conversation::new();
        conversation.push(Message::user("a"));
        let json = serde_json::to_string(&conversation).unwrap();
        assert_eq!(json, r#"[{"sender":"user","text":"a"}]"#);
    }
}
