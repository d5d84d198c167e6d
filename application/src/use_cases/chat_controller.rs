//! Chat controller use case.
//!
//! Owns the input text, the conversation and the submission state of one
//! chat widget. Talks to the chat service through [`MessageExchange`] and
//! draws through [`RenderSink`].
//!
//! A submission:
//! 1. Trim the input; ignore it if nothing is left
//! 2. Append the user message, clear the input, enter `AwaitingReply`
//! 3. Exchange the trimmed text with the chat service
//! 4. Append the reply, or the fixed error text if the exchange failed
//! 5. Return to `Idle`

use crate::config::ChatBehavior;
use crate::ports::message_exchange::MessageExchange;
use crate::ports::render_sink::RenderSink;
use localchat_domain::{Conversation, InputEvent, KeyAction, Message, SubmissionState};
use std::sync::Arc;
use tracing::{debug, error, info};

/// What a call to [`ChatController::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing happened
    Ignored,
    /// The service replied and the reply was appended
    Replied,
    /// The exchange failed and the error text was appended
    Failed,
}

/// Controller of one chat widget.
///
/// Constructed explicitly with all of its collaborators; there is no shared
/// instance.
pub struct ChatController {
    exchange: Arc<dyn MessageExchange>,
    sink: Arc<dyn RenderSink>,
    behavior: ChatBehavior,
    conversation: Conversation,
    input: String,
    state: SubmissionState,
}

impl ChatController {
    pub fn new(exchange: Arc<dyn MessageExchange>, sink: Arc<dyn RenderSink>) -> Self {
        Self {
            exchange,
            sink,
            behavior: ChatBehavior::default(),
            conversation: Conversation::new(),
            input: String::new(),
            state: SubmissionState::Idle,
        }
    }

    /// Replace the default labels and texts.
    pub fn with_behavior(mut self, behavior: ChatBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn behavior(&self) -> &ChatBehavior {
        &self.behavior
    }

    /// Current text of the input field
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input text with what the user typed
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Append the configured greeting as a bot message, if there is one.
    pub fn greet(&mut self) {
        if let Some(greeting) = self.behavior.greeting.clone() {
            self.append(Message::bot(greeting));
        }
    }

    /// Apply one input event.
    ///
    /// Returns the submission outcome when the event triggered a submission.
    pub async fn handle_event(&mut self, event: InputEvent) -> Option<SubmitOutcome> {
        match event {
            InputEvent::SendActivated => Some(self.submit().await),
            InputEvent::Key(press) => match press.action() {
                KeyAction::Submit => Some(self.submit().await),
                KeyAction::InsertNewline => {
                    self.input.push('\n');
                    None
                }
                KeyAction::Insert(c) => {
                    self.input.push(c);
                    None
                }
            },
        }
    }

    /// Submit the current input to the chat service.
    ///
    /// Exchange failures are absorbed here: the user sees the fixed error
    /// text and the cause only goes to the log.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let message = self.input.trim().to_string();
        if message.is_empty() {
            debug!("Ignoring blank submission");
            return SubmitOutcome::Ignored;
        }

        self.append(Message::user(message.clone()));
        self.input.clear();
        self.sink.clear_input();
        self.set_state(SubmissionState::AwaitingReply);

        info!("Sending message ({} chars)", message.chars().count());

        let outcome = match self.exchange.exchange(&message).await {
            Ok(reply) => {
                debug!("Received reply ({} chars)", reply.chars().count());
                self.append(Message::bot(reply));
                SubmitOutcome::Replied
            }
            Err(e) => {
                error!("Chat exchange failed: {}", e);
                self.append(Message::bot(self.behavior.error_message.clone()));
                SubmitOutcome::Failed
            }
        };

        self.set_state(SubmissionState::Idle);
        outcome
    }

    fn append(&mut self, message: Message) {
        let stored = self.conversation.push(message);
        self.sink.append_message(stored);
    }

    fn set_state(&mut self, state: SubmissionState) {
        self.state = state;
        let awaiting = state.is_awaiting();
        self.sink
            .set_awaiting(awaiting, self.behavior.label_for(awaiting));
    }
}
