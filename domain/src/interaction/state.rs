//! Submission state of the widget

use std::fmt;

/// Whether an exchange is outstanding.
///
/// `Idle → AwaitingReply` on a valid submission, `AwaitingReply → Idle`
/// when the exchange settles, whatever its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    AwaitingReply,
}

impl SubmissionState {
    pub fn is_awaiting(&self) -> bool {
        matches!(self, SubmissionState::AwaitingReply)
    }

    /// Whether the send affordance is enabled in this state
    pub fn can_send(&self) -> bool {
        !self.is_awaiting()
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionState::Idle => write!(f, "idle"),
            SubmissionState::AwaitingReply => write!(f, "awaiting-reply"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
        assert!(SubmissionState::default().can_send());
    }

    #[test]
    fn test_awaiting_disables_send() {
        assert!(SubmissionState::AwaitingReply.is_awaiting());
        assert!(!SubmissionState::AwaitingReply.can_send());
        assert_eq!(SubmissionState::AwaitingReply.to_string(), "awaiting-reply");
    }
}
