//! Submission lifecycle state

/// Message shown when the user submits input that is empty after trimming.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text";

/// Fallback message when the collaborator fails without usable error text.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate summary";

/// Externally visible submission lifecycle status.
///
/// Owned by the controller; the embedding UI renders it (error text,
/// enabled/disabled submit affordance). `Failed` carries the single
/// user-visible message of the last failed cycle; each new failure
/// replaces it and messages never accumulate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// No submission in progress
    #[default]
    Idle,
    /// Waiting on the summarization collaborator
    Submitting,
    /// The last cycle failed with this message
    Failed(String),
}

impl RequestState {
    /// Whether a submission is currently in flight
    #[inline]
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// The user-visible message of the last failed cycle, if any
    #[inline]
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
