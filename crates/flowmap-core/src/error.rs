//! Error types for the submission cycle

use crate::state::{EMPTY_INPUT_MESSAGE, GENERIC_FAILURE_MESSAGE};
use flowmap_summarize::SummarizeError;

/// Failures of one submission cycle
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Input was empty after trimming; no network call was made
    #[error("empty input")]
    EmptyInput,

    /// A previous submission is still in flight (serialized policy)
    #[error("a submission is already in flight")]
    InFlight,

    /// The summarization collaborator failed; no graph mutation occurred
    #[error("summarization failed: {0}")]
    Summarize(#[from] SummarizeError),
}

impl SubmitError {
    /// The single human-readable message for this failure.
    ///
    /// Collaborator-supplied text wins when present; otherwise the generic
    /// fallback applies.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput => EMPTY_INPUT_MESSAGE.to_string(),
            Self::InFlight => self.to_string(),
            Self::Summarize(err) => err
                .service_message()
                .map_or_else(|| GENERIC_FAILURE_MESSAGE.to_string(), str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_message() {
        assert_eq!(SubmitError::EmptyInput.user_message(), EMPTY_INPUT_MESSAGE);
    }

    #[test]
    fn collaborator_message_wins() {
        let err = SubmitError::Summarize(SummarizeError::Service {
            status: 500,
            message: "rate limited".to_string(),
        });
        assert_eq!(err.user_message(), "rate limited");
    }

    #[test]
    fn generic_fallback_without_collaborator_message() {
        let err = SubmitError::Summarize(SummarizeError::Status { status: 500 });
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }
}
