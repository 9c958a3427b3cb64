//! Error types for the summarization boundary

/// Failures of one summarization call
#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    /// Non-2xx response carrying a collaborator-supplied error body
    #[error("summarization service error ({status}): {message}")]
    Service {
        /// HTTP status code
        status: u16,
        /// Collaborator-supplied, user-presentable message
        message: String,
    },

    /// Non-2xx response without a usable error body
    #[error("summarization service returned status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Connection, timeout, or body transfer failure
    #[error("summarization transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx response whose body did not decode to the summary contract
    #[error("malformed summary response: {detail}")]
    Malformed {
        /// Decoder diagnostic
        detail: String,
    },
}

impl SummarizeError {
    /// The collaborator-supplied message, when one exists.
    ///
    /// Callers fall back to a generic user-facing message otherwise.
    #[inline]
    #[must_use]
    pub fn service_message(&self) -> Option<&str> {
        match self {
            Self::Service { message, .. } => Some(message),
            _ => None,
        }
    }
}
