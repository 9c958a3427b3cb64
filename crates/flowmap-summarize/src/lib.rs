//! Summarization collaborator boundary
//!
//! The summarizer is an opaque remote function: text in, one newline-delimited
//! block of summary fragments out. This crate pins that boundary as the
//! [`Summarizer`] trait and ships the HTTP adapter speaking the wire contract
//! (`POST /generate-summary`, `{"longText"}` → `{"summary"}`).
//!
//! Everything behind the trait is replaceable; tests script it with in-memory
//! doubles and embedders may swap transports without touching the core.

pub mod error;
pub mod http;

pub use error::SummarizeError;
pub use http::HttpSummarizer;

use async_trait::async_trait;

/// An opaque remote summarization function.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `long_text` into a newline-delimited block of fragments.
    ///
    /// Blank lines in the returned block are permitted; the caller discards
    /// them when splitting into fragments.
    ///
    /// # Errors
    /// Returns [`SummarizeError`] when the collaborator cannot produce a
    /// summary; [`SummarizeError::service_message`] carries the
    /// collaborator-supplied text when one exists.
    async fn summarize(&self, long_text: &str) -> Result<String, SummarizeError>;
}
