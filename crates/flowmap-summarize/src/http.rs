//! HTTP adapter for the summarization wire contract
//!
//! Request: `POST {base_url}/generate-summary` with JSON body
//! `{"longText": <string>}`. Success is a 2xx with `{"summary": <string>}`;
//! failure is a non-2xx optionally carrying `{"error": <string>}`.

use crate::{SummarizeError, Summarizer};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct SummaryRequest<'a> {
    #[serde(rename = "longText")]
    long_text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    summary: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// `reqwest`-backed client for the summarization service
#[derive(Debug, Clone)]
pub struct HttpSummarizer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSummarizer {
    /// Client against `{base_url}/generate-summary`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Client reusing an existing connection pool
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        let endpoint = format!("{}/generate-summary", base.trim_end_matches('/'));
        Self { client, endpoint }
    }

    /// Full endpoint URL this client posts to
    #[inline]
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(&self, long_text: &str) -> Result<String, SummarizeError> {
        tracing::debug!(endpoint = %self.endpoint, chars = long_text.len(), "requesting summary");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&SummaryRequest { long_text })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body: SummaryResponse =
                response
                    .json()
                    .await
                    .map_err(|err| SummarizeError::Malformed {
                        detail: err.to_string(),
                    })?;
            Ok(body.summary)
        } else {
            let status = status.as_u16();
            // A missing or undecodable error body degrades to the bare status.
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            match body.error {
                Some(message) => Err(SummarizeError::Service { status, message }),
                None => Err(SummarizeError::Status { status }),
            }
        }
    }
}
