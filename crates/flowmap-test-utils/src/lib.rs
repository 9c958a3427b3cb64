//! Testing utilities for the flowmap workspace
//!
//! Scripted summarizer doubles, deterministic merge configuration, and
//! setup helpers.

#![allow(missing_docs)]

use async_trait::async_trait;
use flowmap_core::SubmissionController;
use flowmap_graph::{GraphStore, LayoutConfig, MergeConfig, SummaryFragment};
use flowmap_summarize::{SummarizeError, Summarizer};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Summarizer double returning a fixed block, counting invocations.
#[derive(Debug)]
pub struct StaticSummarizer {
    block: String,
    calls: AtomicUsize,
}

impl StaticSummarizer {
    pub fn new(block: impl Into<String>) -> Self {
        Self {
            block: block.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `summarize` was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for StaticSummarizer {
    async fn summarize(&self, _long_text: &str) -> Result<String, SummarizeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.block.clone())
    }
}

/// Summarizer double that always fails, with or without service-supplied text.
#[derive(Debug)]
pub struct FailingSummarizer {
    message: Option<String>,
    calls: AtomicUsize,
}

impl FailingSummarizer {
    /// Fails with a collaborator-supplied error message (HTTP 500 shape).
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails with a bare status and no usable error body.
    pub fn bare() -> Self {
        Self {
            message: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(&self, _long_text: &str) -> Result<String, SummarizeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.message {
            Some(message) => Err(SummarizeError::Service {
                status: 500,
                message: message.clone(),
            }),
            None => Err(SummarizeError::Status { status: 500 }),
        }
    }
}

/// Summarizer double that parks until released, for in-flight tests.
#[derive(Debug)]
pub struct GatedSummarizer {
    block: String,
    gate: Notify,
}

impl GatedSummarizer {
    pub fn new(block: impl Into<String>) -> Self {
        Self {
            block: block.into(),
            gate: Notify::new(),
        }
    }

    /// Let one parked `summarize` call proceed.
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl Summarizer for GatedSummarizer {
    async fn summarize(&self, _long_text: &str) -> Result<String, SummarizeError> {
        self.gate.notified().await;
        Ok(self.block.clone())
    }
}

/// Arithmetic-friendly merge configuration for deterministic assertions.
pub fn test_merge_config() -> MergeConfig {
    MergeConfig::new()
        .with_layout(LayoutConfig {
            origin_x: 0.0,
            base_y: 0.0,
            row_spacing: 10.0,
        })
        .with_palette(vec![
            "#111111".to_string(),
            "#222222".to_string(),
            "#333333".to_string(),
        ])
}

pub fn fragments(lines: &[&str]) -> Vec<SummaryFragment> {
    lines.iter().map(|l| SummaryFragment::new(*l)).collect()
}

pub fn setup_store() -> Arc<GraphStore> {
    Arc::new(GraphStore::new(test_merge_config()))
}

pub fn setup_controller<S: Summarizer + 'static>(summarizer: Arc<S>) -> SubmissionController {
    SubmissionController::new(summarizer, setup_store())
}
