//! The Submission Controller
//!
//! Owns [`RequestState`] and mediates one text-submission cycle between the
//! input surface, the summarization collaborator, and the graph store.

use crate::error::SubmitError;
use crate::fragments::split_block;
use crate::state::RequestState;
use flowmap_graph::{BatchReceipt, GraphStore};
use flowmap_summarize::Summarizer;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};

/// Mediates submission cycles.
///
/// Submissions are serialized: while one is in flight a new `submit` is
/// rejected up front. The graph store stays live for renderer gestures for
/// the whole duration of an in-flight submission; the controller never
/// holds a graph lock across the collaborator call.
pub struct SubmissionController {
    summarizer: Arc<dyn Summarizer>,
    graph: Arc<GraphStore>,
    state: watch::Sender<RequestState>,
    in_flight: Mutex<()>,
}

impl SubmissionController {
    /// Create a controller over a summarizer and a shared graph store
    #[must_use]
    pub fn new(summarizer: Arc<dyn Summarizer>, graph: Arc<GraphStore>) -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self {
            summarizer,
            graph,
            state,
            in_flight: Mutex::new(()),
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    /// Watch lifecycle transitions (for the embedding UI)
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// The shared graph store
    #[must_use]
    pub fn graph(&self) -> &Arc<GraphStore> {
        &self.graph
    }

    /// Run one submission cycle.
    ///
    /// Validates non-emptiness, invokes the summarizer with the raw
    /// (untrimmed) text, splits the returned block into fragments, and makes
    /// exactly one merge call, even for an empty fragment list (a defined
    /// no-op). Failed cycles make zero merge calls and leave the graph
    /// untouched.
    ///
    /// # State transitions
    /// - empty input -> `Failed` with the empty-input message, no network call
    /// - otherwise `Submitting`, then `Idle` on success or `Failed(message)`
    ///   on collaborator failure (collaborator-supplied text, or the generic
    ///   fallback)
    ///
    /// # Errors
    /// [`SubmitError::InFlight`] while a previous cycle is pending (no state
    /// transition); [`SubmitError::EmptyInput`] and
    /// [`SubmitError::Summarize`] mirror the `Failed` transitions above.
    pub async fn submit(&self, text: &str) -> Result<BatchReceipt, SubmitError> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            tracing::debug!("submission rejected: one already in flight");
            return Err(SubmitError::InFlight);
        };

        if text.trim().is_empty() {
            let err = SubmitError::EmptyInput;
            self.set_state(RequestState::Failed(err.user_message()));
            return Err(err);
        }

        self.set_state(RequestState::Submitting);
        tracing::info!(chars = text.len(), "submitting text for summarization");

        match self.summarizer.summarize(text).await {
            Ok(block) => {
                let fragments = split_block(&block);
                let receipt = self.graph.merge_batch(&fragments);
                self.set_state(RequestState::Idle);
                Ok(receipt)
            }
            Err(err) => {
                let err = SubmitError::from(err);
                tracing::warn!(error = %err, "summarization failed");
                self.set_state(RequestState::Failed(err.user_message()));
                Err(err)
            }
        }
    }

    fn set_state(&self, next: RequestState) {
        self.state.send_replace(next);
    }
}
