//! Flowmap Core (flowmap-core): the Submission Controller
//!
//! Mediates one text-submission cycle: validate input, invoke the
//! summarization collaborator, split the returned block into ordered
//! fragments, and hand the batch to the graph merge engine. The embedding
//! UI observes two independent pieces of state: [`RequestState`] through
//! the controller's watch channel, and graph state through the store's
//! snapshot/revision surface.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use flowmap_core::prelude::*;
//! use std::sync::Arc;
//!
//! let graph = Arc::new(GraphStore::new(MergeConfig::default()));
//! let summarizer = Arc::new(HttpSummarizer::new("http://localhost:8000"));
//! let controller = SubmissionController::new(summarizer, Arc::clone(&graph));
//!
//! let receipt = controller.submit("some long text").await?;
//! assert_eq!(controller.state(), RequestState::Idle);
//! ```

pub mod controller;
pub mod error;
pub mod fragments;
pub mod state;

pub use controller::SubmissionController;
pub use error::SubmitError;
pub use state::{RequestState, EMPTY_INPUT_MESSAGE, GENERIC_FAILURE_MESSAGE};

/// Re-exports for embedders wiring the full stack
pub mod prelude {
    pub use crate::controller::SubmissionController;
    pub use crate::error::SubmitError;
    pub use crate::state::RequestState;
    pub use flowmap_graph::{
        BatchReceipt, EdgeChange, GraphSnapshot, GraphStore, MergeConfig, NodeChange,
    };
    pub use flowmap_summarize::{HttpSummarizer, SummarizeError, Summarizer};
}
