//! Error types for the graph store

use crate::types::NodeId;

/// Errors from the restricted mutation channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A connect request referenced a node id absent from the store.
    ///
    /// The rendering collaborator should not produce such requests under
    /// normal operation; callers treat this as a defensive no-op rather
    /// than surfacing a message.
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),
}
