//! Renderer change-notification intake
//!
//! The rendering collaborator is the source of truth for what is currently
//! on screen; these deltas are the restricted channel through which its
//! user-interaction mutations reach the store. Unknown ids are ignored at
//! application time, not treated as errors.

use crate::types::{EdgeId, NodeId, Position};
use serde::{Deserialize, Serialize};

/// A node delta emitted by the rendering collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeChange {
    /// The user dragged a node to a new coordinate
    Position {
        /// Affected node
        id: NodeId,
        /// New coordinate
        position: Position,
    },
    /// The user toggled a node's selection
    Selected {
        /// Affected node
        id: NodeId,
        /// New selection state
        selected: bool,
    },
    /// The user dismissed a node on screen
    Removed {
        /// Affected node
        id: NodeId,
    },
}

/// An edge delta emitted by the rendering collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EdgeChange {
    /// The user toggled an edge's selection
    Selected {
        /// Affected edge
        id: EdgeId,
        /// New selection state
        selected: bool,
    },
    /// The user dismissed an edge on screen
    Removed {
        /// Affected edge
        id: EdgeId,
    },
}
