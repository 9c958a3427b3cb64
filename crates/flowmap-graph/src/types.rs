//! Core types for the graph state
//!
//! Defines the fundamental entities the merge engine owns:
//! - Node and edge identifiers
//! - Summary fragments (the merge input)
//! - Nodes, edges, and their visual styling

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique node identifier (ULID for sortability)
///
/// Freshly minted for every node; never reused or recycled, including the
/// ids of nodes the rendering collaborator later removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub Ulid);

impl NodeId {
    /// Generate a fresh node ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique edge identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub Ulid);

impl EdgeId {
    /// Generate a fresh edge ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for EdgeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One non-empty line of summarized text; the label of one future node.
///
/// Ordering among the fragments of a single submission is significant and
/// must be preserved through the merge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryFragment(String);

impl SummaryFragment {
    /// Wrap one line of summary text
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The fragment text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SummaryFragment {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SummaryFragment {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl std::fmt::Display for SummaryFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 2D coordinate in diagram space, mutable by user drag
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Position {
    /// Create a position
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Deterministic visual styling assigned at node creation.
///
/// `background` cycles through the configured palette by batch ordinal; the
/// remaining fields are fixed constants applied uniformly. Serialized field
/// names follow the rendering collaborator's style vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStyle {
    /// Background fill, one of the configured palette entries
    #[serde(rename = "backgroundColor")]
    pub background: String,
    /// Label text color
    pub color: String,
    /// Border shorthand (width, style, color)
    pub border: String,
    /// Corner rounding
    #[serde(rename = "borderRadius")]
    pub border_radius: String,
    /// Inner padding
    pub padding: String,
}

/// Edge provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Auto-created, linking consecutive nodes within one summary batch
    Chain,
    /// Created by a direct-manipulation connect gesture
    User,
}

/// One summary point (or user-created point) in the diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Stable identity, unique across the lifetime of the graph
    pub id: NodeId,
    /// Current coordinate; deterministic at creation, then renderer-owned
    pub position: Position,
    /// Fragment text (or caller-assigned text)
    pub label: String,
    /// Deterministic creation-time styling
    pub style: NodeStyle,
    /// Renderer-owned selection state
    #[serde(default)]
    pub selected: bool,
}

/// Directed connection between two node ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Stable identity, unique across the lifetime of the graph
    pub id: EdgeId,
    /// Source node; present in the graph at edge-creation time
    pub source: NodeId,
    /// Target node; present in the graph at edge-creation time
    pub target: NodeId,
    /// Chain or user provenance
    pub kind: EdgeKind,
    /// Renderer-owned selection state
    #[serde(default)]
    pub selected: bool,
}
