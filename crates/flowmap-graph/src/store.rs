//! Authoritative graph state and the additive merge path
//!
//! `GraphStore` is the exclusive owner of the node/edge collections. Every
//! operation is one serialized critical section over a `parking_lot` lock;
//! nothing is held across an await point, so renderer gestures stay live
//! while a submission is in flight upstream.

use crate::changes::{EdgeChange, NodeChange};
use crate::config::MergeConfig;
use crate::error::GraphError;
use crate::types::{Edge, EdgeId, EdgeKind, Node, NodeId, Position, SummaryFragment};
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::Serialize;
use tokio::sync::watch;

/// Ids minted by one [`GraphStore::merge_batch`] call, in creation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReceipt {
    /// New node ids, one per fragment, in fragment order
    pub nodes: Vec<NodeId>,
    /// New chain-edge ids, linking consecutive fragments, in chain order
    pub edges: Vec<EdgeId>,
}

/// Read-only copy of the graph handed to the rendering collaborator
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphSnapshot {
    /// Nodes in collection order (prior entries first, later batches appended)
    pub nodes: Vec<Node>,
    /// Edges in collection order
    pub edges: Vec<Edge>,
}

#[derive(Debug, Default)]
struct GraphInner {
    nodes: IndexMap<NodeId, Node>,
    edges: IndexMap<EdgeId, Edge>,
}

/// Exclusive owner of the authoritative node/edge collections.
///
/// The store is a monotonic log of additive operations (`merge_batch`,
/// `connect_user_edge`) plus the renderer's sanctioned deltas
/// (`apply_node_changes`/`apply_edge_changes`); it never removes nodes or
/// edges on its own initiative and has no rollback.
///
/// A revision counter is published through a watch channel and bumped on
/// every mutation so observers can schedule redraws.
#[derive(Debug)]
pub struct GraphStore {
    config: MergeConfig,
    inner: RwLock<GraphInner>,
    revision: watch::Sender<u64>,
}

impl GraphStore {
    /// Create an empty store with the given configuration
    #[must_use]
    pub fn new(config: MergeConfig) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            config,
            inner: RwLock::new(GraphInner::default()),
            revision,
        }
    }

    /// The injected merge configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Current revision; bumped on every mutation
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Watch revision bumps (for renderer redraw scheduling)
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Convert one ordered fragment batch into nodes and chain edges and
    /// append them to the graph.
    ///
    /// The fragment at ordinal `i` becomes a node at the configured stacked
    /// position with the configured cyclic palette style; consecutive nodes
    /// are linked by chain edges in fragment order. Prior entries keep their
    /// collection positions; new entries are appended at the end. An empty
    /// batch is a defined no-op.
    pub fn merge_batch(&self, fragments: &[SummaryFragment]) -> BatchReceipt {
        if fragments.is_empty() {
            tracing::debug!("empty summary batch; nothing to merge");
            return BatchReceipt::default();
        }

        let new_nodes: Vec<Node> = fragments
            .iter()
            .enumerate()
            .map(|(ordinal, fragment)| Node {
                id: NodeId::new(),
                position: self.config.layout.position_for(ordinal),
                label: fragment.as_str().to_string(),
                style: self.config.style_for(ordinal),
                selected: false,
            })
            .collect();

        let new_edges: Vec<Edge> = new_nodes
            .windows(2)
            .map(|pair| Edge {
                id: EdgeId::new(),
                source: pair[0].id,
                target: pair[1].id,
                kind: EdgeKind::Chain,
                selected: false,
            })
            .collect();

        let receipt = BatchReceipt {
            nodes: new_nodes.iter().map(|n| n.id).collect(),
            edges: new_edges.iter().map(|e| e.id).collect(),
        };

        {
            let mut g = self.inner.write();
            for node in new_nodes {
                g.nodes.insert(node.id, node);
            }
            for edge in new_edges {
                g.edges.insert(edge.id, edge);
            }
        }
        self.bump();

        tracing::info!(
            nodes = receipt.nodes.len(),
            edges = receipt.edges.len(),
            "merged summary batch"
        );
        receipt
    }

    /// Record a user-provenance edge from a manual connect gesture.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when either endpoint is absent;
    /// no edge is created and no other state changes. Callers treat this as
    /// a defensive no-op.
    pub fn connect_user_edge(&self, source: NodeId, target: NodeId) -> Result<EdgeId, GraphError> {
        let id = {
            let mut g = self.inner.write();
            for endpoint in [source, target] {
                if !g.nodes.contains_key(&endpoint) {
                    tracing::warn!(node = %endpoint, "connect gesture for unknown node ignored");
                    return Err(GraphError::UnknownNode(endpoint));
                }
            }
            let edge = Edge {
                id: EdgeId::new(),
                source,
                target,
                kind: EdgeKind::User,
                selected: false,
            };
            let id = edge.id;
            g.edges.insert(id, edge);
            id
        };
        self.bump();

        tracing::debug!(edge = %id, %source, %target, "recorded user edge");
        Ok(id)
    }

    /// Apply a batch of renderer node deltas by id.
    ///
    /// Unknown ids are ignored. Removal preserves the order of the surviving
    /// entries and does not cascade to incident edges; the renderer emits its
    /// own edge-removal deltas.
    pub fn apply_node_changes(&self, changes: &[NodeChange]) {
        if changes.is_empty() {
            return;
        }

        let mut touched = false;
        {
            let mut g = self.inner.write();
            for change in changes {
                match change {
                    NodeChange::Position { id, position } => {
                        if let Some(node) = g.nodes.get_mut(id) {
                            node.position = *position;
                            touched = true;
                        }
                    }
                    NodeChange::Selected { id, selected } => {
                        if let Some(node) = g.nodes.get_mut(id) {
                            node.selected = *selected;
                            touched = true;
                        }
                    }
                    NodeChange::Removed { id } => {
                        if g.nodes.shift_remove(id).is_some() {
                            touched = true;
                        }
                    }
                }
            }
        }
        if touched {
            self.bump();
        }
    }

    /// Apply a single drag delta; unknown ids are ignored.
    ///
    /// Convenience wrapper over [`Self::apply_node_changes`].
    pub fn apply_node_position_change(&self, id: NodeId, position: Position) {
        self.apply_node_changes(&[NodeChange::Position { id, position }]);
    }

    /// Apply a batch of renderer edge deltas by id; unknown ids are ignored
    pub fn apply_edge_changes(&self, changes: &[EdgeChange]) {
        if changes.is_empty() {
            return;
        }

        let mut touched = false;
        {
            let mut g = self.inner.write();
            for change in changes {
                match change {
                    EdgeChange::Selected { id, selected } => {
                        if let Some(edge) = g.edges.get_mut(id) {
                            edge.selected = *selected;
                            touched = true;
                        }
                    }
                    EdgeChange::Removed { id } => {
                        if g.edges.shift_remove(id).is_some() {
                            touched = true;
                        }
                    }
                }
            }
        }
        if touched {
            self.bump();
        }
    }

    /// Cloned copy of both collections in collection order
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        let g = self.inner.read();
        GraphSnapshot {
            nodes: g.nodes.values().cloned().collect(),
            edges: g.edges.values().cloned().collect(),
        }
    }

    /// Cloned copy of one node, if present
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<Node> {
        self.inner.read().nodes.get(&id).cloned()
    }

    /// Cloned copy of one edge, if present
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<Edge> {
        self.inner.read().edges.get(&id).cloned()
    }

    /// Number of nodes currently in the graph
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.inner.read().nodes.len()
    }

    /// Number of edges currently in the graph
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.inner.read().edges.len()
    }

    /// Whether the node id is currently present
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.inner.read().nodes.contains_key(&id)
    }

    /// Whether the edge id is currently present
    #[must_use]
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.inner.read().edges.contains_key(&id)
    }

    fn bump(&self) {
        self.revision.send_modify(|r| *r = r.wrapping_add(1));
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new(MergeConfig::default())
    }
}
