//! Flowmap Graph Merge Engine
//!
//! Owns the authoritative node/edge collections and converts ordered summary
//! fragment batches into chained nodes, appending them to existing state
//! without disturbing prior nodes, edges, or user-made connections.
//!
//! # Ownership model
//!
//! [`GraphStore`] is the single writer. The rendering collaborator receives
//! read access through cloned [`GraphSnapshot`]s plus a narrow mutation
//! channel: position/selection/removal deltas ([`NodeChange`]/[`EdgeChange`])
//! and connect-gesture requests ([`GraphStore::connect_user_edge`]). It never
//! constructs or replaces the collections wholesale.
//!
//! # Quick Start
//!
//! ```rust
//! use flowmap_graph::{GraphStore, MergeConfig, SummaryFragment};
//!
//! let store = GraphStore::new(MergeConfig::default());
//! let batch = vec![
//!     SummaryFragment::new("First point"),
//!     SummaryFragment::new("Second point"),
//! ];
//! let receipt = store.merge_batch(&batch);
//! assert_eq!(receipt.nodes.len(), 2);
//! assert_eq!(receipt.edges.len(), 1);
//! ```

pub mod changes;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use changes::{EdgeChange, NodeChange};
pub use config::{LayoutConfig, MergeConfig};
pub use error::GraphError;
pub use store::{BatchReceipt, GraphSnapshot, GraphStore};
pub use types::{Edge, EdgeId, EdgeKind, Node, NodeId, NodeStyle, Position, SummaryFragment};
