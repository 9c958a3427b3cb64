use flowmap_graph::{
    EdgeId, GraphStore, LayoutConfig, MergeConfig, NodeChange, NodeId, Position, SummaryFragment,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn fragments(lines: &[&str]) -> Vec<SummaryFragment> {
    lines.iter().map(|l| SummaryFragment::new(*l)).collect()
}

fn test_config() -> MergeConfig {
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

#[test]
fn empty_batch_leaves_collections_unchanged() {
    let store = GraphStore::new(test_config());
    store.merge_batch(&fragments(&["a", "b"]));
    let before = store.snapshot();

    let receipt = store.merge_batch(&[]);

    assert!(receipt.nodes.is_empty());
    assert!(receipt.edges.is_empty());
    assert_eq!(store.snapshot(), before);
}

#[test]
fn monotonic_append_across_batches() {
    let store = GraphStore::new(test_config());
    let first = store.merge_batch(&fragments(&["a", "b"]));
    let first_nodes: Vec<_> = store.snapshot().nodes;

    let second = store.merge_batch(&fragments(&["c", "d", "e"]));

    let snapshot = store.snapshot();
    assert_eq!(snapshot.nodes.len(), 5);
    assert_eq!(snapshot.edges.len(), 3);

    // Prior entries keep their collection positions and are unmutated.
    assert_eq!(&snapshot.nodes[..2], &first_nodes[..]);
    // New entries are appended at the end, in fragment order.
    assert_eq!(snapshot.nodes[2].id, second.nodes[0]);
    assert_eq!(snapshot.nodes[4].id, second.nodes[2]);
    for id in &first.nodes {
        assert!(store.contains_node(*id));
    }
    for id in &first.edges {
        assert!(store.contains_edge(*id));
    }
}

#[test]
fn batches_of_two_then_three_keep_first_batch_intact() {
    // Scenario D: sizes 2 and 3 completing in issue order.
    let store = GraphStore::new(test_config());
    let first = store.merge_batch(&fragments(&["one", "two"]));
    let original: Vec<_> = first
        .nodes
        .iter()
        .map(|id| store.node(*id).unwrap())
        .collect();

    store.merge_batch(&fragments(&["three", "four", "five"]));

    assert_eq!(store.node_count(), 5);
    for (id, before) in first.nodes.iter().zip(&original) {
        let after = store.node(*id).unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.position, before.position);
        assert_eq!(after.label, before.label);
    }
}

#[test]
fn color_assignment_ignores_prior_batches() {
    let config = test_config();
    let palette = config.palette.clone();
    let store = GraphStore::new(config);

    // Seed the store so global node count is far from zero.
    store.merge_batch(&fragments(&["x", "y", "z", "w"]));

    let receipt = store.merge_batch(&fragments(&["a", "b", "c", "d", "e"]));
    for (ordinal, id) in receipt.nodes.iter().enumerate() {
        let node = store.node(*id).unwrap();
        assert_eq!(node.style.background, palette[ordinal % palette.len()]);
    }
}

#[test]
fn user_edges_survive_later_merges() {
    let store = GraphStore::new(test_config());
    let first = store.merge_batch(&fragments(&["a", "b"]));
    let user_edge = store
        .connect_user_edge(first.nodes[1], first.nodes[0])
        .unwrap();

    store.merge_batch(&fragments(&["c", "d"]));

    let edge = store.edge(user_edge).unwrap();
    assert_eq!(edge.source, first.nodes[1]);
    assert_eq!(edge.target, first.nodes[0]);
}

#[test]
fn renderer_moves_survive_later_merges() {
    // A drag applied to a pre-existing node must not be lost by a merge.
    let store = GraphStore::new(test_config());
    let first = store.merge_batch(&fragments(&["a"]));
    let moved = Position::new(42.0, -7.0);
    store.apply_node_changes(&[NodeChange::Position {
        id: first.nodes[0],
        position: moved,
    }]);

    store.merge_batch(&fragments(&["b", "c"]));

    assert_eq!(store.node(first.nodes[0]).unwrap().position, moved);
}

#[test]
fn removed_ids_are_never_reissued() {
    let store = GraphStore::new(test_config());
    let first = store.merge_batch(&fragments(&["a", "b"]));
    store.apply_node_changes(&[NodeChange::Removed {
        id: first.nodes[0],
    }]);

    let second = store.merge_batch(&fragments(&["c", "d"]));

    assert!(!second.nodes.contains(&first.nodes[0]));
    assert!(!store.contains_node(first.nodes[0]));
}

proptest! {
    #[test]
    fn chain_length_invariant(labels in proptest::collection::vec("[a-z ]{1,20}", 0..24)) {
        let store = GraphStore::new(test_config());
        let batch: Vec<SummaryFragment> =
            labels.iter().map(SummaryFragment::new).collect();

        let receipt = store.merge_batch(&batch);

        prop_assert_eq!(receipt.nodes.len(), batch.len());
        prop_assert_eq!(receipt.edges.len(), batch.len().saturating_sub(1));
        prop_assert_eq!(store.node_count(), batch.len());
        prop_assert_eq!(store.edge_count(), batch.len().saturating_sub(1));
    }

    #[test]
    fn ids_unique_across_batches(sizes in proptest::collection::vec(0usize..8, 1..6)) {
        let store = GraphStore::new(test_config());
        let mut node_ids: HashSet<NodeId> = HashSet::new();
        let mut edge_ids: HashSet<EdgeId> = HashSet::new();

        for (round, size) in sizes.iter().enumerate() {
            let batch: Vec<SummaryFragment> = (0..*size)
                .map(|i| SummaryFragment::new(format!("point {round}-{i}")))
                .collect();
            let receipt = store.merge_batch(&batch);

            for id in receipt.nodes {
                prop_assert!(node_ids.insert(id));
            }
            for id in receipt.edges {
                prop_assert!(edge_ids.insert(id));
            }
        }

        // Manual edges draw from the same unique id space.
        let snapshot = store.snapshot();
        if snapshot.nodes.len() >= 2 {
            let user = store
                .connect_user_edge(snapshot.nodes[0].id, snapshot.nodes[1].id)
                .unwrap();
            prop_assert!(edge_ids.insert(user));
        }
    }

    #[test]
    fn merge_order_matches_fragment_order(labels in proptest::collection::vec("[a-z]{1,12}", 1..12)) {
        let store = GraphStore::new(test_config());
        let batch: Vec<SummaryFragment> =
            labels.iter().map(SummaryFragment::new).collect();

        let receipt = store.merge_batch(&batch);

        let snapshot = store.snapshot();
        for (ordinal, id) in receipt.nodes.iter().enumerate() {
            prop_assert_eq!(snapshot.nodes[ordinal].id, *id);
            prop_assert_eq!(&snapshot.nodes[ordinal].label, &labels[ordinal]);
        }
        for (ordinal, id) in receipt.edges.iter().enumerate() {
            prop_assert_eq!(snapshot.edges[ordinal].id, *id);
            prop_assert_eq!(snapshot.edges[ordinal].source, receipt.nodes[ordinal]);
            prop_assert_eq!(snapshot.edges[ordinal].target, receipt.nodes[ordinal + 1]);
        }
    }
}
