//! Store behavior tests: timestamps, patches, and edge bookkeeping.

use crate::helpers::TestMapBuilder;
use stratmap::store::{MapStore, StoreChange};
use stratmap::types::{EdgeKind, EdgePatch, EdgeStyle, NodeDraft, NodePatch, Selection};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_update_node_patch_is_partial() {
    let (mut store, nodes, _) = TestMapBuilder::new().with_node("Kettle", 0.4, 0.6).build();

    store.update_node(nodes[0], NodePatch::name("Electric Kettle"));

    let node = store.node(nodes[0]).unwrap();
    assert_eq!(node.name, "Electric Kettle");
    // Untouched fields survive the patch.
    assert_eq!((node.x, node.y), (0.4, 0.6));
}

#[test]
fn test_update_bumps_updated_at_only() {
    let (mut store, nodes, _) = TestMapBuilder::new().with_node("A", 0.1, 0.1).build();
    let created = store.node(nodes[0]).unwrap().created_at;

    std::thread::sleep(std::time::Duration::from_millis(5));
    store.move_node(nodes[0], 0.2, 0.2);

    let node = store.node(nodes[0]).unwrap();
    assert_eq!(node.created_at, created);
    assert!(node.updated_at > created);
}

#[test]
fn test_notes_can_be_cleared_through_patch() {
    let mut store = MapStore::new();
    let id = store.add_node(NodeDraft::new("A", 0.1, 0.1).with_notes("draft"));

    store.update_node(
        id,
        NodePatch {
            notes: Some(None),
            ..Default::default()
        },
    );
    assert!(store.node(id).unwrap().notes.is_none());
}

#[test]
fn test_update_edge_patch() {
    let (mut store, _, edges) = TestMapBuilder::new()
        .with_node("A", 0.1, 0.1)
        .with_node("B", 0.9, 0.9)
        .with_edge(0, 1)
        .build();

    store.update_edge(
        edges[0],
        EdgePatch {
            kind: Some(EdgeKind::Flow),
            style: Some(EdgeStyle::Dashed),
            label: Some(Some("ships to".into())),
        },
    );

    let edge = store.edge(edges[0]).unwrap();
    assert_eq!(edge.kind, EdgeKind::Flow);
    assert_eq!(edge.style, EdgeStyle::Dashed);
    assert_eq!(edge.label.as_deref(), Some("ships to"));
}

#[test]
fn test_delete_edge_keeps_nodes() {
    let (mut store, _, edges) = TestMapBuilder::new()
        .with_node("A", 0.1, 0.1)
        .with_node("B", 0.9, 0.9)
        .with_edge(0, 1)
        .build();

    store.delete_edge(edges[0]);
    assert!(store.edges().is_empty());
    assert_eq!(store.nodes().len(), 2);
}

#[test]
fn test_every_mutation_notifies() {
    let mut store = MapStore::new();
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    store.subscribe(move |c| sink.borrow_mut().push(c));

    let a = store.add_node(NodeDraft::new("A", 0.1, 0.1));
    let b = store.add_node(NodeDraft::new("B", 0.9, 0.9));
    store.add_edge(a, b, EdgeKind::Dependency, EdgeStyle::Solid, None);
    store.select_node(None);
    store.start_connection(a);
    store.cancel_connection();
    store.clear();

    assert_eq!(
        *changes.borrow(),
        vec![
            StoreChange::Nodes,
            StoreChange::Nodes,
            StoreChange::Edges,
            StoreChange::Selection,
            StoreChange::Mode,
            StoreChange::Mode,
            StoreChange::Document,
        ]
    );
}

#[test]
fn test_failed_operations_do_not_notify() {
    let mut store = MapStore::new();
    let a = store.add_node(NodeDraft::new("A", 0.1, 0.1));

    let count = Rc::new(RefCell::new(0usize));
    let sink = count.clone();
    store.subscribe(move |_| *sink.borrow_mut() += 1);

    // Rejected and no-op operations stay silent.
    store.add_edge(a, a, EdgeKind::Dependency, EdgeStyle::Solid, None);
    store.delete_node(stratmap::types::NodeId::new());
    store.cancel_connection();
    store.end_drag();

    assert_eq!(*count.borrow(), 0);
}

#[test]
fn test_selection_is_exclusive() {
    let (mut store, nodes, edges) = TestMapBuilder::new()
        .with_node("A", 0.1, 0.1)
        .with_node("B", 0.9, 0.9)
        .with_edge(0, 1)
        .build();

    store.select_node(Some(nodes[0]));
    assert_eq!(store.selection(), Selection::Node(nodes[0]));
    assert_eq!(store.selection().edge(), None);

    store.select_edge(Some(edges[0]));
    assert_eq!(store.selection(), Selection::Edge(edges[0]));
    assert_eq!(store.selection().node(), None);
}

#[test]
fn test_palette_template_creates_node() {
    let template = stratmap::types::NODE_TEMPLATES
        .iter()
        .find(|t| t.name == "Platform")
        .unwrap();

    let mut store = MapStore::new();
    let id = store.add_node(NodeDraft::new(template.name, 0.75, 0.3).with_color(template.color));

    let node = store.node(id).unwrap();
    assert_eq!(node.color, "#EF4444");
    assert_eq!(node.evolution_stage().name(), "Commodity");
}

#[test]
fn test_replace_resets_selection_and_mode() {
    let (mut store, nodes, _) = TestMapBuilder::new().with_node("A", 0.5, 0.5).build();
    store.select_node(Some(nodes[0]));
    store.start_connection(nodes[0]);

    store.replace(Vec::new(), Vec::new());

    assert!(store.nodes().is_empty());
    assert!(store.selection().is_none());
    assert!(store.mode().is_idle());
}
