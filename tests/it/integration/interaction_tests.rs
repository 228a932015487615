//! End-to-end pointer interaction workflows: events in, document state out.

use crate::helpers::{screen_at, TestMapBuilder, BOUNDS};
use stratmap::input::{CanvasController, PointerEvent, UiRequest};
use stratmap::types::{EdgeKind, EdgeStyle, Selection};

#[test]
fn test_connect_two_nodes_workflow() {
    let (mut store, nodes, _) = TestMapBuilder::new()
        .with_node("Customer", 0.2, 0.1)
        .with_node("Platform", 0.8, 0.8)
        .build();
    let mut controller = CanvasController::new(BOUNDS);

    // Secondary press on Customer arms the connect gesture without
    // disturbing the (empty) selection.
    controller.pointer_down(&mut store, PointerEvent::secondary(screen_at(0.2, 0.1)));
    assert!(store.mode().is_connecting());
    assert_eq!(store.selection(), Selection::None);

    // Primary press on Platform completes it.
    controller.pointer_down(&mut store, PointerEvent::primary(screen_at(0.8, 0.8)));

    assert_eq!(store.edges().len(), 1);
    let edge = &store.edges()[0];
    assert_eq!(edge.from, nodes[0]);
    assert_eq!(edge.to, nodes[1]);
    assert_eq!(edge.kind, EdgeKind::Dependency);
    assert_eq!(edge.style, EdgeStyle::Solid);
    assert_eq!(store.selection(), Selection::Edge(edge.id));
    assert!(store.mode().is_idle());
}

#[test]
fn test_secondary_press_while_connecting_cancels() {
    let (mut store, _, _) = TestMapBuilder::new()
        .with_node("A", 0.2, 0.2)
        .with_node("B", 0.8, 0.8)
        .build();
    let mut controller = CanvasController::new(BOUNDS);

    controller.pointer_down(&mut store, PointerEvent::secondary(screen_at(0.2, 0.2)));
    assert!(store.mode().is_connecting());

    // A second secondary press cancels, even over another node; it never
    // completes the edge.
    controller.pointer_down(&mut store, PointerEvent::secondary(screen_at(0.8, 0.8)));

    assert!(store.edges().is_empty());
    assert!(store.mode().is_idle());
    assert_eq!(store.selection(), Selection::None);
}

#[test]
fn test_edge_press_while_connecting_selects_edge() {
    let (mut store, _, edges) = TestMapBuilder::new()
        .with_node("A", 0.2, 0.5)
        .with_node("B", 0.8, 0.5)
        .with_node("C", 0.5, 0.1)
        .with_edge(0, 1)
        .build();
    let mut controller = CanvasController::new(BOUNDS);

    controller.pointer_down(&mut store, PointerEvent::secondary(screen_at(0.5, 0.1)));
    assert!(store.mode().is_connecting());

    // Primary press midway along the A-B segment selects that edge and
    // abandons the pending connection out of C.
    controller.pointer_down(&mut store, PointerEvent::primary(screen_at(0.5, 0.5)));

    assert_eq!(store.selection(), Selection::Edge(edges[0]));
    assert!(store.mode().is_idle());
    assert_eq!(store.edges().len(), 1);
}

#[test]
fn test_connect_does_not_steal_selection_while_pending() {
    let (mut store, nodes, _) = TestMapBuilder::new()
        .with_node("A", 0.2, 0.2)
        .with_node("B", 0.8, 0.8)
        .build();
    store.select_node(Some(nodes[1]));
    let mut controller = CanvasController::new(BOUNDS);

    controller.pointer_down(&mut store, PointerEvent::secondary(screen_at(0.2, 0.2)));

    // B stays selected while the edge is pending out of A.
    assert_eq!(store.selection(), Selection::Node(nodes[1]));
    assert_eq!(store.mode().connecting_source(), Some(nodes[0]));
}

#[test]
fn test_connect_to_source_cancels() {
    let (mut store, _, _) = TestMapBuilder::new().with_node("A", 0.5, 0.5).build();
    let mut controller = CanvasController::new(BOUNDS);

    controller.pointer_down(&mut store, PointerEvent::secondary(screen_at(0.5, 0.5)));
    controller.pointer_down(&mut store, PointerEvent::primary(screen_at(0.5, 0.5)));

    assert!(store.edges().is_empty());
    assert!(store.mode().is_idle());
}

#[test]
fn test_canvas_press_cancels_connect() {
    let (mut store, _, _) = TestMapBuilder::new().with_node("A", 0.2, 0.2).build();
    let mut controller = CanvasController::new(BOUNDS);

    controller.pointer_down(&mut store, PointerEvent::secondary(screen_at(0.2, 0.2)));
    controller.pointer_down(&mut store, PointerEvent::primary(screen_at(0.7, 0.7)));

    assert!(store.edges().is_empty());
    assert!(store.mode().is_idle());
}

#[test]
fn test_drag_follows_pointer_and_clamps() {
    let (mut store, nodes, _) = TestMapBuilder::new().with_node("A", 0.5, 0.5).build();
    let mut controller = CanvasController::new(BOUNDS);

    // Press at the node center, so the grab offset is zero.
    controller.pointer_down(&mut store, PointerEvent::primary(screen_at(0.5, 0.5)));
    assert_eq!(store.mode().dragging_node(), Some(nodes[0]));
    assert_eq!(store.selection(), Selection::Node(nodes[0]));

    // A stream of moves; the node tracks each one.
    for (x, y) in [(0.55, 0.5), (0.7, 0.45), (0.9, 0.3)] {
        controller.pointer_move(&mut store, PointerEvent::primary(screen_at(x, y)));
        let node = store.node(nodes[0]).unwrap();
        assert!((node.x - x).abs() < 1e-3);
        assert!((node.y - y).abs() < 1e-3);
    }

    // Off-plot move clamps to the boundary.
    controller.pointer_move(&mut store, PointerEvent::primary(screen_at(1.3, -0.2)));
    let node = store.node(nodes[0]).unwrap();
    assert_eq!((node.x, node.y), (1.0, 0.0));

    controller.pointer_up(&mut store, PointerEvent::primary(screen_at(1.3, -0.2)));
    assert!(store.mode().is_idle());
    // The node stays selected after the drag.
    assert_eq!(store.selection(), Selection::Node(nodes[0]));
}

#[test]
fn test_drag_preserves_grab_offset() {
    let (mut store, nodes, _) = TestMapBuilder::new().with_node("A", 0.5, 0.5).build();
    let mut controller = CanvasController::new(BOUNDS);

    // Press slightly off-center: 10 surface units right of the center,
    // well inside the 25-unit disc.
    controller.pointer_down(&mut store, PointerEvent::primary(screen_at(0.51, 0.5)));
    controller.pointer_move(&mut store, PointerEvent::primary(screen_at(0.71, 0.5)));

    // The center moved by the pointer delta, not onto the pointer.
    let node = store.node(nodes[0]).unwrap();
    assert!((node.x - 0.7).abs() < 1e-3);
    assert!((node.y - 0.5).abs() < 1e-3);
}

#[test]
fn test_moves_without_drag_do_nothing() {
    let (mut store, nodes, _) = TestMapBuilder::new().with_node("A", 0.5, 0.5).build();
    let mut controller = CanvasController::new(BOUNDS);

    controller.pointer_move(&mut store, PointerEvent::primary(screen_at(0.9, 0.9)));

    let node = store.node(nodes[0]).unwrap();
    assert_eq!((node.x, node.y), (0.5, 0.5));
}

#[test]
fn test_deleting_dragged_node_ends_gesture() {
    let (mut store, nodes, _) = TestMapBuilder::new().with_node("A", 0.5, 0.5).build();
    let mut controller = CanvasController::new(BOUNDS);

    controller.pointer_down(&mut store, PointerEvent::primary(screen_at(0.5, 0.5)));
    store.delete_node(nodes[0]);

    // Further moves are harmless no-ops.
    controller.pointer_move(&mut store, PointerEvent::primary(screen_at(0.9, 0.9)));
    assert!(store.mode().is_idle());
    assert!(store.nodes().is_empty());
}

#[test]
fn test_edge_selection_and_double_press_confirmation() {
    let (mut store, _, edges) = TestMapBuilder::new()
        .with_node("A", 0.2, 0.5)
        .with_node("B", 0.8, 0.5)
        .with_edge(0, 1)
        .build();
    let mut controller = CanvasController::new(BOUNDS);

    // Single press midway along the segment selects the edge.
    let request = controller.pointer_down(&mut store, PointerEvent::primary(screen_at(0.5, 0.5)));
    assert_eq!(request, None);
    assert_eq!(store.selection(), Selection::Edge(edges[0]));

    // Double press asks the host to confirm deletion; nothing is deleted yet.
    let request = controller.pointer_down(&mut store, PointerEvent::double(screen_at(0.5, 0.5)));
    assert_eq!(request, Some(UiRequest::ConfirmDeleteEdge(edges[0])));
    assert_eq!(store.edges().len(), 1);

    // Host confirms.
    store.delete_edge(edges[0]);
    assert!(store.edges().is_empty());
    assert!(store.selection().is_none());
}

#[test]
fn test_canvas_press_clears_selection() {
    let (mut store, nodes, _) = TestMapBuilder::new().with_node("A", 0.2, 0.2).build();
    store.select_node(Some(nodes[0]));
    let mut controller = CanvasController::new(BOUNDS);

    controller.pointer_down(&mut store, PointerEvent::primary(screen_at(0.8, 0.8)));
    assert!(store.selection().is_none());
}

#[test]
fn test_cascade_delete_workflow() {
    let (mut store, nodes, edges) = TestMapBuilder::new()
        .with_node("Customer", 0.1, 0.1)
        .with_node("Kettle", 0.5, 0.5)
        .with_node("Power", 0.9, 0.9)
        .with_edge(0, 1)
        .with_edge(1, 2)
        .build();
    store.select_edge(Some(edges[0]));

    store.delete_node(nodes[1]);

    assert_eq!(store.nodes().len(), 2);
    assert!(store.edges().is_empty());
    // The selected edge was cascaded away, so the selection cleared too.
    assert!(store.selection().is_none());
}
