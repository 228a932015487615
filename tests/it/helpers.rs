//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestMapBuilder` - Builder pattern for creating stores with content
//! - Canvas and pointer helpers for driving the controller in map coordinates

use stratmap::geometry::{map_to_screen, CanvasBounds, MapPoint, ScreenPoint};
use stratmap::store::MapStore;
use stratmap::types::{EdgeId, EdgeKind, EdgeStyle, NodeDraft, NodeId};

/// Canvas bounds used throughout the tests: one screen pixel per viewBox
/// unit, so coordinates stay easy to reason about.
pub const BOUNDS: CanvasBounds = CanvasBounds {
    width: 1080.0,
    height: 600.0,
};

/// Screen position of a map coordinate under [`BOUNDS`].
pub fn screen_at(x: f32, y: f32) -> ScreenPoint {
    map_to_screen(MapPoint::new(x, y), BOUNDS)
}

// ============================================================================
// TestMapBuilder - Builder pattern for creating test stores
// ============================================================================

/// Builder for creating stores pre-populated with nodes and edges.
///
/// # Example
/// ```ignore
/// let (store, nodes, edges) = TestMapBuilder::new()
///     .with_node("Customer", 0.15, 0.1)
///     .with_node("Kettle", 0.6, 0.55)
///     .with_edge(0, 1)
///     .build();
/// ```
pub struct TestMapBuilder {
    drafts: Vec<NodeDraft>,
    edges: Vec<(usize, usize, EdgeKind, EdgeStyle)>,
}

impl Default for TestMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestMapBuilder {
    pub fn new() -> Self {
        Self {
            drafts: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_node(mut self, name: &str, x: f32, y: f32) -> Self {
        self.drafts.push(NodeDraft::new(name, x, y));
        self
    }

    pub fn with_colored_node(mut self, name: &str, x: f32, y: f32, color: &str) -> Self {
        self.drafts.push(NodeDraft::new(name, x, y).with_color(color));
        self
    }

    /// Add a default (dependency, solid) edge between two nodes by index.
    pub fn with_edge(mut self, from: usize, to: usize) -> Self {
        self.edges
            .push((from, to, EdgeKind::default(), EdgeStyle::default()));
        self
    }

    pub fn with_typed_edge(
        mut self,
        from: usize,
        to: usize,
        kind: EdgeKind,
        style: EdgeStyle,
    ) -> Self {
        self.edges.push((from, to, kind, style));
        self
    }

    /// Build the store. Returns the node and edge ids in insertion order;
    /// the store is left with no selection and no active gesture.
    pub fn build(self) -> (MapStore, Vec<NodeId>, Vec<EdgeId>) {
        let mut store = MapStore::new();
        let node_ids: Vec<NodeId> = self
            .drafts
            .into_iter()
            .map(|draft| store.add_node(draft))
            .collect();
        let edge_ids: Vec<EdgeId> = self
            .edges
            .into_iter()
            .map(|(from, to, kind, style)| {
                store
                    .add_edge(node_ids[from], node_ids[to], kind, style, None)
                    .expect("builder edges reference valid distinct nodes")
            })
            .collect();
        store.select_node(None);
        (store, node_ids, edge_ids)
    }
}
