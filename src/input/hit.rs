//! Pointer hit testing against the document.
//!
//! Resolution order mirrors render stacking: nodes sit above edges, edges
//! above the empty canvas. Node lookup goes through the store's spatial
//! index; edge lookup measures pointer distance to each segment.

use crate::geometry::{map_to_surface, screen_to_map_unclamped, CanvasBounds, ScreenPoint};
use crate::store::MapStore;
use crate::types::{EdgeId, NodeId};

/// What the pointer landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Node(NodeId),
    Edge(EdgeId),
    Canvas,
}

/// Resolve a pointer position to the topmost entity under it.
///
/// Uses the unclamped conversion: a pointer over the axis gutter must miss,
/// not get warped onto the plot boundary where it could hit border nodes.
pub fn hit_test(store: &MapStore, p: ScreenPoint, bounds: CanvasBounds) -> HitTarget {
    let surface = map_to_surface(screen_to_map_unclamped(p, bounds));

    if let Some(node) = store.topmost_node_at(surface) {
        return HitTarget::Node(node);
    }
    if let Some(edge) = store.edge_at(surface) {
        return HitTarget::Edge(edge);
    }
    HitTarget::Canvas
}
