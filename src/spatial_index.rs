//! R-tree spatial index over node hit discs.
//!
//! Keeps pointer hit testing O(log n) instead of scanning every node on
//! each press. Entries are indexed in drawing-surface coordinates, where
//! nodes are fixed-radius discs.

use crate::constants::NODE_RADIUS;
use crate::geometry::{map_to_surface, MapPoint, SurfacePoint};
use crate::types::NodeId;
use rstar::{RTree, RTreeObject, AABB};
use std::collections::HashMap;

/// Bounding entry for one node's hit disc.
#[derive(Debug, Clone, Copy)]
pub struct NodeEntry {
    pub node_id: NodeId,
    pub cx: f32,
    pub cy: f32,
}

impl NodeEntry {
    fn new(node_id: NodeId, position: MapPoint) -> Self {
        let center = map_to_surface(position);
        Self {
            node_id,
            cx: center.x,
            cy: center.y,
        }
    }

    #[inline]
    pub fn contains_point(&self, p: SurfacePoint) -> bool {
        let dx = p.x - self.cx;
        let dy = p.y - self.cy;
        dx * dx + dy * dy <= NODE_RADIUS * NODE_RADIUS
    }
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.cx - NODE_RADIUS, self.cy - NODE_RADIUS],
            [self.cx + NODE_RADIUS, self.cy + NODE_RADIUS],
        )
    }
}

impl PartialEq for NodeEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}

/// Spatial index for node hit testing.
pub struct SpatialIndex {
    tree: RTree<NodeEntry>,
    entries: HashMap<NodeId, NodeEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or reposition a node's entry.
    pub fn upsert(&mut self, node_id: NodeId, position: MapPoint) {
        if let Some(old) = self.entries.remove(&node_id) {
            self.tree.remove(&old);
        }
        let entry = NodeEntry::new(node_id, position);
        self.tree.insert(entry);
        self.entries.insert(node_id, entry);
    }

    pub fn remove(&mut self, node_id: NodeId) -> bool {
        if let Some(entry) = self.entries.remove(&node_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All nodes whose disc contains the given surface point.
    pub fn query_point(&self, p: SurfacePoint) -> Vec<NodeId> {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([p.x, p.y]))
            .filter(|entry| entry.contains_point(p))
            .map(|entry| entry.node_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuild from scratch, bulk-loading the tree.
    pub fn rebuild<I>(&mut self, nodes: I)
    where
        I: Iterator<Item = (NodeId, MapPoint)>,
    {
        let entries: Vec<NodeEntry> = nodes
            .map(|(id, position)| NodeEntry::new(id, position))
            .collect();
        self.entries = entries.iter().map(|e| (e.node_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
