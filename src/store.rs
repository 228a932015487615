//! The document store - authoritative in-memory state for one map.
//!
//! Owns all nodes, edges, the selection, and the interaction mode. Every
//! write goes through the operations here; no other component mutates
//! entities directly. Each operation is a single synchronous transition
//! followed by one synchronous observer notification, and performs no I/O.

use crate::constants::EDGE_HIT_TOLERANCE;
use crate::geometry::{map_to_surface, segment_distance, MapPoint, SurfacePoint};
use crate::input::InteractionMode;
use crate::spatial_index::SpatialIndex;
use crate::types::{
    unix_millis, Edge, EdgeId, EdgeKind, EdgePatch, EdgeStyle, Node, NodeDraft, NodeId, NodePatch,
    Selection,
};

/// Coarse description of what a mutation touched, delivered to observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreChange {
    /// Node set or a node's fields changed (selection may have moved too)
    Nodes,
    /// Edge set or an edge's fields changed
    Edges,
    /// Only the selection changed
    Selection,
    /// Only the interaction mode changed
    Mode,
    /// Wholesale replacement (import, clear)
    Document,
}

/// Handle returned by [`MapStore::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Listener = Box<dyn Fn(StoreChange)>;

/// In-memory store for a single strategic map.
pub struct MapStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    selection: Selection,
    mode: InteractionMode,
    index: SpatialIndex,
    listeners: Vec<(SubscriberId, Listener)>,
    next_listener_id: u64,
}

impl Default for MapStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MapStore {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            selection: Selection::None,
            mode: InteractionMode::Idle,
            index: SpatialIndex::new(),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    // ==================== Observers ====================

    /// Register a listener called synchronously after every mutation.
    pub fn subscribe(&mut self, listener: impl Fn(StoreChange) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    fn emit(&self, change: StoreChange) {
        for (_, listener) in &self.listeners {
            listener(change);
        }
    }

    // ==================== Lookups ====================

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Every edge incident to the given node, in either direction.
    pub fn edges_for_node(&self, id: NodeId) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|e| e.from == id || e.to == id)
            .collect()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    // ==================== Hit testing ====================

    /// Topmost node whose disc contains the surface point. Candidates come
    /// from the R-tree; ties resolve to the last node in document order,
    /// matching render stacking.
    pub fn topmost_node_at(&self, p: SurfacePoint) -> Option<NodeId> {
        let candidates = self.index.query_point(p);
        if candidates.is_empty() {
            return None;
        }
        self.nodes
            .iter()
            .rev()
            .find(|n| candidates.contains(&n.id))
            .map(|n| n.id)
    }

    /// Topmost edge whose segment passes within the hit tolerance.
    pub fn edge_at(&self, p: SurfacePoint) -> Option<EdgeId> {
        self.edges
            .iter()
            .rev()
            .find(|e| {
                let (Some(from), Some(to)) = (self.node(e.from), self.node(e.to)) else {
                    return false;
                };
                let a = map_to_surface(MapPoint::new(from.x, from.y));
                let b = map_to_surface(MapPoint::new(to.x, to.y));
                segment_distance(p, a, b) <= EDGE_HIT_TOLERANCE
            })
            .map(|e| e.id)
    }

    // ==================== Node operations ====================

    /// Create a node from a draft, clamping its position, and make it the
    /// sole selection. Never fails.
    pub fn add_node(&mut self, draft: NodeDraft) -> NodeId {
        let now = unix_millis();
        let node = Node {
            id: NodeId::new(),
            name: draft.name,
            x: draft.x.clamp(0.0, 1.0),
            y: draft.y.clamp(0.0, 1.0),
            color: draft.color,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        };
        let id = node.id;
        self.index.upsert(id, MapPoint::new(node.x, node.y));
        self.nodes.push(node);
        self.selection = Selection::Node(id);
        self.mode = InteractionMode::Idle;
        self.emit(StoreChange::Nodes);
        id
    }

    /// Apply a partial update. Unknown ids are a silent no-op.
    pub fn update_node(&mut self, id: NodeId, patch: NodePatch) {
        let Some(node) = self.node_mut(id) else {
            tracing::debug!(%id, "update_node: unknown node id, ignoring");
            return;
        };
        if let Some(name) = patch.name {
            node.name = name;
        }
        if let Some(x) = patch.x {
            node.x = x.clamp(0.0, 1.0);
        }
        if let Some(y) = patch.y {
            node.y = y.clamp(0.0, 1.0);
        }
        if let Some(color) = patch.color {
            node.color = color;
        }
        if let Some(notes) = patch.notes {
            node.notes = notes;
        }
        node.updated_at = unix_millis();
        let position = MapPoint::new(node.x, node.y);
        self.index.upsert(id, position);
        self.emit(StoreChange::Nodes);
    }

    /// Drag hot path: clamp and write a node position. O(1) beyond the node
    /// lookup, safe to call on every pointer-move event.
    pub fn move_node(&mut self, id: NodeId, x: f32, y: f32) {
        let Some(node) = self.node_mut(id) else {
            tracing::debug!(%id, "move_node: unknown node id, ignoring");
            return;
        };
        node.x = x.clamp(0.0, 1.0);
        node.y = y.clamp(0.0, 1.0);
        node.updated_at = unix_millis();
        let position = MapPoint::new(node.x, node.y);
        self.index.upsert(id, position);
        self.emit(StoreChange::Nodes);
    }

    /// Delete a node and cascade to every incident edge. Clears the
    /// selection if it pointed at the node or at a cascaded edge.
    pub fn delete_node(&mut self, id: NodeId) {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            tracing::debug!(%id, "delete_node: unknown node id, ignoring");
            return;
        }
        self.index.remove(id);

        let removed_edges: Vec<EdgeId> = self
            .edges
            .iter()
            .filter(|e| e.from == id || e.to == id)
            .map(|e| e.id)
            .collect();
        self.edges.retain(|e| e.from != id && e.to != id);

        match self.selection {
            Selection::Node(selected) if selected == id => self.selection = Selection::None,
            Selection::Edge(selected) if removed_edges.contains(&selected) => {
                self.selection = Selection::None
            }
            _ => {}
        }
        // A gesture anchored on the deleted node cannot continue.
        match self.mode {
            InteractionMode::Dragging { node, .. } if node == id => {
                self.mode = InteractionMode::Idle
            }
            InteractionMode::Connecting { source } if source == id => {
                self.mode = InteractionMode::Idle
            }
            _ => {}
        }
        self.emit(StoreChange::Nodes);
    }

    // ==================== Edge operations ====================

    /// Add an edge and make it the sole selection. Returns `None` without
    /// mutating anything for a self-referencing edge or a missing endpoint.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        kind: EdgeKind,
        style: EdgeStyle,
        label: Option<String>,
    ) -> Option<EdgeId> {
        if from == to {
            tracing::debug!(%from, "add_edge: self-referencing edge rejected");
            return None;
        }
        if self.node(from).is_none() || self.node(to).is_none() {
            tracing::debug!(%from, %to, "add_edge: missing endpoint, ignoring");
            return None;
        }
        let edge = Edge {
            id: EdgeId::new(),
            from,
            to,
            kind,
            style,
            label,
        };
        let id = edge.id;
        self.edges.push(edge);
        self.selection = Selection::Edge(id);
        self.mode = InteractionMode::Idle;
        self.emit(StoreChange::Edges);
        Some(id)
    }

    pub fn update_edge(&mut self, id: EdgeId, patch: EdgePatch) {
        let Some(edge) = self.edges.iter_mut().find(|e| e.id == id) else {
            tracing::debug!(%id, "update_edge: unknown edge id, ignoring");
            return;
        };
        if let Some(kind) = patch.kind {
            edge.kind = kind;
        }
        if let Some(style) = patch.style {
            edge.style = style;
        }
        if let Some(label) = patch.label {
            edge.label = label;
        }
        self.emit(StoreChange::Edges);
    }

    pub fn delete_edge(&mut self, id: EdgeId) {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != id);
        if self.edges.len() == before {
            tracing::debug!(%id, "delete_edge: unknown edge id, ignoring");
            return;
        }
        if self.selection == Selection::Edge(id) {
            self.selection = Selection::None;
        }
        self.emit(StoreChange::Edges);
    }

    // ==================== Selection ====================

    /// Select a node (or clear with `None`). Selecting always cancels an
    /// in-flight drag or connect gesture.
    pub fn select_node(&mut self, id: Option<NodeId>) {
        match id {
            Some(id) if self.node(id).is_none() => {
                tracing::debug!(%id, "select_node: unknown node id, ignoring");
                return;
            }
            Some(id) => self.selection = Selection::Node(id),
            None => self.selection = Selection::None,
        }
        self.mode = InteractionMode::Idle;
        self.emit(StoreChange::Selection);
    }

    /// Select an edge (or clear with `None`). Same cancellation semantics
    /// as [`select_node`](Self::select_node).
    pub fn select_edge(&mut self, id: Option<EdgeId>) {
        match id {
            Some(id) if self.edge(id).is_none() => {
                tracing::debug!(%id, "select_edge: unknown edge id, ignoring");
                return;
            }
            Some(id) => self.selection = Selection::Edge(id),
            None => self.selection = Selection::None,
        }
        self.mode = InteractionMode::Idle;
        self.emit(StoreChange::Selection);
    }

    // ==================== Gesture workflows ====================

    /// Begin a drag: selects the node and records the grab offset between
    /// the node position and the pointer at press time.
    pub fn start_drag(&mut self, id: NodeId, grab: (f32, f32)) {
        if self.node(id).is_none() {
            tracing::debug!(%id, "start_drag: unknown node id, ignoring");
            return;
        }
        self.selection = Selection::Node(id);
        self.mode = InteractionMode::Dragging { node: id, grab };
        self.emit(StoreChange::Mode);
    }

    pub fn end_drag(&mut self) {
        if matches!(self.mode, InteractionMode::Dragging { .. }) {
            self.mode = InteractionMode::Idle;
            self.emit(StoreChange::Mode);
        }
    }

    /// Enter edge-drawing mode anchored on `id`. The selection is left
    /// untouched.
    pub fn start_connection(&mut self, id: NodeId) {
        if self.node(id).is_none() {
            tracing::debug!(%id, "start_connection: unknown node id, ignoring");
            return;
        }
        self.mode = InteractionMode::Connecting { source: id };
        self.emit(StoreChange::Mode);
    }

    /// Complete an in-flight connect gesture onto `target`.
    ///
    /// One-shot: the `Connecting` state is consumed before any edge is
    /// created, so repeated presses within the same gesture cannot produce
    /// duplicates. Targeting the source cancels without side effects.
    pub fn complete_connection(&mut self, target: NodeId) -> Option<EdgeId> {
        // Any other mode (including an active drag) is left untouched.
        if !self.mode.is_connecting() {
            return None;
        }
        let mode = std::mem::replace(&mut self.mode, InteractionMode::Idle);
        let InteractionMode::Connecting { source } = mode else {
            return None;
        };
        if source == target {
            self.emit(StoreChange::Mode);
            return None;
        }
        self.add_edge(
            source,
            target,
            EdgeKind::default(),
            EdgeStyle::default(),
            None,
        )
    }

    pub fn cancel_connection(&mut self) {
        if matches!(self.mode, InteractionMode::Connecting { .. }) {
            self.mode = InteractionMode::Idle;
            self.emit(StoreChange::Mode);
        }
    }

    // ==================== Wholesale operations ====================

    /// Atomically substitute the whole document. Selection and mode reset;
    /// used by import so failures never leave a partial load behind.
    pub fn replace(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) {
        self.index
            .rebuild(nodes.iter().map(|n| (n.id, MapPoint::new(n.x, n.y))));
        self.nodes = nodes;
        self.edges = edges;
        self.selection = Selection::None;
        self.mode = InteractionMode::Idle;
        self.emit(StoreChange::Document);
    }

    /// Empty the store back to its initial condition.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.index.clear();
        self.selection = Selection::None;
        self.mode = InteractionMode::Idle;
        self.emit(StoreChange::Document);
    }
}
