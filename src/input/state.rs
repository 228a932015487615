//! Interaction state machine - unified state for all pointer gestures.
//!
//! A single explicit enum replaces scattered boolean flags, making
//! impossible states (dragging while drawing an edge) unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging      (primary press on a node)
//! Idle -> Connecting    (secondary press on a node)
//!
//! Dragging -> Idle      (pointer release)
//! Connecting -> Idle    (press on any node or the canvas, or cancel)
//! ```

use crate::types::NodeId;

/// Current pointer gesture, owned by the store alongside the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionMode {
    /// No active gesture
    Idle,

    /// A node is following the pointer
    Dragging {
        /// Node being dragged
        node: NodeId,
        /// Offset from the pointer to the node position at press time,
        /// in document units. Keeps the node from snapping its center
        /// under the cursor.
        grab: (f32, f32),
    },

    /// An edge is being drawn out of a source node
    Connecting {
        /// Node the pending edge starts from
        source: NodeId,
    },
}

impl Default for InteractionMode {
    fn default() -> Self {
        Self::Idle
    }
}

impl InteractionMode {
    /// Returns true if no gesture is active
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a node is being dragged
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns true if an edge is being drawn
    pub fn is_connecting(&self) -> bool {
        matches!(self, Self::Connecting { .. })
    }

    /// Get the node being dragged, if any
    pub fn dragging_node(&self) -> Option<NodeId> {
        match self {
            Self::Dragging { node, .. } => Some(*node),
            _ => None,
        }
    }

    /// Get the grab offset of the active drag, if any
    pub fn grab_offset(&self) -> Option<(f32, f32)> {
        match self {
            Self::Dragging { grab, .. } => Some(*grab),
            _ => None,
        }
    }

    /// Get the source node of the pending edge, if any
    pub fn connecting_source(&self) -> Option<NodeId> {
        match self {
            Self::Connecting { source } => Some(*source),
            _ => None,
        }
    }

    /// Reset to Idle
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
