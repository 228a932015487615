//! Core types for the strategic-map document model.
//!
//! This module defines the entities the document store owns: nodes placed
//! on the two-axis canvas, directed edges between them, the selection and
//! interaction bookkeeping, and the evolution-stage banding of the x axis.

use crate::constants::DEFAULT_NODE_COLOR;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Current time as unix epoch milliseconds.
pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a node. Immutable for the lifetime of the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(Uuid);

impl EdgeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EdgeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// A placed, named, colored point on the two-axis canvas.
///
/// `x` is the evolution position and `y` the value-chain position, both
/// clamped to `[0,1]` by every write path in the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub color: String,
    pub notes: Option<String>,
    pub created_at: u64,
    pub updated_at: u64,
}

impl Node {
    /// Evolution stage band the node currently sits in.
    pub fn evolution_stage(&self) -> EvolutionStage {
        EvolutionStage::from_x(self.x)
    }
}

/// Fields supplied by the caller when creating a node; the store assigns
/// identity and timestamps.
#[derive(Clone, Debug)]
pub struct NodeDraft {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub color: String,
    pub notes: Option<String>,
}

impl NodeDraft {
    pub fn new(name: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            color: DEFAULT_NODE_COLOR.to_string(),
            notes: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Partial update applied to an existing node. `None` fields are untouched.
#[derive(Clone, Debug, Default)]
pub struct NodePatch {
    pub name: Option<String>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub color: Option<String>,
    pub notes: Option<Option<String>>,
}

impl NodePatch {
    pub fn position(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

// ============================================================================
// Edges
// ============================================================================

/// Semantic type of an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    #[default]
    Dependency,
    Flow,
}

impl EdgeKind {
    pub fn label(&self) -> &'static str {
        match self {
            EdgeKind::Dependency => "dependency",
            EdgeKind::Flow => "flow",
        }
    }
}

/// Line style of an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    #[default]
    Solid,
    Dashed,
}

/// A directed connector between two distinct nodes.
///
/// Edges are removed when either endpoint node is deleted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub kind: EdgeKind,
    pub style: EdgeStyle,
    pub label: Option<String>,
}

/// Partial update applied to an existing edge.
#[derive(Clone, Debug, Default)]
pub struct EdgePatch {
    pub kind: Option<EdgeKind>,
    pub style: Option<EdgeStyle>,
    pub label: Option<Option<String>>,
}

// ============================================================================
// Selection
// ============================================================================

/// Current selection. At most one entity is selected at any time; the enum
/// makes simultaneous node+edge selection unrepresentable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Node(NodeId),
    Edge(EdgeId),
}

impl Selection {
    pub fn node(&self) -> Option<NodeId> {
        match self {
            Selection::Node(id) => Some(*id),
            _ => None,
        }
    }

    pub fn edge(&self) -> Option<EdgeId> {
        match self {
            Selection::Edge(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// Pan/zoom state carried through persistence. The core geometry operates
/// in normalized document space and does not consume this directly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

// ============================================================================
// Evolution stages
// ============================================================================

/// The four ordered qualitative bands of the evolution (x) axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvolutionStage {
    Genesis,
    Custom,
    Product,
    Commodity,
}

impl EvolutionStage {
    /// Band containing the given evolution position.
    pub fn from_x(x: f32) -> Self {
        if x < 0.25 {
            EvolutionStage::Genesis
        } else if x < 0.5 {
            EvolutionStage::Custom
        } else if x < 0.75 {
            EvolutionStage::Product
        } else {
            EvolutionStage::Commodity
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EvolutionStage::Genesis => "Genesis",
            EvolutionStage::Custom => "Custom",
            EvolutionStage::Product => "Product",
            EvolutionStage::Commodity => "Commodity",
        }
    }

    /// `[min, max)` extent of the band on the evolution axis.
    pub fn bounds(&self) -> (f32, f32) {
        match self {
            EvolutionStage::Genesis => (0.0, 0.25),
            EvolutionStage::Custom => (0.25, 0.5),
            EvolutionStage::Product => (0.5, 0.75),
            EvolutionStage::Commodity => (0.75, 1.0),
        }
    }

    pub fn all() -> &'static [EvolutionStage] {
        &[
            EvolutionStage::Genesis,
            EvolutionStage::Custom,
            EvolutionStage::Product,
            EvolutionStage::Commodity,
        ]
    }
}

// ============================================================================
// Node palette
// ============================================================================

/// Predefined node template for the palette.
#[derive(Clone, Copy, Debug)]
pub struct NodeTemplate {
    pub name: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

/// Built-in palette of common map components.
pub const NODE_TEMPLATES: &[NodeTemplate] = &[
    NodeTemplate {
        name: "Customer",
        color: "#3B82F6",
        description: "End user or customer",
    },
    NodeTemplate {
        name: "Product",
        color: "#10B981",
        description: "Product or service offering",
    },
    NodeTemplate {
        name: "Service",
        color: "#F59E0B",
        description: "Supporting service",
    },
    NodeTemplate {
        name: "Data",
        color: "#8B5CF6",
        description: "Data or information",
    },
    NodeTemplate {
        name: "Platform",
        color: "#EF4444",
        description: "Platform or infrastructure",
    },
    NodeTemplate {
        name: "Component",
        color: "#6B7280",
        description: "Generic component",
    },
];
