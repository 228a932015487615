//! JSON interchange format for map documents.
//!
//! The on-disk document uses camelCase keys and string identifiers so files
//! survive round trips through other tooling. Import is strict about the
//! top-level shape (`components`, `connections`, `metadata` must all be
//! present) but forgiving about content: connections referencing unknown
//! components are dropped with a warning rather than failing the load.
//!
//! Import is atomic: the document is fully parsed and validated before the
//! store is touched, so a bad file never leaves a partial load behind.

use super::error::{MapFileError, MapFileResult};
use crate::constants::{DEFAULT_TITLE, FORMAT_VERSION};
use crate::store::MapStore;
use crate::types::{unix_millis, Edge, EdgeId, EdgeKind, EdgeStyle, Node, NodeId, Viewport};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One component (node) in the interchange document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocComponent {
    pub id: String,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: u64,
    #[serde(default)]
    pub updated_at: u64,
}

/// One connection (edge) in the interchange document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocConnection {
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(rename = "type", default)]
    pub kind: EdgeKind,
    #[serde(default)]
    pub style: EdgeStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Document metadata block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocMetadata {
    pub title: String,
    pub version: String,
    #[serde(default)]
    pub created_at: u64,
    /// When this document was written out, not when it was last edited.
    #[serde(default)]
    pub exported_at: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
}

impl Default for DocMetadata {
    fn default() -> Self {
        let now = unix_millis();
        Self {
            title: DEFAULT_TITLE.to_string(),
            version: FORMAT_VERSION.to_string(),
            created_at: now,
            exported_at: now,
            viewport: None,
        }
    }
}

/// A complete map document as read from or written to disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    pub components: Vec<DocComponent>,
    pub connections: Vec<DocConnection>,
    pub metadata: DocMetadata,
}

impl MapDocument {
    /// Snapshot the store into an interchange document.
    pub fn from_store(store: &MapStore, title: &str, viewport: Option<Viewport>) -> Self {
        let components = store
            .nodes()
            .iter()
            .map(|n| DocComponent {
                id: n.id.to_string(),
                name: n.name.clone(),
                x: n.x,
                y: n.y,
                color: n.color.clone(),
                notes: n.notes.clone(),
                created_at: n.created_at,
                updated_at: n.updated_at,
            })
            .collect();
        let connections = store
            .edges()
            .iter()
            .map(|e| DocConnection {
                id: e.id.to_string(),
                from: e.from.to_string(),
                to: e.to.to_string(),
                kind: e.kind,
                style: e.style,
                label: e.label.clone(),
            })
            .collect();
        Self {
            components,
            connections,
            metadata: DocMetadata {
                title: title.to_string(),
                viewport,
                ..Default::default()
            },
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> MapFileResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a JSON document.
    ///
    /// The top-level shape is checked against an untyped value first so a
    /// missing section reports the key by name instead of a serde path.
    pub fn from_json(json: &str) -> MapFileResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let object = value
            .as_object()
            .ok_or_else(|| MapFileError::InvalidData("document root is not an object".into()))?;
        for key in ["components", "connections", "metadata"] {
            if !object.contains_key(key) {
                return Err(MapFileError::MissingKey(key));
            }
        }
        if !object["components"].is_array() {
            return Err(MapFileError::InvalidData("components is not an array".into()));
        }
        if !object["connections"].is_array() {
            return Err(MapFileError::InvalidData("connections is not an array".into()));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Load this document into the store, replacing its contents.
    ///
    /// String identifiers are remapped to fresh ids so two imports of the
    /// same file never collide. Connections whose endpoints are missing or
    /// identical are dropped; the count of dropped connections is returned.
    pub fn apply_to(&self, store: &mut MapStore) -> usize {
        let now = unix_millis();
        let mut id_map: HashMap<&str, NodeId> = HashMap::new();
        let nodes: Vec<Node> = self
            .components
            .iter()
            .map(|c| {
                let id = NodeId::new();
                id_map.insert(c.id.as_str(), id);
                Node {
                    id,
                    name: c.name.clone(),
                    x: c.x.clamp(0.0, 1.0),
                    y: c.y.clamp(0.0, 1.0),
                    color: c.color.clone(),
                    notes: c.notes.clone(),
                    created_at: if c.created_at > 0 { c.created_at } else { now },
                    updated_at: if c.updated_at > 0 { c.updated_at } else { now },
                }
            })
            .collect();

        let mut dropped = 0;
        let edges: Vec<Edge> = self
            .connections
            .iter()
            .filter_map(|c| {
                let (Some(&from), Some(&to)) =
                    (id_map.get(c.from.as_str()), id_map.get(c.to.as_str()))
                else {
                    tracing::warn!(id = %c.id, "dropping connection with missing endpoint");
                    dropped += 1;
                    return None;
                };
                if from == to {
                    tracing::warn!(id = %c.id, "dropping self-referencing connection");
                    dropped += 1;
                    return None;
                }
                Some(Edge {
                    id: EdgeId::new(),
                    from,
                    to,
                    kind: c.kind,
                    style: c.style,
                    label: c.label.clone(),
                })
            })
            .collect();

        store.replace(nodes, edges);
        dropped
    }
}
