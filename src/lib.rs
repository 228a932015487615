//! Core engine for a strategic (Wardley) map editor.
//!
//! Everything a rendering shell needs short of pixels: the document store
//! with its entities and observer interface, coordinate conversion between
//! pointer space and the normalized map plane, a pointer-gesture state
//! machine, and persistence (JSON interchange, draw.io export, keyed
//! storage, periodic auto-save).
//!
//! ## Architecture
//!
//! - [`store`] - the single source of truth; all mutations go through it
//! - [`geometry`] - pure conversions between screen, map, and surface space
//! - [`input`] - pointer events in, store operations out
//! - [`data`] - interchange formats and persistence
//! - [`spatial_index`] - R-tree index backing pointer hit testing
//!
//! The store is single-threaded by design; only the auto-save loop runs on
//! a background thread, and it talks to the document through an immutable
//! snapshot, never the live store.

pub mod constants;
pub mod data;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod spatial_index;
pub mod store;
pub mod types;

pub use geometry::{
    map_to_screen, map_to_surface, screen_to_map, CanvasBounds, MapPoint, ScreenPoint,
    SurfacePoint,
};
pub use input::{CanvasController, HitTarget, InteractionMode, PointerButton, PointerEvent, UiRequest};
pub use store::{MapStore, StoreChange, SubscriberId};
pub use types::{
    Edge, EdgeId, EdgeKind, EdgePatch, EdgeStyle, EvolutionStage, Node, NodeDraft, NodeId,
    NodePatch, NodeTemplate, Selection, Viewport, NODE_TEMPLATES,
};
