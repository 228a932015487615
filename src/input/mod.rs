//! Pointer input handling for the map canvas.
//!
//! Translates raw pointer events into store operations. The render layer
//! feeds normalized [`PointerEvent`]s in; the controller resolves what was
//! hit, drives the gesture state machine, and occasionally hands back a
//! [`UiRequest`] for interactions that need a host-side prompt.
//!
//! ## Architecture
//!
//! All gesture state lives in the store's [`InteractionMode`], not in the
//! controller. The controller itself only carries the current canvas bounds
//! needed for coordinate conversion, so it can be recreated freely.
//!
//! ## Modules
//!
//! - `state` - interaction state machine enum and helper methods
//! - `hit` - pointer-to-entity resolution (nodes over edges over canvas)
//! - `pointer_down` - press handling (selection, gesture starts, connect)
//! - `pointer_move` - move handling (the drag hot path)
//! - `pointer_up` - release handling (gesture finalization)

mod hit;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use hit::{hit_test, HitTarget};
pub use state::InteractionMode;

use crate::geometry::{CanvasBounds, ScreenPoint};
use crate::types::EdgeId;

/// Which pointer button a press came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// A normalized pointer event, already relative to the canvas element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: ScreenPoint,
    pub button: PointerButton,
    /// 1 for a single press, 2 for the second press of a double-press.
    pub click_count: usize,
}

impl PointerEvent {
    pub fn primary(position: ScreenPoint) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            click_count: 1,
        }
    }

    pub fn secondary(position: ScreenPoint) -> Self {
        Self {
            position,
            button: PointerButton::Secondary,
            click_count: 1,
        }
    }

    pub fn double(position: ScreenPoint) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            click_count: 2,
        }
    }
}

/// Side effects the host UI must carry out; the controller never prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiRequest {
    /// Ask the user whether to delete the given edge.
    ConfirmDeleteEdge(EdgeId),
}

/// Stateless-per-gesture event translator for one canvas.
///
/// Holds only the canvas bounds; call [`set_bounds`](Self::set_bounds)
/// whenever the canvas element resizes.
pub struct CanvasController {
    bounds: CanvasBounds,
}

impl CanvasController {
    pub fn new(bounds: CanvasBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: CanvasBounds) {
        self.bounds = bounds;
    }
}
