//! Pointer release handling.
//!
//! Releasing the pointer only ever finalizes a drag. A connect gesture
//! survives release; it resolves on the next press.

use super::{CanvasController, PointerEvent};
use crate::store::MapStore;

impl CanvasController {
    /// Handle a pointer release.
    pub fn pointer_up(&mut self, store: &mut MapStore, _event: PointerEvent) {
        store.end_drag();
    }
}
