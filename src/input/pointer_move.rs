//! Pointer move handling - the drag hot path.
//!
//! Fires on every pointer move while a drag is active, so this stays a
//! single conversion plus one store write. The store clamps the position
//! and keeps the spatial index current.

use super::{CanvasController, PointerEvent};
use crate::geometry::screen_to_map_unclamped;
use crate::store::MapStore;

impl CanvasController {
    /// Handle a pointer move. Only a drag reacts to moves; any other mode
    /// ignores them.
    pub fn pointer_move(&mut self, store: &mut MapStore, event: PointerEvent) {
        let Some(node) = store.mode().dragging_node() else {
            return;
        };
        let Some(grab) = store.mode().grab_offset() else {
            return;
        };
        if store.node(node).is_none() {
            // The node was deleted out from under the gesture.
            store.end_drag();
            return;
        }

        // Unclamped here so the grab offset applies before clamping; the
        // store clamps the final position into [0,1].
        let map = screen_to_map_unclamped(event.position, self.bounds());
        store.move_node(node, map.x + grab.0, map.y + grab.1);
    }
}
