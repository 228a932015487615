//! Pointer press handling.
//!
//! A press either completes an in-flight connect gesture or starts a new
//! interaction: drag on a node, connect out of a node, select an edge, or
//! clear the selection on empty canvas.

use super::hit::{hit_test, HitTarget};
use super::{CanvasController, PointerButton, PointerEvent, UiRequest};
use crate::geometry::screen_to_map;
use crate::store::MapStore;

impl CanvasController {
    /// Handle a pointer press. Returns a [`UiRequest`] when the host UI
    /// needs to follow up (currently only the edge-delete confirmation).
    pub fn pointer_down(&mut self, store: &mut MapStore, event: PointerEvent) -> Option<UiRequest> {
        let target = hit_test(store, event.position, self.bounds());

        // An in-flight connect gesture consumes the press. Only a primary
        // press on a node completes it; a secondary press cancels outright,
        // and an edge press falls back to plain edge selection (which also
        // resets the mode).
        if store.mode().is_connecting() {
            if event.button == PointerButton::Secondary {
                store.cancel_connection();
                return None;
            }
            match target {
                HitTarget::Node(node) => {
                    store.complete_connection(node);
                }
                HitTarget::Edge(edge) => {
                    store.select_edge(Some(edge));
                }
                HitTarget::Canvas => {
                    store.cancel_connection();
                }
            }
            return None;
        }

        match (target, event.button) {
            (HitTarget::Node(node), PointerButton::Primary) => {
                let map = screen_to_map(event.position, self.bounds());
                // Store lookup cannot fail right after a hit, but a stale
                // index entry must not panic the event loop.
                let Some(hit_node) = store.node(node) else {
                    tracing::debug!(%node, "pointer_down: hit node vanished, ignoring");
                    return None;
                };
                let grab = (hit_node.x - map.x, hit_node.y - map.y);
                store.start_drag(node, grab);
            }
            (HitTarget::Node(node), PointerButton::Secondary) => {
                store.start_connection(node);
            }
            (HitTarget::Edge(edge), PointerButton::Primary) => {
                store.select_edge(Some(edge));
                if event.click_count >= 2 {
                    return Some(UiRequest::ConfirmDeleteEdge(edge));
                }
            }
            (HitTarget::Edge(_), PointerButton::Secondary) => {}
            (HitTarget::Canvas, PointerButton::Primary) => {
                store.select_node(None);
            }
            (HitTarget::Canvas, PointerButton::Secondary) => {}
        }
        None
    }
}
