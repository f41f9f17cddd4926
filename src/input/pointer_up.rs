//! Pointer up / cancel - commit or discard the gesture.

use crate::input::GestureState;
use crate::session::CanvasSession;
use crate::types::NodeId;
use tracing::{debug, trace};

impl CanvasSession {
    /// End the gesture on `id`, committing any drag or resize. Overlap never
    /// blocks the commit. An end without a start is ignored.
    pub fn on_gesture_end(&mut self, id: NodeId) {
        let Some(state) = self.gestures.remove(&id) else {
            trace!(node = %id, "Ignoring gesture end without start");
            return;
        };
        let Some(index) = self.index_of(id) else {
            return;
        };

        match state {
            GestureState::Dragging { .. } => {
                let position = self.nodes[index].commit_drag();
                debug!(node = %id, x = position.x, y = position.y, "Drag committed");
                self.mark_dirty();
            }
            GestureState::Resizing { .. } => {
                let size = self.nodes[index].commit_resize();
                debug!(node = %id, width = size.width, height = size.height, "Resize committed");
                self.mark_dirty();
            }
            GestureState::Pending { .. } | GestureState::Idle => {
                // press and release without movement
            }
        }
    }

    /// Abandon the gesture on `id`; the node returns to its pre-gesture
    /// position and size.
    pub fn on_gesture_cancel(&mut self, id: NodeId) {
        let Some(state) = self.gestures.remove(&id) else {
            trace!(node = %id, "Ignoring gesture cancel without start");
            return;
        };
        if !state.is_active() {
            return;
        }
        if let Some(index) = self.index_of(id) {
            self.nodes[index].discard_transient();
            debug!(node = %id, "Gesture cancelled");
        }
    }

    /// Cancel every in-flight gesture, e.g. when the window loses focus.
    pub fn cancel_all_gestures(&mut self) {
        let ids: Vec<NodeId> = self.gestures.keys().copied().collect();
        for id in ids {
            self.on_gesture_cancel(id);
        }
    }
}
