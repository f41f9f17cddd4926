//! Pointer down - hit testing and gesture start.

use crate::geometry::Point;
use crate::input::GestureState;
use crate::session::CanvasSession;
use crate::types::{GestureTarget, NodeId};
use tracing::debug;

impl CanvasSession {
    /// Topmost node under `point`, and whether the point is on its resize
    /// handle (the square of `resize_handle_size` at the bottom-right corner).
    pub fn hit_test(&mut self, point: Point) -> Option<(NodeId, GestureTarget)> {
        let id = self.nodes_at(point).into_iter().next()?;
        let rect = self.node(id)?.rect();

        let handle = self.config.resize_handle_size;
        let on_handle = point.x >= rect.right() - handle && point.y >= rect.bottom() - handle;
        let target = if on_handle {
            GestureTarget::ResizeHandle
        } else {
            GestureTarget::Body
        };
        Some((id, target))
    }

    /// Route a raw pointer press. Starts a gesture on the hit node; a press
    /// on empty canvas clears the selection.
    pub fn pointer_down(&mut self, point: Point) -> Option<NodeId> {
        match self.hit_test(point) {
            Some((id, target)) => {
                self.on_gesture_start(id, point, target);
                Some(id)
            }
            None => {
                self.deselect_all();
                None
            }
        }
    }

    /// Begin a gesture on `id`. Nothing visible happens until the first
    /// movement sample; a second start while one is active is ignored.
    pub fn on_gesture_start(&mut self, id: NodeId, origin: Point, target: GestureTarget) {
        if self.index_of(id).is_none() {
            debug!(node = %id, "Ignoring gesture start on node not on canvas");
            return;
        }
        if self.gestures.contains_key(&id) {
            debug!(node = %id, "Ignoring duplicate gesture start");
            return;
        }
        self.gestures
            .insert(id, GestureState::Pending { target, origin });
    }

    /// Current gesture state of a node.
    pub fn gesture_state(&self, id: NodeId) -> GestureState {
        self.gestures.get(&id).copied().unwrap_or_default()
    }
}
