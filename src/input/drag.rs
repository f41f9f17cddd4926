//! Movement samples - drag clamping, overlap feedback, resize preview.
//!
//! ## Performance Notes
//!
//! Movement arrives at pointer rate (60+ samples per second). Each sample
//! does one clamp, one R-tree query over committed rectangles and one
//! notification. Samples are applied strictly in arrival order; nothing is
//! coalesced.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::geometry::{Point, Rect, clamp_center_to_bounds};
use crate::input::GestureState;
use crate::profile_scope;
use crate::session::CanvasSession;
use crate::types::{GestureTarget, NodeId};
use tracing::{debug, trace};

impl CanvasSession {
    /// Feed one movement sample. `translation` is cumulative since pointer
    /// down, not relative to the previous sample.
    pub fn on_gesture_move(&mut self, id: NodeId, translation: Point) {
        profile_scope!("on_gesture_move");

        if !translation.is_finite() {
            debug!(node = %id, "Ignoring non-finite movement sample");
            return;
        }

        let Some(state) = self.gestures.get(&id).copied() else {
            trace!(node = %id, "Ignoring move without gesture start");
            return;
        };

        let next = match state {
            GestureState::Idle => return,
            GestureState::Pending { target, .. } => {
                if translation.length() < self.config.drag_threshold {
                    return;
                }
                self.begin_active_gesture(id, target, translation)
            }
            GestureState::Dragging { .. } => GestureState::Dragging { translation },
            GestureState::Resizing { start_size, .. } => GestureState::Resizing {
                start_size,
                translation,
            },
        };

        self.gestures.insert(id, next);

        match next {
            GestureState::Dragging { translation } => self.update_drag(id, translation),
            GestureState::Resizing {
                start_size,
                translation,
            } => {
                if let Some(index) = self.index_of(id) {
                    self.nodes[index].set_resize_preview(start_size.expanded_by(translation));
                }
            }
            GestureState::Idle | GestureState::Pending { .. } => {}
        }
    }

    /// Leave `Pending`: a body press becomes a drag (and selects the node),
    /// a handle press becomes a resize.
    fn begin_active_gesture(
        &mut self,
        id: NodeId,
        target: GestureTarget,
        translation: Point,
    ) -> GestureState {
        match target {
            GestureTarget::Body => {
                debug!(node = %id, "Drag started");
                self.select_node(id);
                GestureState::Dragging { translation }
            }
            GestureTarget::ResizeHandle => {
                let start_size = self
                    .node(id)
                    .map(|c| c.size())
                    .unwrap_or(self.config.min_node_size);
                debug!(node = %id, width = start_size.width, height = start_size.height, "Resize started");
                if let Some(index) = self.index_of(id) {
                    self.nodes[index].start_resizing();
                }
                GestureState::Resizing {
                    start_size,
                    translation,
                }
            }
        }
    }

    fn update_drag(&mut self, id: NodeId, translation: Point) {
        let Some(controller) = self.node(id) else {
            return;
        };
        let position = controller.position();
        let size = controller.size();

        let candidate = position + translation;
        let clamped = match self.viewport.clamp_bounds() {
            Some(bounds) => clamp_center_to_bounds(candidate, size, bounds),
            None => candidate,
        };

        let is_overlapping = {
            profile_scope!("overlap_check");
            self.overlaps_other_nodes(id, Rect::new(clamped, size))
        };
        trace!(node = %id, x = clamped.x, y = clamped.y, is_overlapping, "Drag sample");

        if let Some(index) = self.index_of(id) {
            self.nodes[index].set_drag_preview(clamped - position, is_overlapping);
        }
    }
}
