//! Per-node mutable wrapper.
//!
//! A [`NodeController`] owns exactly one [`Node`] and adds the selection and
//! resizing flags plus the transient state of an in-flight gesture. All
//! mutators notify the shared [`EventBus`] before returning.
//!
//! Selection exclusivity is not enforced here; that is the session's job.

use crate::events::{CanvasEvent, EventBus};
use crate::geometry::{Point, Rect, Size};
use crate::types::{Node, NodeId, NodeSnapshot};
use tracing::debug;

/// Uncommitted state produced by a drag or resize gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Transient {
    /// Clamped displacement from the committed position
    drag_offset: Point,
    is_overlapping: bool,
    /// Floored size shown while a resize handle is dragged
    resize_preview: Option<Size>,
}

#[derive(Debug)]
pub struct NodeController {
    node: Node,
    is_selected: bool,
    is_resizing: bool,
    min_size: Size,
    transient: Transient,
    events: EventBus,
}

impl NodeController {
    /// Wrap `node`, flooring its size at `min_size`. The controller gets its
    /// own event bus; use [`NodeController::events`] to observe it.
    pub fn new(node: Node, min_size: Size) -> Self {
        Self::with_events(node, min_size, EventBus::new())
    }

    pub(crate) fn with_events(mut node: Node, min_size: Size, events: EventBus) -> Self {
        node.size = node.size.finite_or(min_size).max(min_size);
        Self {
            node,
            is_selected: false,
            is_resizing: false,
            min_size,
            transient: Transient::default(),
            events,
        }
    }

    pub fn id(&self) -> NodeId {
        self.node.id()
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub(crate) fn into_node(self) -> Node {
        self.node
    }

    pub fn content(&self) -> &str {
        &self.node.content
    }

    /// Committed center position.
    pub fn position(&self) -> Point {
        self.node.position
    }

    /// Committed size.
    pub fn size(&self) -> Size {
        self.node.size
    }

    /// Committed rectangle. Cross-node overlap queries only ever read this.
    pub fn rect(&self) -> Rect {
        self.node.rect()
    }

    pub fn min_size(&self) -> Size {
        self.min_size
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn is_resizing(&self) -> bool {
        self.is_resizing
    }

    pub fn is_overlapping(&self) -> bool {
        self.transient.is_overlapping
    }

    pub fn drag_offset(&self) -> Point {
        self.transient.drag_offset
    }

    /// Position as currently displayed: committed plus drag offset.
    pub fn displayed_position(&self) -> Point {
        self.node.position + self.transient.drag_offset
    }

    /// Size as currently displayed: the resize preview if one is active.
    pub fn displayed_size(&self) -> Size {
        self.transient.resize_preview.unwrap_or(self.node.size)
    }

    pub fn snapshot(&self) -> NodeSnapshot {
        NodeSnapshot {
            id: self.id(),
            content: self.node.content.clone(),
            position: self.displayed_position(),
            size: self.displayed_size(),
            is_selected: self.is_selected,
            is_resizing: self.is_resizing,
            is_overlapping: self.transient.is_overlapping,
        }
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    fn notify(&self) {
        self.events.emit(CanvasEvent::NodeChanged(self.snapshot()));
    }

    // ------------------------------------------------------------------
    // Public mutators
    // ------------------------------------------------------------------

    pub fn select(&mut self) {
        if !self.is_selected {
            self.is_selected = true;
            self.notify();
        }
    }

    pub fn deselect(&mut self) {
        if self.is_selected {
            self.is_selected = false;
            self.notify();
        }
    }

    /// Overwrite the committed position. Does not clamp. A non-finite
    /// position is dropped and the node stays where it is.
    pub fn set_position(&mut self, position: Point) {
        if !position.is_finite() {
            debug!(node = %self.id(), "Ignoring non-finite position");
            return;
        }
        self.node.position = position;
        self.notify();
    }

    /// Resize, flooring each dimension at the minimum. Non-finite
    /// dimensions fall back to the minimum. Returns the size actually applied.
    pub fn request_resize(&mut self, size: Size) -> Size {
        let effective = size.finite_or(self.min_size).max(self.min_size);
        self.node.size = effective;
        self.notify();
        effective
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.node.content = content.into();
        self.notify();
    }

    pub fn start_resizing(&mut self) {
        if !self.is_resizing {
            self.is_resizing = true;
            self.notify();
        }
    }

    pub fn stop_resizing(&mut self) {
        if self.is_resizing {
            self.is_resizing = false;
            self.notify();
        }
    }

    /// Change the minimum size, re-flooring the committed size and any
    /// resize preview in flight.
    pub fn set_min_size(&mut self, min_size: Size) {
        self.min_size = min_size;
        let floored = self.node.size.max(min_size);
        let preview = self.transient.resize_preview.map(|p| p.max(min_size));
        if floored != self.node.size || preview != self.transient.resize_preview {
            self.node.size = floored;
            self.transient.resize_preview = preview;
            self.notify();
        }
    }

    // ------------------------------------------------------------------
    // Gesture plumbing
    // ------------------------------------------------------------------

    pub(crate) fn set_drag_preview(&mut self, offset: Point, is_overlapping: bool) {
        self.transient.drag_offset = offset;
        self.transient.is_overlapping = is_overlapping;
        self.notify();
    }

    /// Fold the drag offset into the committed position and clear transient
    /// state in one step, emitting a single notification.
    pub(crate) fn commit_drag(&mut self) -> Point {
        self.node.position = self.node.position + self.transient.drag_offset;
        self.transient = Transient::default();
        self.notify();
        self.node.position
    }

    pub(crate) fn set_resize_preview(&mut self, size: Size) {
        self.transient.resize_preview = Some(size.finite_or(self.min_size).max(self.min_size));
        self.is_resizing = true;
        self.notify();
    }

    /// Apply the resize preview (if any) and leave resizing mode.
    pub(crate) fn commit_resize(&mut self) -> Size {
        if let Some(preview) = self.transient.resize_preview.take() {
            self.node.size = preview.max(self.min_size);
        }
        self.transient = Transient::default();
        self.is_resizing = false;
        self.notify();
        self.node.size
    }

    /// Drop all uncommitted gesture state.
    pub(crate) fn discard_transient(&mut self) {
        self.transient = Transient::default();
        self.is_resizing = false;
        self.notify();
    }
}
