//! Canvas session - the owner of all node controllers.
//!
//! The session keeps nodes in display order (insertion order, back to front),
//! enforces that at most one node is selected, owns the viewport and routes
//! gesture events (see [`crate::input`]).
//!
//! Selection is stored as a [`NodeId`] rather than a reference. Removing a
//! node clears the selection if it pointed there, so the selected id always
//! names a node that is still in the session.

use crate::constants::{
    DEFAULT_DRAG_THRESHOLD, DEFAULT_RESIZE_HANDLE_SIZE, MIN_NODE_SIZE,
};
use crate::events::{CanvasEvent, EventBus, SubscriptionId};
use crate::geometry::{Point, Rect, Size};
use crate::input::GestureState;
use crate::node_controller::NodeController;
use crate::profile_scope;
use crate::settings::CanvasSettings;
use crate::spatial_index::SpatialIndex;
use crate::types::{Node, NodeId, NodeSnapshot};
use crate::viewport::CanvasViewport;
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// The subset of settings the canvas engine reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    pub min_node_size: Size,
    pub canvas_size: Size,
    pub drag_threshold: f32,
    pub resize_handle_size: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_node_size: MIN_NODE_SIZE,
            canvas_size: crate::constants::DEFAULT_CANVAS_SIZE,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            resize_handle_size: DEFAULT_RESIZE_HANDLE_SIZE,
        }
    }
}

impl From<&CanvasSettings> for SessionConfig {
    fn from(settings: &CanvasSettings) -> Self {
        Self {
            min_node_size: settings.min_node_size,
            canvas_size: settings.canvas_size,
            drag_threshold: settings.drag_threshold,
            resize_handle_size: settings.resize_handle_size,
        }
    }
}

pub struct CanvasSession {
    pub(crate) nodes: Vec<NodeController>,
    selected: Option<NodeId>,
    pub(crate) viewport: CanvasViewport,
    pub(crate) config: SessionConfig,
    spatial_index: SpatialIndex,
    spatial_dirty: bool,
    /// Active gestures; a node absent from the map is idle
    pub(crate) gestures: HashMap<NodeId, GestureState>,
    events: EventBus,
}

impl Default for CanvasSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl CanvasSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            nodes: Vec::new(),
            selected: None,
            viewport: CanvasViewport::new(config.canvas_size),
            config,
            spatial_index: SpatialIndex::new(),
            spatial_dirty: false,
            gestures: HashMap::new(),
            events: EventBus::new(),
        }
    }

    /// A session seeded with the two sample snippets shown on first launch.
    pub fn with_default_nodes(config: SessionConfig) -> Self {
        let mut session = Self::new(config);
        session.add_node(Node::new(
            "def add(a, b):\n    return a + b",
            Point::new(200.0, 200.0),
        ));
        session.add_node(Node::new(
            "def subtract(a, b):\n    return a - b",
            Point::new(100.0, 100.0),
        ));
        session
    }

    // ------------------------------------------------------------------
    // Events & configuration
    // ------------------------------------------------------------------

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn subscribe(
        &self,
        listener: impl FnMut(&CanvasEvent) + Send + 'static,
    ) -> SubscriptionId {
        self.events.subscribe(listener)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Apply new settings. Existing nodes are re-floored at the new minimum.
    pub fn set_config(&mut self, config: SessionConfig) {
        self.config = config;
        self.viewport.total_size = config.canvas_size;
        for controller in &mut self.nodes {
            controller.set_min_size(config.min_node_size);
        }
        self.mark_dirty();
    }

    // ------------------------------------------------------------------
    // Viewport
    // ------------------------------------------------------------------

    pub fn viewport(&self) -> &CanvasViewport {
        &self.viewport
    }

    /// Called by the host whenever the canvas surface is measured.
    pub fn set_visible_size(&mut self, size: Size) {
        if self.viewport.set_visible_size(size) {
            trace!(width = size.width, height = size.height, "Viewport resized");
            self.events.emit(CanvasEvent::ViewportResized(size));
        }
    }

    // ------------------------------------------------------------------
    // Node set
    // ------------------------------------------------------------------

    /// Append a node on top of the z-order. A node whose id is already
    /// present is not added again.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id();
        if self.index_of(id).is_some() {
            warn!(node = %id, "Node already on canvas, ignoring add");
            return id;
        }

        let controller =
            NodeController::with_events(node, self.config.min_node_size, self.events.clone());
        self.spatial_index.insert(id, controller.rect());
        self.nodes.push(controller);
        debug!(node = %id, count = self.nodes.len(), "Node added");
        self.events.emit(CanvasEvent::NodeAdded(id));
        id
    }

    /// Remove a node, dropping its selection and any in-flight gesture.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let index = self.index_of(id)?;

        if self.gestures.remove(&id).is_some() {
            debug!(node = %id, "Dropping active gesture of removed node");
        }
        if self.selected == Some(id) {
            self.selected = None;
            self.events.emit(CanvasEvent::SelectionChanged {
                previous: Some(id),
                current: None,
            });
        }

        let controller = self.nodes.remove(index);
        self.spatial_index.remove(id);
        debug!(node = %id, count = self.nodes.len(), "Node removed");
        self.events.emit(CanvasEvent::NodeRemoved(id));
        Some(controller.into_node())
    }

    /// Controllers in display order, back to front.
    pub fn nodes(&self) -> &[NodeController] {
        &self.nodes
    }

    pub fn snapshots(&self) -> Vec<NodeSnapshot> {
        self.nodes.iter().map(NodeController::snapshot).collect()
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeController> {
        self.nodes.iter().find(|c| c.id() == id)
    }

    /// Mutable access for external edits. Any committed geometry may change,
    /// so the spatial index is rebuilt before its next query.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut NodeController> {
        let index = self.index_of(id)?;
        self.spatial_dirty = true;
        Some(&mut self.nodes[index])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|c| c.id() == id)
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn selected_node(&self) -> Option<&NodeController> {
        self.selected.and_then(|id| self.node(id))
    }

    /// Text shown in the code preview panel; `None` shows the placeholder.
    pub fn selected_content(&self) -> Option<&str> {
        self.selected_node().map(NodeController::content)
    }

    /// Make `id` the only selected node. Returns false (and changes nothing)
    /// if the id is not in this session.
    pub fn select_node(&mut self, id: NodeId) -> bool {
        let Some(index) = self.index_of(id) else {
            debug!(node = %id, "Ignoring selection of node not on canvas");
            return false;
        };

        if self.selected == Some(id) {
            self.nodes[index].select();
            return true;
        }

        let previous = self.selected.take();
        if let Some(prev) = previous.and_then(|p| self.index_of(p)) {
            self.nodes[prev].deselect();
        }
        self.nodes[index].select();
        self.selected = Some(id);

        trace!(node = %id, "Node selected");
        self.events.emit(CanvasEvent::SelectionChanged {
            previous,
            current: Some(id),
        });
        true
    }

    pub fn deselect_all(&mut self) {
        let Some(previous) = self.selected.take() else {
            return;
        };
        if let Some(index) = self.index_of(previous) {
            self.nodes[index].deselect();
        }
        self.events.emit(CanvasEvent::SelectionChanged {
            previous: Some(previous),
            current: None,
        });
    }

    // ------------------------------------------------------------------
    // Spatial queries over committed state
    // ------------------------------------------------------------------

    pub(crate) fn mark_dirty(&mut self) {
        self.spatial_dirty = true;
    }

    fn refresh_spatial_index(&mut self) {
        if self.spatial_dirty {
            profile_scope!("spatial_rebuild");
            self.spatial_index
                .rebuild(self.nodes.iter().map(|c| (c.id(), c.rect())));
            self.spatial_dirty = false;
        }
    }

    /// True if `rect` overlaps the committed rectangle of any node other
    /// than `id`. In-flight drag offsets of other nodes are never consulted.
    pub fn overlaps_other_nodes(&mut self, id: NodeId, rect: Rect) -> bool {
        self.refresh_spatial_index();
        self.spatial_index
            .query_rect(rect)
            .into_iter()
            .filter(|other| *other != id)
            .filter_map(|other| self.node(other))
            .any(|other| rect.overlaps(&other.rect()))
    }

    /// Node ids whose committed rectangle contains `point`, front to back.
    pub(crate) fn nodes_at(&mut self, point: Point) -> Vec<NodeId> {
        self.refresh_spatial_index();
        let candidates = self.spatial_index.query_point(point);
        self.nodes
            .iter()
            .rev()
            .map(NodeController::id)
            .filter(|id| candidates.contains(id))
            .collect()
    }
}
