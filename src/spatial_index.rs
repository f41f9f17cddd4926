//! Spatial Index Module
//!
//! R-tree over committed node rectangles, used for pointer hit testing and
//! as the broad phase of the drag overlap check. Queries are inclusive on
//! edges, matching [`crate::geometry::rectangles_overlap`].

use crate::geometry::{Point, Rect};
use crate::types::NodeId;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A node's committed bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub node_id: NodeId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(node_id: NodeId, rect: Rect) -> Self {
        Self {
            node_id,
            min_x: rect.left(),
            min_y: rect.top(),
            max_x: rect.right(),
            max_y: rect.bottom(),
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}

/// Spatial index for canvas nodes.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<NodeId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Index `rect` for `node_id`, replacing any previous entry. A rect
    /// with a non-finite edge has no valid envelope and is left out.
    pub fn insert(&mut self, node_id: NodeId, rect: Rect) {
        if let Some(old_entry) = self.entries.remove(&node_id) {
            self.tree.remove(&old_entry);
        }
        if !rect.is_finite() {
            return;
        }

        let entry = SpatialEntry::new(node_id, rect);
        self.tree.insert(entry);
        self.entries.insert(node_id, entry);
    }

    pub fn remove(&mut self, node_id: NodeId) -> bool {
        if let Some(entry) = self.entries.remove(&node_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Nodes whose rectangle contains `point`.
    pub fn query_point(&self, point: Point) -> Vec<NodeId> {
        let envelope = AABB::from_point([point.x, point.y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains_point(point.x, point.y))
            .map(|entry| entry.node_id)
            .collect()
    }

    /// Nodes whose rectangle intersects `rect` (edges touching included).
    pub fn query_rect(&self, rect: Rect) -> Vec<NodeId> {
        let envelope = AABB::from_corners([rect.left(), rect.top()], [rect.right(), rect.bottom()]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.node_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, rects: I)
    where
        I: Iterator<Item = (NodeId, Rect)>,
    {
        let entries: Vec<SpatialEntry> = rects
            .filter(|(_, rect)| rect.is_finite())
            .map(|(id, rect)| SpatialEntry::new(id, rect))
            .collect();

        self.entries = entries.iter().map(|e| (e.node_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
