//! Core types for the node canvas.
//!
//! This module defines the node record owned by each controller, the
//! identifier used to address nodes across the session, and the snapshot
//! handed to the rendering layer.

use crate::constants::MIN_NODE_SIZE;
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Identity
// ============================================================================

/// Opaque, immutable node identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Mint a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, e.g. one supplied by a document source.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Node
// ============================================================================

/// One canvas item: a code snippet with a center position and a size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    /// Snippet text; edited by an external editor
    pub content: String,
    /// Center of the node in canvas units
    pub position: Point,
    pub size: Size,
}

impl Node {
    /// Create a node with the default (minimum) size.
    pub fn new(content: impl Into<String>, position: Point) -> Self {
        Self::with_size(content, position, MIN_NODE_SIZE)
    }

    pub fn with_size(content: impl Into<String>, position: Point, size: Size) -> Self {
        Self {
            id: NodeId::new(),
            content: content.into(),
            position,
            size,
        }
    }

    /// Replace the generated id, for nodes restored from a document source.
    pub fn with_id(mut self, id: NodeId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Committed rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Everything the rendering layer needs to draw one node.
///
/// `position` and `size` are the *displayed* values: committed state plus
/// any in-flight drag offset or resize preview.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub content: String,
    pub position: Point,
    pub size: Size,
    pub is_selected: bool,
    pub is_resizing: bool,
    pub is_overlapping: bool,
}

/// Where a pointer interaction started on a node. Decides whether the
/// gesture moves or resizes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureTarget {
    Body,
    ResizeHandle,
}

impl Default for GestureTarget {
    fn default() -> Self {
        Self::Body
    }
}
