//! Gesture state machine - one per node with an active pointer interaction.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Pending      (pointer down on a node)
//! Pending  -> Dragging     (first movement sample past the drag threshold, body)
//! Pending  -> Resizing     (first movement sample past the drag threshold, handle)
//! Dragging -> Dragging     (movement sample)
//! Resizing -> Resizing     (movement sample)
//!
//! Any -> Idle              (pointer up commits, cancel discards)
//! ```

use crate::geometry::{Point, Size};
use crate::types::GestureTarget;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No active gesture
    #[default]
    Idle,

    /// Pointer is down but has not moved far enough to start a drag
    Pending {
        /// What the pointer went down on
        target: GestureTarget,
        /// Pointer-down location in canvas units
        origin: Point,
    },

    /// Moving the node
    Dragging {
        /// Cumulative pointer translation since pointer down
        translation: Point,
    },

    /// Dragging the resize handle
    Resizing {
        /// Committed size when the resize began
        start_size: Size,
        /// Cumulative pointer translation since pointer down
        translation: Point,
    },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// True once the gesture has produced transient state on its node.
    pub fn is_active(&self) -> bool {
        self.is_dragging() || self.is_resizing()
    }

    /// Cumulative translation of a drag or resize.
    pub fn translation(&self) -> Point {
        match self {
            Self::Dragging { translation } | Self::Resizing { translation, .. } => *translation,
            Self::Idle | Self::Pending { .. } => Point::ZERO,
        }
    }

    pub fn target(&self) -> Option<GestureTarget> {
        match self {
            Self::Idle => None,
            Self::Pending { target, .. } => Some(*target),
            Self::Dragging { .. } => Some(GestureTarget::Body),
            Self::Resizing { .. } => Some(GestureTarget::ResizeHandle),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
