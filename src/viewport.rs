//! Canvas extent and the currently visible region.

use crate::constants::DEFAULT_CANVAS_SIZE;
use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Logical canvas size plus the measured size of the hosting surface.
///
/// `visible_size` is zero until the first layout pass reports real
/// dimensions; a zero, negative or non-finite viewport means "no valid
/// viewport yet" and drag clamping is skipped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasViewport {
    pub total_size: Size,
    visible_size: Size,
}

impl Default for CanvasViewport {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_SIZE)
    }
}

impl CanvasViewport {
    pub fn new(total_size: Size) -> Self {
        Self {
            total_size,
            visible_size: Size::ZERO,
        }
    }

    pub fn visible_size(&self) -> Size {
        self.visible_size
    }

    /// Record a new measured surface size. Returns true if it changed.
    pub fn set_visible_size(&mut self, size: Size) -> bool {
        if self.visible_size == size {
            return false;
        }
        self.visible_size = size;
        true
    }

    pub fn has_valid_viewport(&self) -> bool {
        self.visible_size.is_finite() && !self.visible_size.is_empty()
    }

    /// Bounds to clamp drags against, if the viewport has been measured.
    pub fn clamp_bounds(&self) -> Option<Size> {
        self.has_valid_viewport().then_some(self.visible_size)
    }
}
