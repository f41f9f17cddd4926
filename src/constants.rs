//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values so the canvas engine,
//! settings defaults and tests all agree on them.

use crate::geometry::Size;

// ============================================================================
// Node Defaults
// ============================================================================

/// Minimum node width in canvas units
pub const MIN_NODE_WIDTH: f32 = 150.0;

/// Minimum node height in canvas units
pub const MIN_NODE_HEIGHT: f32 = 75.0;

/// Minimum node size; also the size given to new nodes
pub const MIN_NODE_SIZE: Size = Size::new(MIN_NODE_WIDTH, MIN_NODE_HEIGHT);

// ============================================================================
// Canvas
// ============================================================================

/// Logical canvas extent
pub const DEFAULT_CANVAS_SIZE: Size = Size::new(2000.0, 2000.0);

/// Distance the pointer must travel before a press becomes a drag.
/// Zero means the first movement sample starts the drag.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 0.0;

/// Extent of the square resize handle at a node's bottom-right corner
pub const DEFAULT_RESIZE_HANDLE_SIZE: f32 = 30.0;

// ============================================================================
// Panel Layout
// ============================================================================

/// Default width of the file navigation panel
pub const DEFAULT_NAVIGATION_WIDTH: f32 = 200.0;

/// Default width of the code preview panel
pub const DEFAULT_CODE_CANVAS_WIDTH: f32 = 350.0;

/// Minimum width for either side panel
pub const MIN_PANEL_WIDTH: f32 = 100.0;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "codingnode";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";
