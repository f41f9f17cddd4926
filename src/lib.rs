//! Canvas interaction engine for a node-based code snippet editor.
//!
//! The core is [`session::CanvasSession`]: it owns the nodes, keeps
//! selection exclusive and turns pointer gestures into clamped, committed
//! node positions and sizes. Rendering is left to the host, which reads
//! [`types::NodeSnapshot`]s and subscribes to [`events::CanvasEvent`]s.

pub mod app_state;
pub mod constants;
pub mod events;
pub mod file_tree;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod logging;
pub mod node_controller;
pub mod perf;
pub mod session;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;
pub mod types;
pub mod viewport;

pub use geometry::{Point, Rect, Size, clamp_center_to_bounds, rectangles_overlap};
pub use session::CanvasSession;
pub use types::{GestureTarget, Node, NodeId, NodeSnapshot};
