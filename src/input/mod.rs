//! Pointer gesture handling for the node canvas.
//!
//! This module turns raw pointer events into committed node mutations.
//!
//! ## Architecture
//!
//! Each node has at most one active gesture, tracked by an explicit state
//! machine (`GestureState`). A gesture either moves or resizes its node,
//! decided once by where the pointer went down. Malformed sequences (a move
//! or end with no start, a second start while active) are ignored.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine enum and helper methods
//! - `pointer_down` - Hit testing and gesture start
//! - `drag` - Movement samples (clamping, overlap feedback, resize preview)
//! - `pointer_up` - Commit on end, discard on cancel

mod drag;
mod pointer_down;
mod pointer_up;
mod state;

pub use state::GestureState;
