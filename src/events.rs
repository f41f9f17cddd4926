//! Change notification for the rendering layer.
//!
//! Every mutation in the canvas core is announced synchronously, before the
//! mutating call returns. Listeners are called without the listener list
//! locked, so a callback may subscribe, unsubscribe or emit. A listener that
//! is already running is not re-entered by a nested emit.

use crate::geometry::Size;
use crate::types::{NodeId, NodeSnapshot};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// Something observable changed on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasEvent {
    /// Position, size, flags or transient state of one node changed
    NodeChanged(NodeSnapshot),
    NodeAdded(NodeId),
    NodeRemoved(NodeId),
    SelectionChanged {
        previous: Option<NodeId>,
        current: Option<NodeId>,
    },
    ViewportResized(Size),
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<Mutex<dyn FnMut(&CanvasEvent) + Send>>;

static NEXT_SUBSCRIPTION: AtomicU64 = AtomicU64::new(1);

/// Shared listener list. Cloning yields another handle to the same list,
/// so a session and all of its controllers notify the same subscribers.
#[derive(Clone, Default)]
pub struct EventBus {
    listeners: Arc<Mutex<Vec<(SubscriptionId, Listener)>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl FnMut(&CanvasEvent) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(NEXT_SUBSCRIPTION.fetch_add(1, Ordering::Relaxed));
        let listener: Listener = Arc::new(Mutex::new(listener));
        self.listeners.lock().push((id, listener));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(sub, _)| *sub != id);
        listeners.len() != before
    }

    /// Deliver `event` to the listeners subscribed when the call began.
    pub fn emit(&self, event: CanvasEvent) {
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            match listener.try_lock() {
                Some(mut callback) => (&mut *callback)(&event),
                None => trace!("Skipping listener already handling an event"),
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
