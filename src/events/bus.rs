//! Event bus: per-kind subscriber lists with synchronous fan-out.
//!
//! Handlers are invoked in registration order on the emitting call, with
//! the event and a shared borrow of the game state. There is no queueing,
//! no result aggregation and no backpressure.
//!
//! A handler that panics is caught and logged; the remaining handlers for
//! the event still run.

use std::panic::{self, AssertUnwindSafe};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::event::{EventKind, GameEvent};
use crate::core::GameState;

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u64);

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

/// A subscriber callback.
pub type Handler = Box<dyn FnMut(&GameEvent, &GameState)>;

struct Listener {
    id: ListenerId,
    handler: Handler,
}

/// Registry of event handlers keyed by [`EventKind`].
#[derive(Default)]
pub struct EventBus {
    listeners: FxHashMap<EventKind, Vec<Listener>>,
    next_id: u64,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one kind of event.
    ///
    /// Handlers for the same kind run in the order they were registered.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> ListenerId
    where
        F: FnMut(&GameEvent, &GameState) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;

        self.listeners.entry(kind).or_default().push(Listener {
            id,
            handler: Box::new(handler),
        });
        id
    }

    /// Remove a handler. Returns false if it was not registered for `kind`.
    pub fn unsubscribe(&mut self, kind: EventKind, id: ListenerId) -> bool {
        let Some(list) = self.listeners.get_mut(&kind) else {
            return false;
        };
        let Some(pos) = list.iter().position(|l| l.id == id) else {
            return false;
        };

        list.remove(pos);
        if list.is_empty() {
            self.listeners.remove(&kind);
        }
        true
    }

    /// Number of handlers registered for `kind`.
    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Check if no handlers are registered at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver an event to every handler registered for its kind.
    pub fn emit(&mut self, event: &GameEvent, state: &GameState) {
        let kind = event.kind();
        let Some(list) = self.listeners.get_mut(&kind) else {
            return;
        };

        for listener in list.iter_mut() {
            let handler = &mut listener.handler;
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler(event, state)));
            if outcome.is_err() {
                tracing::error!(%kind, listener = %listener.id, "event handler panicked");
            }
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: Vec<_> = EventKind::ALL
            .iter()
            .map(|&k| (k, self.listener_count(k)))
            .filter(|&(_, n)| n > 0)
            .collect();
        f.debug_struct("EventBus").field("listeners", &counts).finish()
    }
}
