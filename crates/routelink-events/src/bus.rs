use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::event::RelationEvent;

/// Handle to one registered callback, returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Handler = Box<dyn FnMut(&RelationEvent)>;

struct Entry {
    id: u64,
    kind: &'static str,
    // Empty while the handler is executing, so handlers may re-enter the bus.
    handler: Option<Handler>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Synchronous event bus.
///
/// Cheap to clone; clones share one registration list. [`emit`](Self::emit)
/// invokes every handler registered for the event's kind, on the emitting
/// thread, in registration order. Handlers may subscribe, unsubscribe, or
/// emit on the same bus from inside a dispatch:
///
/// - handlers registered during a dispatch do not see the in-flight event;
/// - handlers unsubscribed during a dispatch are skipped for the rest of it;
/// - a handler is never re-entered by its own (transitive) emissions.
///
/// Single-threaded: the handle is not `Send`. The host dispatches one event
/// at a time.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<Inner>>,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for one event kind.
    pub fn subscribe<F>(&self, kind: &'static str, handler: F) -> Subscription
    where
        F: FnMut(&RelationEvent) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.entries.push(Entry {
            id,
            kind,
            handler: Some(Box::new(handler)),
        });
        Subscription(id)
    }

    /// Remove a callback. Returns false if it was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.entries.len();
        inner.entries.retain(|entry| entry.id != subscription.0);
        inner.entries.len() != before
    }

    /// Dispatch an event to every handler registered for its kind.
    pub fn emit(&self, event: &RelationEvent) {
        // Snapshot matching ids up front: handlers registered during this
        // dispatch must not see the in-flight event.
        let ids: Vec<u64> = self
            .inner
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.kind == event.kind)
            .map(|entry| entry.id)
            .collect();

        trace!(
            kind = event.kind,
            relation = %event.relation,
            handlers = ids.len(),
            "dispatching event"
        );

        for id in ids {
            // Take the handler out of the shared list while it runs, so it
            // can re-enter the bus without tripping the RefCell.
            let handler = {
                let mut inner = self.inner.borrow_mut();
                inner
                    .entries
                    .iter_mut()
                    .find(|entry| entry.id == id)
                    .and_then(|entry| entry.handler.take())
            };
            let Some(mut handler) = handler else {
                // Unsubscribed earlier in this dispatch, or currently running.
                continue;
            };

            handler(event);

            let mut inner = self.inner.borrow_mut();
            if let Some(entry) = inner.entries.iter_mut().find(|entry| entry.id == id) {
                entry.handler = Some(handler);
            }
            // Entry gone: the handler unsubscribed itself; drop it here.
        }
    }

    /// Number of handlers currently registered for a kind.
    pub fn handler_count(&self, kind: &str) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .count()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.inner.borrow().entries.len())
            .finish()
    }
}
