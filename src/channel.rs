//! Channel — the duplex named-event channel between host and widget.
//!
//! DESIGN
//! ======
//! One channel per widget instance. The widget side registers inbound
//! handlers by name and queues outbound events; the host side dispatches
//! inbound events, drains the outbound queue into its transport, and invokes
//! the flush hook before snapshotting widget state. The channel routes on
//! `name` only and never inspects payloads — the same split the frame
//! dispatch layer uses between transport and handlers.
//!
//! ORDERING
//! ========
//! Dispatch processes events strictly in call order and the outbound queue
//! preserves push order. `flush` runs the hook synchronously: a commit it
//! triggers is queued before `flush` returns. This is the one
//! ordering-critical contract — the host relies on it to never capture a
//! stale editor value.
//!
//! Handlers run under the registry borrow, so a handler must not call
//! `dispatch`, `handle_event`, or `handle_sync` re-entrantly. `push_event`
//! is always safe from inside a handler.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::error::WidgetError;
use crate::event::Event;

/// Inbound event handler. One per event name, like the host runtime's
/// handle-event registration.
pub type Handler = Box<dyn FnMut(&Event) -> Result<(), WidgetError>>;

/// Zero-argument synchronous flush hook.
pub type FlushHook = Box<dyn FnMut()>;

/// Duplex event channel. Single-threaded by design: all widget work runs on
/// the host's UI event loop, so interior mutability is `RefCell`, not locks.
#[derive(Default)]
pub struct Channel {
    handlers: RefCell<HashMap<String, Handler>>,
    outbound: RefCell<VecDeque<Event>>,
    flush_hook: RefCell<Option<FlushHook>>,
}

// =============================================================================
// WIDGET SIDE
// =============================================================================

impl Channel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for an inbound event name. Registering the same
    /// name again replaces the previous handler.
    pub fn handle_event(&self, name: impl Into<String>, handler: Handler) {
        self.handlers.borrow_mut().insert(name.into(), handler);
    }

    /// Queue an outbound event for the host to drain.
    pub fn push_event(&self, event: Event) {
        debug!(event = %event.name, "channel: push outbound");
        self.outbound.borrow_mut().push_back(event);
    }

    /// Register the flush hook invoked by [`Channel::flush`].
    pub fn handle_sync(&self, hook: FlushHook) {
        *self.flush_hook.borrow_mut() = Some(hook);
    }
}

// =============================================================================
// HOST SIDE
// =============================================================================

impl Channel {
    /// Deliver one inbound event to its registered handler.
    ///
    /// # Errors
    ///
    /// `UnknownEvent` if nothing is registered under the event's name;
    /// otherwise whatever the handler returns (missing or mistyped payload
    /// fields fail fast, leaving widget state untouched).
    pub fn dispatch(&self, event: &Event) -> Result<(), WidgetError> {
        debug!(event = %event.name, "channel: dispatch inbound");
        let mut handlers = self.handlers.borrow_mut();
        let handler = handlers
            .get_mut(&event.name)
            .ok_or_else(|| WidgetError::UnknownEvent(event.name.clone()))?;
        handler(event)
    }

    /// Force any pending local edit to commit, synchronously. When the hook
    /// returns, every commit it triggered is in the outbound queue.
    pub fn flush(&self) {
        if let Some(hook) = self.flush_hook.borrow_mut().as_mut() {
            hook();
        }
    }

    /// Take every queued outbound event, oldest first.
    pub fn drain_outbound(&self) -> Vec<Event> {
        self.outbound.borrow_mut().drain(..).collect()
    }
}

#[cfg(test)]
#[path = "channel_test.rs"]
mod tests;
