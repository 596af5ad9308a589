//! Change-watcher registry
//!
//! Observers of a [`Memory`](super::Memory) register a [`ChangeHandler`];
//! every successful write delivers the affected range to each handler, in
//! registration order, synchronously and strictly after the mutation. The
//! registry is deliberately multi-subscriber so several views can observe one
//! region without stepping on each other's registration.
//!
//! Handlers receive `(address, bytes)` where `bytes` are the post-write
//! contents of the modified range, so observers never see a torn or pre-write
//! value, and never re-borrow the region mid-notification.

use super::Address;

/// A change subscriber: called with the start address and post-write bytes
/// of each modified range.
pub type ChangeHandler = Box<dyn FnMut(Address, &[u8])>;

/// Ordered registry of change handlers
#[derive(Default)]
pub struct Watchers {
    handlers: Vec<ChangeHandler>,
}

impl Watchers {
    pub fn new() -> Self {
        Watchers {
            handlers: Vec::new(),
        }
    }

    /// Append a handler; it will be notified after all earlier registrations.
    pub fn subscribe(&mut self, handler: ChangeHandler) {
        self.handlers.push(handler);
    }

    /// Deliver one change to every handler. A no-op with no registrations;
    /// notifications are never buffered.
    pub fn notify(&mut self, address: Address, bytes: &[u8]) {
        for handler in &mut self.handlers {
            handler(address, bytes);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for Watchers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watchers")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
