//! Event dispatch system
//!
//! Typed publish/subscribe for widget notifications, plus the platform-agnostic
//! key codes the scrollbar understands.
//!
//! An [`EventBus`] is owned by exactly one widget. Every handler it holds is
//! identified by a [`SubscriptionId`]; [`EventBus::clear`] releases all of them
//! at once when the owner is torn down.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle to a handler registered on an [`EventBus`]
    pub struct SubscriptionId;
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    // Arrow keys
    pub const LEFT: KeyCode = KeyCode(0x25);
    pub const UP: KeyCode = KeyCode(0x26);
    pub const RIGHT: KeyCode = KeyCode(0x27);
    pub const DOWN: KeyCode = KeyCode(0x28);

    // Navigation keys
    pub const HOME: KeyCode = KeyCode(0x24);
    pub const END: KeyCode = KeyCode(0x23);
    pub const PAGE_UP: KeyCode = KeyCode(0x21);
    pub const PAGE_DOWN: KeyCode = KeyCode(0x22);
}

/// Event handler function type
pub type EventHandler<E> = Box<dyn Fn(&E)>;

struct Entry<E> {
    handler: EventHandler<E>,
    once: bool,
}

/// Dispatches typed events to registered handlers
///
/// Handlers run in registration order. Handlers registered with
/// [`EventBus::once`] are removed after their first delivery.
pub struct EventBus<E> {
    handlers: SlotMap<SubscriptionId, Entry<E>>,
    order: Vec<SubscriptionId>,
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            handlers: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Register a handler that runs for every emitted event
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: Fn(&E) + 'static,
    {
        self.insert(Box::new(handler), false)
    }

    /// Register a handler that runs for the next emitted event only
    pub fn once<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: Fn(&E) + 'static,
    {
        self.insert(Box::new(handler), true)
    }

    fn insert(&mut self, handler: EventHandler<E>, once: bool) -> SubscriptionId {
        let id = self.handlers.insert(Entry { handler, once });
        self.order.push(id);
        id
    }

    /// Remove a single handler. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if self.handlers.remove(id).is_none() {
            return false;
        }
        self.order.retain(|existing| *existing != id);
        true
    }

    /// Remove every handler
    pub fn clear(&mut self) {
        if !self.handlers.is_empty() {
            tracing::trace!(count = self.handlers.len(), "clearing event handlers");
        }
        self.handlers.clear();
        self.order.clear();
    }

    /// Deliver an event to all handlers
    pub fn emit(&mut self, event: &E) {
        let mut expired: SmallVec<[SubscriptionId; 4]> = SmallVec::new();

        for id in &self.order {
            if let Some(entry) = self.handlers.get(*id) {
                (entry.handler)(event);
                if entry.once {
                    expired.push(*id);
                }
            }
        }

        for id in expired {
            self.unsubscribe(id);
        }
    }

    /// Check whether a handler is still registered
    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.handlers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_all_handlers_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::<u32>::new();

        let first = log.clone();
        bus.subscribe(move |v| first.borrow_mut().push(("first", *v)));
        let second = log.clone();
        bus.subscribe(move |v| second.borrow_mut().push(("second", *v)));

        bus.emit(&7);
        assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_once_handler_fires_once() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = EventBus::<()>::new();

        let counter = count.clone();
        let id = bus.once(move |_| *counter.borrow_mut() += 1);

        bus.emit(&());
        bus.emit(&());
        assert_eq!(*count.borrow(), 1);
        assert!(!bus.contains(id));
        assert!(bus.is_empty());
    }

    #[test]
    fn test_unsubscribe_and_clear() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = EventBus::<()>::new();

        let a = count.clone();
        let id = bus.subscribe(move |_| *a.borrow_mut() += 1);
        let b = count.clone();
        bus.subscribe(move |_| *b.borrow_mut() += 10);

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.emit(&());
        assert_eq!(*count.borrow(), 10);

        bus.clear();
        bus.emit(&());
        assert_eq!(*count.borrow(), 10);
        assert_eq!(bus.len(), 0);
    }
}
