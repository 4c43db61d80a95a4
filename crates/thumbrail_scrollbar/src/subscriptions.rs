//! Event subscription tracking
//!
//! The scrollbar decides which `(source, event)` pairs it listens to; the
//! embedder may query the set to attach native listeners lazily. Events that
//! arrive for an unsubscribed pair are ignored.

use rustc_hash::FxHashSet;

use crate::input::{EventName, EventSource};

#[derive(Debug, Clone, Default)]
pub struct Subscriptions {
    active: FxHashSet<(EventSource, EventName)>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if already subscribed
    pub fn subscribe(&mut self, source: EventSource, name: EventName) -> bool {
        let added = self.active.insert((source, name));
        if added {
            tracing::trace!(?source, ?name, "subscribed");
        }
        added
    }

    /// Returns false if not subscribed
    pub fn unsubscribe(&mut self, source: EventSource, name: EventName) -> bool {
        let removed = self.active.remove(&(source, name));
        if removed {
            tracing::trace!(?source, ?name, "unsubscribed");
        }
        removed
    }

    pub fn contains(&self, source: EventSource, name: EventName) -> bool {
        self.active.contains(&(source, name))
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EventSource, EventName)> + '_ {
        self.active.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_is_idempotent() {
        let mut subs = Subscriptions::new();
        assert!(subs.subscribe(EventSource::Document, EventName::MouseMove));
        assert!(!subs.subscribe(EventSource::Document, EventName::MouseMove));
        assert_eq!(subs.len(), 1);

        assert!(subs.unsubscribe(EventSource::Document, EventName::MouseMove));
        assert!(!subs.unsubscribe(EventSource::Document, EventName::MouseMove));
        assert!(subs.is_empty());
    }

    #[test]
    fn test_pairs_are_distinct_by_source() {
        let mut subs = Subscriptions::new();
        subs.subscribe(EventSource::ThumbX, EventName::MouseDown);
        assert!(!subs.contains(EventSource::ThumbY, EventName::MouseDown));
        assert!(subs.contains(EventSource::ThumbX, EventName::MouseDown));
    }

    #[test]
    fn test_iter_lists_held_pairs() {
        let mut subs = Subscriptions::new();
        subs.subscribe(EventSource::Host, EventName::Wheel);
        subs.subscribe(EventSource::Window, EventName::Resize);
        subs.unsubscribe(EventSource::Host, EventName::Wheel);

        let pairs: Vec<_> = subs.iter().collect();
        assert_eq!(pairs, vec![(EventSource::Window, EventName::Resize)]);
    }
}
