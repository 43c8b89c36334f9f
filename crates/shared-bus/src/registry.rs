//! # Listener Registry
//!
//! Ordered registrations per event kind. Not synchronized; the event target
//! guards it with a mutex that is never held while a listener runs.

use crate::listener::{Listener, ListenerOptions};
use std::collections::HashMap;

/// One registration of a listener for a kind.
#[derive(Debug, Clone)]
pub struct Registration {
    /// The registered listener.
    pub listener: Listener,
    /// Options given at registration.
    pub options: ListenerOptions,
}

impl Registration {
    fn matches(&self, listener: &Listener, capture: bool) -> bool {
        self.listener == *listener && self.options.capture == capture
    }
}

/// Listener registrations keyed by event kind, in insertion order.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    by_kind: HashMap<String, Vec<Registration>>,
}

impl ListenerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `kind`.
    ///
    /// Registering the same listener with the same `capture` flag again is a
    /// no-op. Returns `true` if a new registration was appended.
    pub fn add(&mut self, kind: &str, listener: Listener, options: ListenerOptions) -> bool {
        let entries = self.by_kind.entry(kind.to_string()).or_default();
        if entries.iter().any(|r| r.matches(&listener, options.capture)) {
            return false;
        }
        entries.push(Registration { listener, options });
        true
    }

    /// Remove the registration of `listener` with `capture` for `kind`.
    ///
    /// Returns `true` if a registration was removed.
    pub fn remove(&mut self, kind: &str, listener: &Listener, capture: bool) -> bool {
        let Some(entries) = self.by_kind.get_mut(kind) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|r| !r.matches(listener, capture));
        let removed = entries.len() != before;
        if entries.is_empty() {
            self.by_kind.remove(kind);
        }
        removed
    }

    /// Copy of the registrations for `kind`, in registration order.
    pub fn snapshot(&self, kind: &str) -> Vec<Registration> {
        self.by_kind.get(kind).cloned().unwrap_or_default()
    }

    /// Number of registrations for `kind`.
    pub fn count(&self, kind: &str) -> usize {
        self.by_kind.get(kind).map_or(0, Vec::len)
    }

    /// Number of registrations of `listener` for `kind`, across capture flags.
    pub fn occurrences(&self, kind: &str, listener: &Listener) -> usize {
        self.by_kind
            .get(kind)
            .map_or(0, |entries| entries.iter().filter(|r| r.listener == *listener).count())
    }

    /// Whether `listener` is registered for `kind` with any options.
    pub fn contains(&self, kind: &str, listener: &Listener) -> bool {
        self.occurrences(kind, listener) > 0
    }

    /// Kinds with at least one registration, sorted.
    pub fn kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = self.by_kind.keys().cloned().collect();
        kinds.sort();
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut registry = ListenerRegistry::new();
        let a = Listener::new(|_| {}).named("a");
        let b = Listener::new(|_| {}).named("b");
        let c = Listener::new(|_| {}).named("c");

        registry.add("open", b.clone(), ListenerOptions::default());
        registry.add("open", a.clone(), ListenerOptions::default());
        registry.add("open", c.clone(), ListenerOptions::default());

        let order: Vec<_> = registry
            .snapshot("open")
            .into_iter()
            .map(|r| r.listener)
            .collect();
        assert_eq!(order, vec![b, a, c]);
    }

    #[test]
    fn test_duplicate_registration_is_noop() {
        let mut registry = ListenerRegistry::new();
        let listener = Listener::new(|_| {});

        assert!(registry.add("open", listener.clone(), ListenerOptions::default()));
        assert!(!registry.add("open", listener.clone(), ListenerOptions::once()));
        assert_eq!(registry.count("open"), 1);
        // First registration's options win.
        assert!(!registry.snapshot("open")[0].options.once);
    }

    #[test]
    fn test_capture_flag_makes_distinct_registration() {
        let mut registry = ListenerRegistry::new();
        let listener = Listener::new(|_| {});

        assert!(registry.add("open", listener.clone(), ListenerOptions::default()));
        assert!(registry.add("open", listener.clone(), ListenerOptions::capture()));
        assert_eq!(registry.occurrences("open", &listener), 2);

        assert!(registry.remove("open", &listener, true));
        assert_eq!(registry.occurrences("open", &listener), 1);
    }

    #[test]
    fn test_remove_unknown_is_false() {
        let mut registry = ListenerRegistry::new();
        let listener = Listener::new(|_| {});
        assert!(!registry.remove("open", &listener, false));

        registry.add("open", Listener::new(|_| {}), ListenerOptions::default());
        assert!(!registry.remove("open", &listener, false));
    }

    #[test]
    fn test_empty_kind_is_dropped() {
        let mut registry = ListenerRegistry::new();
        let listener = Listener::new(|_| {});
        registry.add("open", listener.clone(), ListenerOptions::default());
        registry.add("close", Listener::new(|_| {}), ListenerOptions::default());

        registry.remove("open", &listener, false);
        assert_eq!(registry.kinds(), vec!["close".to_string()]);
    }

    #[test]
    fn test_kinds_are_isolated() {
        let mut registry = ListenerRegistry::new();
        let listener = Listener::new(|_| {});
        registry.add("open", listener.clone(), ListenerOptions::default());

        assert!(registry.contains("open", &listener));
        assert!(!registry.contains("close", &listener));
        assert!(registry.snapshot("close").is_empty());
    }
}
