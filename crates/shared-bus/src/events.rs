//! # Events
//!
//! Structured event value delivered to handlers and listeners.

use shared_types::Value;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// A structured event.
///
/// Every event carries a `kind` tag naming the event kind it was synthesized
/// for, plus an arbitrary `detail` payload the bus never inspects.
///
/// Listeners receive `&Event`; the cancelation and propagation flags use
/// interior mutability so any listener can set them during delivery.
pub struct Event {
    kind: String,
    detail: Value,
    cancelable: bool,
    default_prevented: AtomicBool,
    stop_immediate: AtomicBool,
    in_passive_listener: AtomicBool,
}

impl Event {
    /// Create an event of `kind` with no detail.
    pub fn new(kind: impl Into<String>) -> Self {
        Self::with_detail(kind, Value::Null)
    }

    /// Create an event of `kind` carrying `detail`.
    pub fn with_detail(kind: impl Into<String>, detail: Value) -> Self {
        Self {
            kind: kind.into(),
            detail,
            cancelable: false,
            default_prevented: AtomicBool::new(false),
            stop_immediate: AtomicBool::new(false),
            in_passive_listener: AtomicBool::new(false),
        }
    }

    /// Builder-style method to mark the event cancelable.
    pub fn with_cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    /// Replace the kind tag.
    pub fn retagged(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Event kind.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Event payload.
    pub fn detail(&self) -> &Value {
        &self.detail
    }

    /// Whether `prevent_default` has any effect.
    pub fn is_cancelable(&self) -> bool {
        self.cancelable
    }

    /// Request that the event's default behavior not proceed.
    ///
    /// Ignored for non-cancelable events and inside passive listeners.
    pub fn prevent_default(&self) {
        if self.cancelable && !self.in_passive_listener.load(Ordering::Acquire) {
            self.default_prevented.store(true, Ordering::Release);
        }
    }

    /// Whether a listener canceled the event.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::Acquire)
    }

    /// Stop delivery to every listener after the current one.
    pub fn stop_immediate_propagation(&self) {
        self.stop_immediate.store(true, Ordering::Release);
    }

    /// Whether delivery was stopped for the rest of the current notification.
    pub fn immediate_propagation_stopped(&self) -> bool {
        self.stop_immediate.load(Ordering::Acquire)
    }

    pub(crate) fn enter_listener(&self, passive: bool) {
        self.in_passive_listener.store(passive, Ordering::Release);
    }

    pub(crate) fn leave_listener(&self) {
        self.in_passive_listener.store(false, Ordering::Release);
    }

    /// Clear the per-notification propagation flag once delivery is done.
    pub(crate) fn finish_dispatch(&self) {
        self.stop_immediate.store(false, Ordering::Release);
        self.in_passive_listener.store(false, Ordering::Release);
    }
}

impl Clone for Event {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            detail: self.detail.clone(),
            cancelable: self.cancelable,
            default_prevented: AtomicBool::new(self.default_prevented()),
            stop_immediate: AtomicBool::new(self.immediate_propagation_stopped()),
            in_passive_listener: AtomicBool::new(false),
        }
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("kind", &self.kind)
            .field("detail", &self.detail)
            .field("cancelable", &self.cancelable)
            .field("default_prevented", &self.default_prevented())
            .finish()
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.detail == other.detail
            && self.cancelable == other.cancelable
            && self.default_prevented() == other.default_prevented()
    }
}
