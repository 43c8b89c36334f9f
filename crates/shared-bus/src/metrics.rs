//! Dispatch counters
//!
//! Thread-safe counters describing what an event target delivered.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for one or more event targets.
#[derive(Debug, Default)]
pub struct DispatchMetrics {
    /// Calls to `notify`
    pub events_notified: AtomicU64,
    /// Handler and listener invocations
    pub listener_invocations: AtomicU64,
    /// Invocations that failed or panicked
    pub listener_failures: AtomicU64,
    /// Notifications whose default behavior was prevented
    pub events_canceled: AtomicU64,
}

impl DispatchMetrics {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_notify(&self) {
        self.events_notified.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_invocation(&self, failed: bool) {
        self.listener_invocations.fetch_add(1, Ordering::Relaxed);
        if failed {
            self.listener_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_canceled(&self) {
        self.events_canceled.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current counters
    pub fn snapshot(&self) -> DispatchSnapshot {
        DispatchSnapshot {
            events_notified: self.events_notified.load(Ordering::Relaxed),
            listener_invocations: self.listener_invocations.load(Ordering::Relaxed),
            listener_failures: self.listener_failures.load(Ordering::Relaxed),
            events_canceled: self.events_canceled.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time dispatch counters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchSnapshot {
    pub events_notified: u64,
    pub listener_invocations: u64,
    pub listener_failures: u64,
    pub events_canceled: u64,
}
