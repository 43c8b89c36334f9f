//! # Listener Failure Reporting
//!
//! Listener failures never propagate out of `notify`. They are handed to a
//! [`FailureReporter`], which by default logs them.

use crate::listener::{ListenerError, ListenerId};
use parking_lot::Mutex;
use tracing::error;

/// A listener failure observed during one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerFailure {
    /// Kind of the event being delivered.
    pub kind: String,
    /// Identity of the failing listener.
    pub listener: ListenerId,
    /// Label of the failing listener, if it has one.
    pub label: Option<String>,
    /// The failure.
    pub error: ListenerError,
}

/// Sink for listener failures.
pub trait FailureReporter: Send + Sync {
    /// Report one failure.
    fn report(&self, failure: &ListenerFailure);
}

/// Reports failures through `tracing::error!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingFailureReporter;

impl FailureReporter for TracingFailureReporter {
    fn report(&self, failure: &ListenerFailure) {
        error!(
            kind = %failure.kind,
            listener = format_args!("{:#x}", failure.listener),
            label = failure.label.as_deref().unwrap_or("-"),
            error = %failure.error,
            "Listener failed during notify"
        );
    }
}

/// Keeps every reported failure in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    failures: Mutex<Vec<ListenerFailure>>,
}

impl CollectingReporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Failures reported so far, oldest first.
    pub fn failures(&self) -> Vec<ListenerFailure> {
        self.failures.lock().clone()
    }

    /// Number of failures reported so far.
    pub fn len(&self) -> usize {
        self.failures.lock().len()
    }

    /// Whether no failure was reported.
    pub fn is_empty(&self) -> bool {
        self.failures.lock().is_empty()
    }
}

impl FailureReporter for CollectingReporter {
    fn report(&self, failure: &ListenerFailure) {
        self.failures.lock().push(failure.clone());
    }
}
