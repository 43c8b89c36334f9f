//! # Listeners
//!
//! A [`Listener`] is a shareable callback with pointer identity: two
//! `Listener` values are the same listener exactly when they were cloned from
//! one another. Registration, removal and slot assignment all compare by that
//! identity.

use crate::events::Event;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors a listener can report during delivery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListenerError {
    /// The listener returned an error.
    #[error("Listener failed: {0}")]
    Failed(String),

    /// The listener panicked.
    #[error("Listener panicked: {0}")]
    Panicked(String),
}

impl ListenerError {
    /// Create a `Failed` error.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Result returned by a listener.
pub type ListenerResult = Result<(), ListenerError>;

/// Identity of a listener.
pub type ListenerId = usize;

type ListenerFn = dyn Fn(&Event) -> ListenerResult + Send + Sync;

/// A registered observer.
#[derive(Clone)]
pub struct Listener {
    callback: Arc<ListenerFn>,
    label: Option<Arc<str>>,
}

impl Listener {
    /// Wrap an infallible callback.
    pub fn new(callback: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        Self::fallible(move |event| {
            callback(event);
            Ok(())
        })
    }

    /// Wrap a callback that may fail.
    pub fn fallible(callback: impl Fn(&Event) -> ListenerResult + Send + Sync + 'static) -> Self {
        Self {
            callback: Arc::new(callback),
            label: None,
        }
    }

    /// Attach a label used in logs and failure reports.
    ///
    /// The label does not take part in identity.
    pub fn named(mut self, label: impl Into<Arc<str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label given with [`Listener::named`].
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Identity of this listener.
    pub fn id(&self) -> ListenerId {
        Arc::as_ptr(&self.callback) as *const () as usize
    }

    /// Invoke the callback.
    pub fn call(&self, event: &Event) -> ListenerResult {
        (self.callback)(event)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("id", &format_args!("{:#x}", self.id()))
            .field("label", &self.label)
            .finish()
    }
}

/// Options accepted by `add_listener` and `remove_listener`.
///
/// Only `capture` takes part in registration identity; `once` and `passive`
/// are properties of the registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Capture-phase registration.
    pub capture: bool,
    /// Remove the registration before its first invocation.
    pub once: bool,
    /// Ignore `prevent_default` calls made by this listener.
    pub passive: bool,
}

impl ListenerOptions {
    /// Options for a one-shot registration.
    pub fn once() -> Self {
        Self {
            once: true,
            ..Self::default()
        }
    }

    /// Options for a passive registration.
    pub fn passive() -> Self {
        Self {
            passive: true,
            ..Self::default()
        }
    }

    /// Options for a capture registration.
    pub fn capture() -> Self {
        Self {
            capture: true,
            ..Self::default()
        }
    }
}
