//! # Event Target
//!
//! Owns one listener registry and one handler slot per declared kind, and
//! implements dual dispatch over them.

use crate::config::DispatchConfig;
use crate::events::Event;
use crate::failure::{FailureReporter, ListenerFailure, TracingFailureReporter};
use crate::listener::{Listener, ListenerError, ListenerOptions};
use crate::metrics::DispatchMetrics;
use crate::registry::{ListenerRegistry, Registration};
use crate::slot::HandlerSlot;
use parking_lot::Mutex;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from handler slot operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// The kind was not declared with a handler slot.
    #[error("No handler slot for event kind: {0}")]
    UnknownSlot(String),
}

/// Multi-listener event target with single-slot handlers.
///
/// All methods take `&self`. The internal locks are released before any
/// handler or listener runs, so listeners may add or remove listeners, assign
/// handlers, or notify again while being called.
///
/// Lock order is always slots, then registry.
pub struct EventTarget {
    registry: Mutex<ListenerRegistry>,
    slots: Mutex<BTreeMap<String, HandlerSlot>>,
    config: DispatchConfig,
    reporter: Arc<dyn FailureReporter>,
    metrics: Arc<DispatchMetrics>,
}

impl EventTarget {
    /// Create a target with no handler slots, default configuration and
    /// failures reported through `tracing`.
    pub fn new() -> Self {
        Self {
            registry: Mutex::new(ListenerRegistry::new()),
            slots: Mutex::new(BTreeMap::new()),
            config: DispatchConfig::default(),
            reporter: Arc::new(TracingFailureReporter),
            metrics: Arc::new(DispatchMetrics::new()),
        }
    }

    /// Declare an empty handler slot for each kind.
    pub fn with_slots<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots = self.slots.get_mut();
        for kind in kinds {
            slots.entry(kind.into()).or_default();
        }
        self
    }

    /// Replace the dispatch configuration.
    pub fn with_config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the failure reporter.
    pub fn with_reporter(mut self, reporter: Arc<dyn FailureReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Share dispatch counters with other targets.
    pub fn with_metrics(mut self, metrics: Arc<DispatchMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Dispatch counters.
    pub fn metrics(&self) -> &Arc<DispatchMetrics> {
        &self.metrics
    }

    /// Kinds with a handler slot, sorted.
    pub fn slot_kinds(&self) -> Vec<String> {
        self.slots.lock().keys().cloned().collect()
    }

    /// Whether `kind` has a handler slot.
    pub fn has_slot(&self, kind: &str) -> bool {
        self.slots.lock().contains_key(kind)
    }

    /// Register `listener` for `kind`.
    ///
    /// Returns `false` when the same listener is already registered with the
    /// same `capture` flag; the existing registration is left unchanged.
    pub fn add_listener(&self, kind: &str, listener: Listener, options: ListenerOptions) -> bool {
        let (added, count) = {
            let mut registry = self.registry.lock();
            let added = registry.add(kind, listener, options);
            (added, registry.count(kind))
        };

        if added {
            debug!(kind = %kind, count, "Listener added");
            if self.config.crosses_leak_threshold(count) {
                warn!(
                    kind = %kind,
                    count,
                    max = self.config.max_listeners_per_kind,
                    "Possible listener leak detected"
                );
            }
        }
        added
    }

    /// Remove the registration of `listener` for `kind` with `options.capture`.
    ///
    /// If the removed registration belonged to the current `on<kind>`
    /// handler, the slot is cleared as well.
    pub fn remove_listener(&self, kind: &str, listener: &Listener, options: ListenerOptions) -> bool {
        let mut slots = self.slots.lock();
        let removed = self.registry.lock().remove(kind, listener, options.capture);

        if removed && !options.capture {
            if let Some(slot) = slots.get_mut(kind) {
                if slot.current() == Some(listener) {
                    *slot = HandlerSlot::Empty;
                    debug!(kind = %kind, "Handler slot cleared by listener removal");
                }
            }
        }

        if removed {
            debug!(kind = %kind, "Listener removed");
        }
        removed
    }

    /// Assign the `on<kind>` handler.
    ///
    /// The previous handler leaves the registry and the new one joins it, so
    /// the handler is always either absent or registered exactly once.
    /// A listener already added with `once` or `passive` loses those options
    /// when it becomes the handler.
    pub fn set_handler(&self, kind: &str, handler: Option<Listener>) -> Result<(), SlotError> {
        let mut slots = self.slots.lock();
        let slot = slots
            .get_mut(kind)
            .ok_or_else(|| SlotError::UnknownSlot(kind.to_string()))?;

        let transition = slot.assign(handler);
        if transition.is_noop() {
            return Ok(());
        }

        let mut registry = self.registry.lock();
        if let Some(previous) = &transition.unregister {
            registry.remove(kind, previous, false);
        }
        if let Some(next) = transition.register {
            registry.remove(kind, &next, false);
            registry.add(kind, next, ListenerOptions::default());
        }

        debug!(kind = %kind, set = slot.current().is_some(), "Handler slot assigned");
        Ok(())
    }

    /// Current `on<kind>` handler.
    pub fn handler(&self, kind: &str) -> Option<Listener> {
        self.slots
            .lock()
            .get(kind)
            .and_then(|slot| slot.current().cloned())
    }

    /// Number of registrations for `kind`, the handler included.
    pub fn listener_count(&self, kind: &str) -> usize {
        self.registry.lock().count(kind)
    }

    /// Number of registrations of `listener` for `kind`.
    pub fn registrations_of(&self, kind: &str, listener: &Listener) -> usize {
        self.registry.lock().occurrences(kind, listener)
    }

    /// Deliver `event` to the handler and listeners registered for its kind.
    ///
    /// 1. The `on<kind>` handler, if set, runs first.
    /// 2. Registered listeners run in registration order over a snapshot
    ///    taken at the start of this call. The handler is not called twice.
    /// 3. Failures are reported and delivery continues.
    ///
    /// Returns `false` only when the event is cancelable and a listener
    /// prevented its default behavior.
    pub fn notify(&self, event: &Event) -> bool {
        let kind = event.kind();
        let handler = self.handler(kind);
        let snapshot = self.registry.lock().snapshot(kind);
        self.metrics.record_notify();

        debug!(
            kind = %kind,
            handler = handler.is_some(),
            listeners = snapshot.len(),
            "Notifying"
        );

        if let Some(handler) = &handler {
            self.invoke(kind, handler, false, event);
        }

        for Registration { listener, options } in snapshot {
            if event.immediate_propagation_stopped() {
                break;
            }
            if handler.as_ref() == Some(&listener) {
                continue;
            }
            if options.once {
                self.registry.lock().remove(kind, &listener, options.capture);
            }
            self.invoke(kind, &listener, options.passive, event);
        }

        event.finish_dispatch();

        let proceed = !(event.is_cancelable() && event.default_prevented());
        if !proceed {
            self.metrics.record_canceled();
        }
        proceed
    }

    fn invoke(&self, kind: &str, listener: &Listener, passive: bool, event: &Event) {
        event.enter_listener(passive);
        let result = if self.config.catch_panics {
            panic::catch_unwind(AssertUnwindSafe(|| listener.call(event))).unwrap_or_else(
                |payload| Err(ListenerError::Panicked(panic_message(payload.as_ref()))),
            )
        } else {
            listener.call(event)
        };
        event.leave_listener();

        self.metrics.record_invocation(result.is_err());
        if let Err(error) = result {
            self.reporter.report(&ListenerFailure {
                kind: kind.to_string(),
                listener: listener.id(),
                label: listener.label().map(str::to_string),
                error,
            });
        }
    }
}

impl Default for EventTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventTarget")
            .field("slots", &self.slot_kinds())
            .field("registered_kinds", &self.registry.lock().kinds())
            .field("config", &self.config)
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
