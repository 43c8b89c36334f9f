//! # Shared Bus - Dual-Dispatch Event Target
//!
//! Delivers one logical event through two paths:
//!
//! - **Single-slot handlers**: one `on<kind>` handler per declared kind,
//!   overwritten on each assignment.
//! - **Listener registry**: any number of listeners per kind, added and
//!   removed independently.
//!
//! ## Dispatch Order
//!
//! ```text
//!                 notify(event)
//!                      │
//!          ┌───────────┴───────────┐
//!          ▼                       │
//!  ┌───────────────┐               │
//!  │ on<kind> slot │  (1) first    │
//!  └───────────────┘               ▼
//!                          ┌──────────────────┐
//!                          │ registry snapshot│ (2) in registration order,
//!                          └──────────────────┘     slot handler skipped
//! ```
//!
//! The slot handler is always a registry member, so it is delivered exactly
//! once per notification even when it was also added explicitly.
//!
//! ## Failure Isolation
//!
//! A listener that returns an error or panics is reported through a
//! [`FailureReporter`] and delivery continues with the next listener.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod config;
pub mod events;
pub mod failure;
pub mod listener;
pub mod metrics;
pub mod registry;
pub mod slot;
pub mod target;

// Re-export main types
pub use config::DispatchConfig;
pub use events::Event;
pub use failure::{CollectingReporter, FailureReporter, ListenerFailure, TracingFailureReporter};
pub use listener::{Listener, ListenerError, ListenerId, ListenerOptions, ListenerResult};
pub use metrics::{DispatchMetrics, DispatchSnapshot};
pub use registry::{ListenerRegistry, Registration};
pub use slot::{HandlerSlot, SlotTransition};
pub use target::{EventTarget, SlotError};

/// Listener count per kind above which a possible leak is logged.
pub const DEFAULT_MAX_LISTENERS: usize = 10;
