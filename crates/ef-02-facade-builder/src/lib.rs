//! # EF-02 Facade Builder
//!
//! Adapts an object with single-slot `on<kind>` callbacks into a facade that
//! behaves like a multi-listener event target and forwards the object's
//! accessors and methods.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`)
//!   - `SynthesisTable`: event kind → raw callback arguments → `Event`
//!   - `FacadeConfig`: inspector and dispatch settings
//!
//! - **Ports Layer** (`ports/`)
//!   - `FacadeApi`: Driving port implemented by `Facade`
//!   - `WrappedObject`, `WrappedFactory`: Driven ports for the native object
//!
//! - **Service Layer** (`service/`)
//!   - `FacadeBuilder` → `FacadeType` → `Facade`
//!
//! - **Adapters Layer** (`adapters/`)
//!   - `InMemoryFactory` / `InMemoryObject`: scripted wrapped objects
//!
//! ## Event Flow
//!
//! ```text
//! native object                 facade
//! ─────────────                 ──────
//! on<kind>(raw…) ──► synthesize(kind, raw) ──► notify(event)
//!                                                  │
//!                                   ┌──────────────┴─────────────┐
//!                                   ▼                            ▼
//!                           on<kind> handler (1)     registered listeners (2)
//! ```
//!
//! ## Usage Example
//!
//! ```ignore
//! use ef_02_facade_builder::{FacadeApi, FacadeBuilder, SynthesisTable};
//! use shared_bus::{Listener, ListenerOptions};
//!
//! let facade_type = FacadeBuilder::new(factory)
//!     .synthesis(SynthesisTable::new().plain("open"))
//!     .build()?;
//! let socket = facade_type.construct(&[])?;
//!
//! socket.add_listener("open", Listener::new(|e| println!("{}", e.kind())), ListenerOptions::default());
//! socket.set_event_handler("open", Some(Listener::new(|_| println!("handler first"))))?;
//! ```

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

pub use adapters::{InMemoryFactory, InMemoryObject, MethodFn};
pub use domain::{FacadeConfig, SynthesisTable, Synthesizer};
pub use error::FacadeError;
pub use metrics::{FacadeMetrics, FacadeMetricsSnapshot, ForwardOp, MetricsRecorder, NoOpMetrics};
pub use ports::{FacadeApi, NativeCallback, PendingResult, Returned, WrappedFactory, WrappedObject};
pub use service::{build_facade_type, Facade, FacadeBuilder, FacadeType};
