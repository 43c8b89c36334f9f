//! # EF-03 Peer Connection
//!
//! Facade for a native peer connection: nine event kinds with typed
//! payloads, and the non-standard members kept out of forwarding.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`)
//!   - `PeerEventKind`: the adapted event kinds
//!   - `IceCandidate`, `TrackEventPayload`, ...: native callback payloads
//!   - `PeerConnectionEvent`: an `Event` decoded by kind
//!
//! - **Service Layer** (`service/`)
//!   - `peer_connection_synthesis`: raw arguments → payload → `Event`
//!   - `peer_connection_type`: `FacadeType` for a native factory
//!   - `typed_listener`: listener receiving `PeerConnectionEvent`s
//!
//! ## Usage Example
//!
//! ```ignore
//! use ef_03_peer_connection::{peer_connection_type, typed_listener, PeerConnectionEvent};
//! use ef_02_facade_builder::FacadeApi;
//! use shared_bus::ListenerOptions;
//!
//! let pc = peer_connection_type(native_factory)?.construct(&[config])?;
//! pc.add_listener(
//!     "icecandidate",
//!     typed_listener(|event| {
//!         if let PeerConnectionEvent::IceCandidate(payload) = event {
//!             signal(payload.candidate.map(|c| c.to_init()));
//!         }
//!     }),
//!     ListenerOptions::default(),
//! );
//! ```

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod domain;
pub mod error;
pub mod service;

// Re-export main types
pub use domain::*;
pub use error::PayloadError;
pub use service::{peer_connection_builder, peer_connection_synthesis, peer_connection_type, typed_listener};
