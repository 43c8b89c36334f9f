//! Service Layer
//!
//! Wires the peer-connection synthesizers and exclusions into a facade type.

pub mod adapter;

pub use adapter::{peer_connection_builder, peer_connection_synthesis, peer_connection_type, typed_listener};
