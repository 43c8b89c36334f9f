//! # Adapters Layer
//!
//! Implementations of the outbound ports.

mod memory;

pub use memory::{InMemoryFactory, InMemoryObject, MethodFn};
