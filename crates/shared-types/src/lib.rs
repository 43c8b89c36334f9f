//! # Shared Types Crate
//!
//! This crate contains the types every other crate in the workspace agrees on:
//! the dynamic [`Value`] exchanged with a wrapped object, the
//! [`ShapeBlueprint`] describing that object's members, and the
//! [`WrappedError`] it reports.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: The wrapped object's shape is described once
//!   here and consumed by both the shape inspector and the facade builder.
//! - **Errors pass through untouched**: A `WrappedError` produced by the
//!   wrapped object reaches the facade's caller exactly as it was raised.

pub mod errors;
pub mod shape;

pub use errors::*;
pub use shape::*;

/// Dynamic value read from, written to and returned by a wrapped object.
pub use serde_json::Value;

/// Prefix of the single-slot callback property for an event kind.
pub const SLOT_PREFIX: &str = "on";

/// Name of the single-slot callback property for `kind` (`"open"` → `"onopen"`).
pub fn slot_property(kind: &str) -> String {
    format!("{SLOT_PREFIX}{kind}")
}

/// Event kind addressed by a single-slot property name, if it follows the
/// `on<kind>` convention.
pub fn slot_kind(property: &str) -> Option<&str> {
    property
        .strip_prefix(SLOT_PREFIX)
        .filter(|kind| !kind.is_empty())
}
