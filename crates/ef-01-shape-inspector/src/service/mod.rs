//! Service Layer
//!
//! Wraps the pure `inspect` function with configuration and a per-shape cache.

pub mod shape_inspector;

pub use shape_inspector::ShapeInspector;
