//! Domain Layer
//!
//! Pure pieces of a facade type: how native callbacks become events, and the
//! configuration each instance is built with.

pub mod config;
pub mod synthesis;

pub use config::FacadeConfig;
pub use synthesis::{SynthesisTable, Synthesizer};
