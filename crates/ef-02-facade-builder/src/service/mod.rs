//! Service Layer
//!
//! - `FacadeBuilder`: turns a factory and a synthesis table into a facade type
//! - `FacadeType`: constructs facades, one wrapped object each
//! - `Facade`: one constructed instance, implements `FacadeApi`

pub mod builder;
pub mod facade;
pub mod facade_type;

pub use builder::{build_facade_type, FacadeBuilder};
pub use facade::Facade;
pub use facade_type::FacadeType;
