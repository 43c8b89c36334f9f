//! Ports Layer
//!
//! - Driving Port (inbound): `FacadeApi`, the surface a facade exposes
//! - Driven Ports (outbound): `WrappedObject` and `WrappedFactory`, the
//!   native object being adapted

pub mod inbound;
pub mod outbound;

pub use inbound::FacadeApi;
pub use outbound::{NativeCallback, PendingResult, Returned, WrappedFactory, WrappedObject};
