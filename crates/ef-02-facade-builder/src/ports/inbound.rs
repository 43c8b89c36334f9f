//! Inbound Ports (Driving Ports)
//!
//! The API a facade offers its callers.

use crate::error::FacadeError;
use crate::ports::outbound::Returned;
use async_trait::async_trait;
use shared_bus::{Event, Listener, ListenerOptions};
use shared_types::Value;

/// Facade API (Driving Port)
///
/// A multi-listener event target that also forwards the accessors and methods
/// of the object it wraps.
#[async_trait]
pub trait FacadeApi: Send + Sync {
    /// Register a listener. Returns `false` if it was already registered with
    /// the same `capture` flag.
    fn add_listener(&self, kind: &str, listener: Listener, options: ListenerOptions) -> bool;

    /// Remove a registration. Returns `false` if there was none.
    fn remove_listener(&self, kind: &str, listener: &Listener, options: ListenerOptions) -> bool;

    /// Deliver `event` to the `on<kind>` handler, then to registered
    /// listeners. Returns `false` if a listener canceled it.
    fn notify(&self, event: &Event) -> bool;

    /// Assign the `on<kind>` handler of a declared kind.
    fn set_event_handler(&self, kind: &str, handler: Option<Listener>) -> Result<(), FacadeError>;

    /// Current `on<kind>` handler.
    fn event_handler(&self, kind: &str) -> Option<Listener>;

    /// Read a forwarded accessor.
    fn get(&self, name: &str) -> Result<Value, FacadeError>;

    /// Write a forwarded accessor.
    fn set(&self, name: &str, value: Value) -> Result<(), FacadeError>;

    /// Call a forwarded method. The result is returned as produced.
    fn invoke(&self, name: &str, args: &[Value]) -> Result<Returned, FacadeError>;

    /// Call a forwarded method and wait for its result.
    async fn invoke_settled(&self, name: &str, args: &[Value]) -> Result<Value, FacadeError> {
        self.invoke(name, args)?
            .settle()
            .await
            .map_err(FacadeError::Forwarding)
    }
}
