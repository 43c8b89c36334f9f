//! Outbound Ports (Driven Ports)
//!
//! The native object a facade adapts, and the factory that creates it.

use futures::future::BoxFuture;
use shared_types::{ShapeBlueprint, Value, WrappedError};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Callback installed into a wrapped object's `on<kind>` slot.
///
/// Receives the raw arguments the native object passes to its callback.
pub type NativeCallback = Arc<dyn Fn(&[Value]) + Send + Sync>;

/// Asynchronous result of a wrapped method.
pub type PendingResult = BoxFuture<'static, Result<Value, WrappedError>>;

/// Value returned by a wrapped method.
///
/// Pending results are handed back untouched; the facade never awaits them.
pub enum Returned {
    /// The method completed synchronously.
    Ready(Value),
    /// The method completes later and may still fail.
    Pending(PendingResult),
}

impl Returned {
    pub fn ready(value: impl Into<Value>) -> Self {
        Self::Ready(value.into())
    }

    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = Result<Value, WrappedError>> + Send + 'static,
    {
        Self::Pending(Box::pin(future))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// The value of a synchronous result.
    pub fn into_ready(self) -> Option<Value> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Pending(_) => None,
        }
    }

    /// Wait for the result, whichever way it was returned.
    pub async fn settle(self) -> Result<Value, WrappedError> {
        match self {
            Self::Ready(value) => Ok(value),
            Self::Pending(future) => future.await,
        }
    }
}

impl fmt::Debug for Returned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Self::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

/// A native object exposing accessors, methods and single-slot callbacks.
///
/// All methods take `&self`: a wrapped object may be re-entered from one of
/// its own callbacks.
pub trait WrappedObject: Send + Sync {
    /// Read an accessor.
    fn get(&self, name: &str) -> Result<Value, WrappedError>;

    /// Write an accessor.
    fn set(&self, name: &str, value: Value) -> Result<(), WrappedError>;

    /// Call a method with the given arguments.
    fn call(&self, name: &str, args: &[Value]) -> Result<Returned, WrappedError>;

    /// Assign (or clear, with `None`) the callback stored in slot `slot`
    /// (`"on<kind>"`).
    fn set_callback(&self, slot: &str, callback: Option<NativeCallback>) -> Result<(), WrappedError>;
}

/// Creates wrapped objects of one type.
pub trait WrappedFactory: Send + Sync {
    /// Member descriptors of the created objects.
    fn blueprint(&self) -> &ShapeBlueprint;

    /// Name of the created objects' type.
    fn type_name(&self) -> &str {
        &self.blueprint().type_name
    }

    /// Create a wrapped object from constructor arguments.
    fn instantiate(&self, args: &[Value]) -> Result<Arc<dyn WrappedObject>, WrappedError>;
}
