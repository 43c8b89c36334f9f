//! Error types for the facade builder

use ef_01_shape_inspector::InspectError;
use shared_types::WrappedError;
use thiserror::Error;

/// Errors raised by facade construction and forwarding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FacadeError {
    /// The factory failed to instantiate the wrapped object.
    #[error(transparent)]
    Construction(WrappedError),

    /// A forwarded accessor or method failed on the wrapped object.
    #[error(transparent)]
    Forwarding(WrappedError),

    #[error("{type_name} has no forwarded member {name}")]
    UnknownMember { type_name: String, name: String },

    #[error("{0} is a method, not an accessor")]
    NotAnAccessor(String),

    #[error("{0} is not a method")]
    NotAMethod(String),

    #[error("{0} is read-only")]
    ReadOnlyMember(String),

    #[error("No event kind declared: {0}")]
    UnknownEventKind(String),

    #[error("Invalid event kind: {0:?}")]
    InvalidEventKind(String),

    #[error("Invalid inspector configuration: {0}")]
    InvalidConfig(#[from] InspectError),
}

impl FacadeError {
    /// The wrapped object's own error, for construction and forwarding
    /// failures.
    pub fn wrapped(&self) -> Option<&WrappedError> {
        match self {
            Self::Construction(err) | Self::Forwarding(err) => Some(err),
            _ => None,
        }
    }
}
