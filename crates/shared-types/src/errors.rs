//! # Error Types
//!
//! Defines the error raised by a wrapped object.

use thiserror::Error;

/// Errors raised by a wrapped object or by the factory that creates it.
///
/// The facade never rewrites these: a construction or forwarding failure
/// reaches the caller as the exact value the wrapped object produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WrappedError {
    /// The factory could not create the wrapped object.
    #[error("Construction failed: {0}")]
    Construction(String),

    /// The wrapped object has no member with this name.
    #[error("No such member: {0}")]
    NoSuchMember(String),

    /// The wrapped object rejected an argument.
    #[error("Type error: {0}")]
    TypeError(String),

    /// The operation is not allowed in the wrapped object's current state.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A method on the wrapped object failed.
    #[error("{member} failed: {message}")]
    OperationFailed {
        /// Member that failed.
        member: String,
        /// Failure description.
        message: String,
    },

    /// A named native exception (e.g. `"OperationError"`).
    #[error("{name}: {message}")]
    Native {
        /// Exception name reported by the native object.
        name: String,
        /// Exception message.
        message: String,
    },
}

impl WrappedError {
    /// Create an `OperationFailed` error.
    pub fn operation(member: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OperationFailed {
            member: member.into(),
            message: message.into(),
        }
    }

    /// Create a `Native` error.
    pub fn native(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Native {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_error_display() {
        let err = WrappedError::native("OperationError", "ICE restart failed");
        assert_eq!(err.to_string(), "OperationError: ICE restart failed");
    }

    #[test]
    fn test_operation_error_display() {
        let err = WrappedError::operation("createOffer", "closed");
        assert_eq!(err.to_string(), "createOffer failed: closed");
    }
}
