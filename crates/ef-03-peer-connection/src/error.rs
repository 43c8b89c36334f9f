//! Error types for peer-connection events

use thiserror::Error;

/// Errors decoding peer-connection event payloads
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("Not a peer-connection event kind: {0}")]
    UnknownKind(String),

    #[error("Malformed {kind} payload: {message}")]
    Malformed { kind: String, message: String },

    #[error("Missing {kind} payload")]
    Missing { kind: String },
}
