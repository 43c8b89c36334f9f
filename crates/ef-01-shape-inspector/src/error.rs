//! Error types for the shape inspector

use thiserror::Error;

/// Errors raised while configuring the shape inspector
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectError {
    #[error("Exclusion list must contain \"constructor\"")]
    ConstructorNotExcluded,

    #[error("Exclusion list contains an empty member name")]
    EmptyExclusionName,

    #[error("Invalid inspector configuration: {0}")]
    InvalidConfig(String),
}
