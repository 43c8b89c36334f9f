//! Domain Layer - Pure classification logic
//!
//! RULES:
//! - No I/O operations
//! - No locking
//! - Deterministic output for a given blueprint and exclusion list

pub mod classification;
pub mod config;
pub mod exclusions;
pub mod inspect;

pub use classification::MemberClassification;
pub use config::{InspectorConfig, InspectorConfigBuilder};
pub use exclusions::{ExclusionList, CONSTRUCTOR};
pub use inspect::inspect;
