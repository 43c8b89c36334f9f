//! # EF-01 Shape Inspector
//!
//! Decides which members of a wrapped-object type the facade forwards.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure classification, no I/O
//!   - `inspect`: blueprint + exclusions → `MemberClassification`
//!   - `ExclusionList`: names never forwarded (`constructor` always)
//!   - `InspectorConfig` / `InspectorConfigBuilder`: validated configuration
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `ShapeInspector`: classifies each shape once and caches the result
//!
//! ## Classification Rules
//!
//! | Descriptor                     | Result           |
//! |--------------------------------|------------------|
//! | getter and/or setter           | accessor         |
//! | getter/setter and callable     | accessor         |
//! | callable only                  | method           |
//! | neither                        | skipped          |
//! | `constructor` or excluded name | skipped          |
//!
//! Both output lists are sorted by name and disjoint.
//!
//! ## Usage Example
//!
//! ```ignore
//! use ef_01_shape_inspector::{ExclusionList, ShapeInspector, InspectorConfig};
//!
//! let config = InspectorConfig::default()
//!     .with_exclusions(ExclusionList::default().with(["legacyGetStats"]));
//! let inspector = ShapeInspector::new(config)?;
//!
//! let classification = inspector.classify(&blueprint);
//! for name in classification.method_names() {
//!     println!("forwarding {name}()");
//! }
//! ```

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod domain;
pub mod error;
pub mod service;

pub use domain::{
    inspect, ExclusionList, InspectorConfig, InspectorConfigBuilder, MemberClassification,
    CONSTRUCTOR,
};
pub use error::InspectError;
pub use service::ShapeInspector;
