//! Shape inspector configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use ef_01_shape_inspector::InspectorConfigBuilder;
//!
//! let config = InspectorConfigBuilder::new()
//!     .exclude("legacyGetStats")
//!     .exclude("updateIce")
//!     .cache_classifications(true)
//!     .build()
//!     .expect("Valid config");
//! ```

use super::exclusions::{ExclusionList, CONSTRUCTOR};
use crate::error::InspectError;
use serde::{Deserialize, Serialize};

/// Shape inspector configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectorConfig {
    /// Member names never forwarded
    pub exclusions: ExclusionList,
    /// Reuse one classification per shape name
    pub cache_classifications: bool,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            exclusions: ExclusionList::default(),
            cache_classifications: true,
        }
    }
}

impl InspectorConfig {
    /// Validate the exclusion list
    pub fn validate(&self) -> Result<(), InspectError> {
        if !self.exclusions.contains(CONSTRUCTOR) {
            return Err(InspectError::ConstructorNotExcluded);
        }

        if self.exclusions.iter().any(|name| name.trim().is_empty()) {
            return Err(InspectError::EmptyExclusionName);
        }

        Ok(())
    }

    /// Builder-style method to replace the exclusion list
    pub fn with_exclusions(mut self, exclusions: ExclusionList) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Builder-style method to toggle the per-shape cache
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_classifications = enabled;
        self
    }
}

/// Builder for InspectorConfig with validation
#[derive(Default)]
pub struct InspectorConfigBuilder {
    extra_exclusions: Vec<String>,
    cache_classifications: Option<bool>,
}

impl InspectorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude one more member name
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.extra_exclusions.push(name.into());
        self
    }

    /// Exclude several member names
    pub fn exclude_all<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_exclusions.extend(names.into_iter().map(Into::into));
        self
    }

    /// Enable or disable the per-shape cache
    pub fn cache_classifications(mut self, enabled: bool) -> Self {
        self.cache_classifications = Some(enabled);
        self
    }

    /// Build the InspectorConfig, validating all parameters
    pub fn build(self) -> Result<InspectorConfig, InspectError> {
        let defaults = InspectorConfig::default();

        let config = InspectorConfig {
            exclusions: defaults.exclusions.with(self.extra_exclusions),
            cache_classifications: self
                .cache_classifications
                .unwrap_or(defaults.cache_classifications),
        };

        config.validate()?;
        Ok(config)
    }
}
