//! Shape Inspector Service
//!
//! Classifies each wrapped-object shape once and hands out the shared result.

use crate::domain::{inspect, InspectorConfig, MemberClassification};
use crate::error::InspectError;
use parking_lot::RwLock;
use shared_types::ShapeBlueprint;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Shape inspector with a per-shape classification cache.
///
/// The cache is keyed by the whole [`ShapeBlueprint`]: blueprints that share
/// a type name but list different members are classified separately.
pub struct ShapeInspector {
    config: InspectorConfig,
    cache: RwLock<HashMap<ShapeBlueprint, Arc<MemberClassification>>>,
}

impl ShapeInspector {
    /// Create an inspector, validating `config`.
    pub fn new(config: InspectorConfig) -> Result<Self, InspectError> {
        config.validate()?;
        Ok(Self {
            config,
            cache: RwLock::new(HashMap::new()),
        })
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Classification for `blueprint`, computed on first use of its shape.
    pub fn classify(&self, blueprint: &ShapeBlueprint) -> Arc<MemberClassification> {
        if !self.config.cache_classifications {
            return Arc::new(self.compute(blueprint));
        }

        if let Some(hit) = self.cache.read().get(blueprint) {
            return Arc::clone(hit);
        }

        let mut cache = self.cache.write();
        // Another caller may have filled the entry between the two locks.
        let entry = cache
            .entry(blueprint.clone())
            .or_insert_with(|| Arc::new(self.compute(blueprint)));
        Arc::clone(entry)
    }

    /// Number of shapes in the cache.
    pub fn cached_shapes(&self) -> usize {
        self.cache.read().len()
    }

    /// Drop every cached classification of `type_name`.
    pub fn invalidate(&self, type_name: &str) -> bool {
        let mut cache = self.cache.write();
        let before = cache.len();
        cache.retain(|blueprint, _| blueprint.type_name != type_name);
        cache.len() != before
    }

    fn compute(&self, blueprint: &ShapeBlueprint) -> MemberClassification {
        let classification = inspect(blueprint, &self.config.exclusions);
        debug!(
            type_name = %blueprint.type_name,
            accessors = classification.accessor_names().len(),
            methods = classification.method_names().len(),
            "Classified wrapped-object shape"
        );
        classification
    }
}

impl Default for ShapeInspector {
    fn default() -> Self {
        Self {
            config: InspectorConfig::default(),
            cache: RwLock::new(HashMap::new()),
        }
    }
}

impl std::fmt::Debug for ShapeInspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeInspector")
            .field("config", &self.config)
            .field("cached_shapes", &self.cached_shapes())
            .finish()
    }
}
