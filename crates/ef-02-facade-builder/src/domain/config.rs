//! Facade configuration

use crate::error::FacadeError;
use ef_01_shape_inspector::InspectorConfig;
use serde::{Deserialize, Serialize};
use shared_bus::DispatchConfig;

/// Configuration shared by every instance of one facade type
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacadeConfig {
    /// Member classification settings
    pub inspector: InspectorConfig,
    /// Event delivery settings
    pub dispatch: DispatchConfig,
}

impl FacadeConfig {
    pub fn validate(&self) -> Result<(), FacadeError> {
        self.inspector.validate()?;
        Ok(())
    }

    /// Builder-style method to set the inspector configuration
    pub fn with_inspector(mut self, inspector: InspectorConfig) -> Self {
        self.inspector = inspector;
        self
    }

    /// Builder-style method to set the dispatch configuration
    pub fn with_dispatch(mut self, dispatch: DispatchConfig) -> Self {
        self.dispatch = dispatch;
        self
    }
}
