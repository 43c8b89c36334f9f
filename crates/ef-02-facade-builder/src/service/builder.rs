//! Facade Builder
//!
//! Turns a wrapped-object factory and a synthesis table into a
//! [`FacadeType`].
//!
//! ```ignore
//! let facade_type = FacadeBuilder::new(factory)
//!     .synthesis(SynthesisTable::new().plain("open").passthrough("message"))
//!     .exclude("legacySend")
//!     .build()?;
//!
//! let socket = facade_type.construct(&[json!("wss://example.test")])?;
//! ```

use crate::domain::{FacadeConfig, SynthesisTable};
use crate::error::FacadeError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::outbound::WrappedFactory;
use crate::service::facade_type::FacadeType;
use ef_01_shape_inspector::{MemberClassification, ShapeInspector};
use shared_bus::{DispatchMetrics, FailureReporter, TracingFailureReporter};
use shared_types::slot_property;
use std::sync::Arc;
use tracing::debug;

/// Fluent builder for [`FacadeType`].
pub struct FacadeBuilder {
    factory: Arc<dyn WrappedFactory>,
    synthesis: SynthesisTable,
    config: FacadeConfig,
    inspector: Option<Arc<ShapeInspector>>,
    classification: Option<Arc<MemberClassification>>,
    reporter: Arc<dyn FailureReporter>,
    dispatch_metrics: Arc<DispatchMetrics>,
    metrics: Arc<dyn MetricsRecorder>,
}

impl FacadeBuilder {
    pub fn new(factory: Arc<dyn WrappedFactory>) -> Self {
        Self {
            factory,
            synthesis: SynthesisTable::new(),
            config: FacadeConfig::default(),
            inspector: None,
            classification: None,
            reporter: Arc::new(TracingFailureReporter),
            dispatch_metrics: Arc::new(DispatchMetrics::new()),
            metrics: Arc::new(NoOpMetrics),
        }
    }

    /// Event kinds to adapt and how their events are synthesized.
    pub fn synthesis(mut self, synthesis: SynthesisTable) -> Self {
        self.synthesis = synthesis;
        self
    }

    /// Keep a member out of forwarding.
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.config.inspector.exclusions.insert(name);
        self
    }

    pub fn config(mut self, config: FacadeConfig) -> Self {
        self.config = config;
        self
    }

    /// Classify through a shared inspector instead of a private one.
    ///
    /// The inspector's own exclusion list applies, and members excluded on
    /// this builder are removed from its result.
    pub fn inspector(mut self, inspector: Arc<ShapeInspector>) -> Self {
        self.inspector = Some(inspector);
        self
    }

    /// Use a precomputed classification. Builder exclusions still apply.
    pub fn classification(mut self, classification: Arc<MemberClassification>) -> Self {
        self.classification = Some(classification);
        self
    }

    /// Where listener failures of every instance are reported.
    pub fn failure_reporter(mut self, reporter: Arc<dyn FailureReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Counters for construction and forwarding.
    pub fn metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Delivery counters shared by every instance.
    pub fn dispatch_metrics(mut self, metrics: Arc<DispatchMetrics>) -> Self {
        self.dispatch_metrics = metrics;
        self
    }

    /// Validate the configuration and build the facade type.
    pub fn build(self) -> Result<FacadeType, FacadeError> {
        self.config.validate()?;
        self.synthesis.validate()?;

        let blueprint = self.factory.blueprint();
        let classification = match (self.classification, &self.inspector) {
            (Some(classification), _) => classification,
            (None, Some(inspector)) => inspector.classify(blueprint),
            (None, None) => ShapeInspector::new(self.config.inspector.clone())?.classify(blueprint),
        };

        // Builder exclusions hold whichever way the classification was obtained.
        let slots: Vec<String> = self.synthesis.kinds().map(slot_property).collect();
        let hidden = slots
            .iter()
            .map(String::as_str)
            .chain(self.config.inspector.exclusions.iter());
        let members = Arc::new(classification.without(hidden));
        let name: Arc<str> = Arc::from(self.factory.type_name());

        debug!(
            type_name = %name,
            accessors = members.accessor_names().len(),
            methods = members.method_names().len(),
            kinds = self.synthesis.len(),
            "Facade type built"
        );

        Ok(FacadeType {
            name,
            factory: Arc::clone(&self.factory),
            synthesis: Arc::new(self.synthesis),
            members,
            dispatch: self.config.dispatch,
            reporter: self.reporter,
            dispatch_metrics: self.dispatch_metrics,
            metrics: self.metrics,
        })
    }
}

/// Build a facade type from a factory, a synthesis table and a
/// precomputed classification.
pub fn build_facade_type(
    factory: Arc<dyn WrappedFactory>,
    synthesis: SynthesisTable,
    classification: Arc<MemberClassification>,
) -> Result<FacadeType, FacadeError> {
    FacadeBuilder::new(factory)
        .synthesis(synthesis)
        .classification(classification)
        .build()
}
