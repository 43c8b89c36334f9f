//! Facade Type
//!
//! The product of [`crate::FacadeBuilder`]: everything shared by the
//! instances of one facade type, and the construction procedure.

use crate::domain::SynthesisTable;
use crate::error::FacadeError;
use crate::metrics::MetricsRecorder;
use crate::ports::outbound::{NativeCallback, WrappedFactory, WrappedObject};
use crate::service::facade::{Facade, FacadeParts};
use ef_01_shape_inspector::MemberClassification;
use shared_bus::{DispatchConfig, DispatchMetrics, EventTarget, FailureReporter};
use shared_types::{slot_property, Value};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// A facade type over one wrapped-object type.
pub struct FacadeType {
    pub(crate) name: Arc<str>,
    pub(crate) factory: Arc<dyn WrappedFactory>,
    pub(crate) synthesis: Arc<SynthesisTable>,
    pub(crate) members: Arc<MemberClassification>,
    pub(crate) dispatch: DispatchConfig,
    pub(crate) reporter: Arc<dyn FailureReporter>,
    pub(crate) dispatch_metrics: Arc<DispatchMetrics>,
    pub(crate) metrics: Arc<dyn MetricsRecorder>,
}

impl FacadeType {
    /// Name of the wrapped type, which the facade type keeps.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Forwarded members shared by every instance.
    pub fn members(&self) -> &MemberClassification {
        &self.members
    }

    /// Declared event kinds, sorted.
    pub fn event_kinds(&self) -> impl Iterator<Item = &str> + '_ {
        self.synthesis.kinds()
    }

    /// Delivery counters shared by every instance.
    pub fn dispatch_metrics(&self) -> &Arc<DispatchMetrics> {
        &self.dispatch_metrics
    }

    /// Construct a facade around a new wrapped object.
    ///
    /// 1. The factory instantiates the wrapped object from `args`.
    /// 2. One callback per declared kind is installed into its `on<kind>`
    ///    slot.
    ///
    /// A factory failure is returned unchanged as
    /// [`FacadeError::Construction`]. If installing a callback fails, the
    /// callbacks installed so far are removed and that failure is returned
    /// the same way.
    pub fn construct(&self, args: &[Value]) -> Result<Facade, FacadeError> {
        let wrapped = match self.factory.instantiate(args) {
            Ok(wrapped) => wrapped,
            Err(error) => {
                self.metrics.record_construction(false);
                warn!(type_name = %self.name, error = %error, "Wrapped object construction failed");
                return Err(FacadeError::Construction(error));
            }
        };

        let target = Arc::new(
            EventTarget::new()
                .with_slots(self.synthesis.kinds())
                .with_config(self.dispatch.clone())
                .with_reporter(Arc::clone(&self.reporter))
                .with_metrics(Arc::clone(&self.dispatch_metrics)),
        );

        let mut installed: Vec<String> = Vec::with_capacity(self.synthesis.len());
        for kind in self.synthesis.kinds() {
            let slot = slot_property(kind);
            let callback = self.native_callback(kind, &target);
            if let Err(error) = wrapped.set_callback(&slot, Some(callback)) {
                detach(&*wrapped, &installed);
                self.metrics.record_construction(false);
                warn!(
                    type_name = %self.name,
                    slot = %slot,
                    error = %error,
                    "Failed to install native callback"
                );
                return Err(FacadeError::Construction(error));
            }
            installed.push(slot);
        }

        self.metrics.record_construction(true);
        let facade = Facade::new(FacadeParts {
            type_name: Arc::clone(&self.name),
            wrapped,
            target,
            members: Arc::clone(&self.members),
            synthesis: Arc::clone(&self.synthesis),
            metrics: Arc::clone(&self.metrics),
        });

        debug!(
            type_name = %self.name,
            instance_id = %facade.instance_id(),
            slots = installed.len(),
            "Facade constructed"
        );
        Ok(facade)
    }

    /// Callback for `kind`: synthesize the event and notify the facade's
    /// target. Holds the target weakly so the wrapped object never keeps a
    /// released facade alive.
    fn native_callback(&self, kind: &str, target: &Arc<EventTarget>) -> NativeCallback {
        let target = Arc::downgrade(target);
        let synthesis = Arc::clone(&self.synthesis);
        let metrics = Arc::clone(&self.metrics);
        let kind = kind.to_string();

        Arc::new(move |raw: &[Value]| {
            let Some(target) = target.upgrade() else {
                debug!(kind = %kind, "Native callback after facade release ignored");
                return;
            };
            if let Some(event) = synthesis.synthesize(&kind, raw) {
                metrics.record_native_event(&kind);
                target.notify(&event);
            }
        })
    }
}

fn detach(wrapped: &dyn WrappedObject, slots: &[String]) {
    for slot in slots {
        if let Err(error) = wrapped.set_callback(slot, None) {
            debug!(slot = %slot, error = %error, "Failed to detach native callback");
        }
    }
}

impl fmt::Debug for FacadeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacadeType")
            .field("name", &self.name)
            .field("members", &self.members)
            .field("synthesis", &self.synthesis)
            .finish()
    }
}
