//! Facade Instance
//!
//! One constructed facade: an event target plus forwarding to the wrapped
//! object it exclusively owns.

use crate::domain::SynthesisTable;
use crate::error::FacadeError;
use crate::metrics::{ForwardOp, MetricsRecorder};
use crate::ports::inbound::FacadeApi;
use crate::ports::outbound::{Returned, WrappedObject};
use ef_01_shape_inspector::MemberClassification;
use shared_bus::{DispatchSnapshot, Event, EventTarget, Listener, ListenerOptions, SlotError};
use shared_types::{slot_kind, slot_property, Value, WrappedError};
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Handle to a constructed facade.
///
/// Clones share the same instance. When the last clone is dropped the
/// callbacks installed on the wrapped object are detached and the wrapped
/// object is released.
#[derive(Clone)]
pub struct Facade {
    inner: Arc<FacadeInner>,
}

pub(crate) struct FacadeParts {
    pub type_name: Arc<str>,
    pub wrapped: Arc<dyn WrappedObject>,
    pub target: Arc<EventTarget>,
    pub members: Arc<MemberClassification>,
    pub synthesis: Arc<SynthesisTable>,
    pub metrics: Arc<dyn MetricsRecorder>,
}

struct FacadeInner {
    instance_id: Uuid,
    parts: FacadeParts,
}

impl Facade {
    pub(crate) fn new(parts: FacadeParts) -> Self {
        Self {
            inner: Arc::new(FacadeInner {
                instance_id: Uuid::new_v4(),
                parts,
            }),
        }
    }

    fn parts(&self) -> &FacadeParts {
        &self.inner.parts
    }

    /// Identifier of this instance, for logs.
    pub fn instance_id(&self) -> Uuid {
        self.inner.instance_id
    }

    /// Name of the wrapped type.
    pub fn type_name(&self) -> &str {
        &self.parts().type_name
    }

    /// The wrapped object.
    pub fn wrapped(&self) -> &Arc<dyn WrappedObject> {
        &self.parts().wrapped
    }

    /// Forwarded accessor names, sorted.
    pub fn accessor_names(&self) -> &[String] {
        self.parts().members.accessor_names()
    }

    /// Forwarded method names, sorted.
    pub fn method_names(&self) -> &[String] {
        self.parts().members.method_names()
    }

    /// Declared event kinds, sorted.
    pub fn event_kinds(&self) -> Vec<String> {
        self.parts().synthesis.kinds().map(str::to_string).collect()
    }

    /// Registrations for `kind`, the `on<kind>` handler included.
    pub fn listener_count(&self, kind: &str) -> usize {
        self.parts().target.listener_count(kind)
    }

    /// Assign a handler through its property name (`"on<kind>"`).
    pub fn set_handler_property(
        &self,
        property: &str,
        handler: Option<Listener>,
    ) -> Result<(), FacadeError> {
        let kind = slot_kind(property).ok_or_else(|| self.unknown_member(property))?;
        self.set_event_handler(kind, handler)
    }

    /// Read a handler through its property name (`"on<kind>"`).
    pub fn handler_property(&self, property: &str) -> Result<Option<Listener>, FacadeError> {
        let kind = slot_kind(property).ok_or_else(|| self.unknown_member(property))?;
        if !self.parts().synthesis.contains(kind) {
            return Err(FacadeError::UnknownEventKind(kind.to_string()));
        }
        Ok(self.event_handler(kind))
    }

    /// Delivery counters of this facade type.
    pub fn dispatch_metrics(&self) -> DispatchSnapshot {
        self.parts().target.metrics().snapshot()
    }

    fn unknown_member(&self, name: &str) -> FacadeError {
        FacadeError::UnknownMember {
            type_name: self.type_name().to_string(),
            name: name.to_string(),
        }
    }

    fn check_accessor(&self, name: &str) -> Result<(), FacadeError> {
        let members = &self.parts().members;
        if members.is_accessor(name) {
            Ok(())
        } else if members.is_method(name) {
            Err(FacadeError::NotAnAccessor(name.to_string()))
        } else {
            Err(self.unknown_member(name))
        }
    }

    fn forwarded<T>(&self, op: ForwardOp, result: Result<T, WrappedError>) -> Result<T, FacadeError> {
        self.parts().metrics.record_forward(op, result.is_ok());
        result.map_err(FacadeError::Forwarding)
    }
}

impl FacadeApi for Facade {
    fn add_listener(&self, kind: &str, listener: Listener, options: ListenerOptions) -> bool {
        self.parts().target.add_listener(kind, listener, options)
    }

    fn remove_listener(&self, kind: &str, listener: &Listener, options: ListenerOptions) -> bool {
        self.parts().target.remove_listener(kind, listener, options)
    }

    fn notify(&self, event: &Event) -> bool {
        self.parts().target.notify(event)
    }

    fn set_event_handler(&self, kind: &str, handler: Option<Listener>) -> Result<(), FacadeError> {
        self.parts()
            .target
            .set_handler(kind, handler)
            .map_err(|SlotError::UnknownSlot(kind)| FacadeError::UnknownEventKind(kind))
    }

    fn event_handler(&self, kind: &str) -> Option<Listener> {
        self.parts().target.handler(kind)
    }

    fn get(&self, name: &str) -> Result<Value, FacadeError> {
        self.check_accessor(name)?;
        let result = self.parts().wrapped.get(name);
        self.forwarded(ForwardOp::Get, result)
    }

    fn set(&self, name: &str, value: Value) -> Result<(), FacadeError> {
        self.check_accessor(name)?;
        if !self.parts().members.is_writable(name) {
            return Err(FacadeError::ReadOnlyMember(name.to_string()));
        }
        let result = self.parts().wrapped.set(name, value);
        self.forwarded(ForwardOp::Set, result)
    }

    fn invoke(&self, name: &str, args: &[Value]) -> Result<Returned, FacadeError> {
        let members = &self.parts().members;
        if !members.is_method(name) {
            return Err(if members.is_accessor(name) {
                FacadeError::NotAMethod(name.to_string())
            } else {
                self.unknown_member(name)
            });
        }
        let result = self.parts().wrapped.call(name, args);
        self.forwarded(ForwardOp::Call, result)
    }
}

impl Drop for FacadeInner {
    fn drop(&mut self) {
        for kind in self.parts.synthesis.kinds() {
            let slot = slot_property(kind);
            if let Err(error) = self.parts.wrapped.set_callback(&slot, None) {
                debug!(slot = %slot, error = %error, "Failed to detach native callback");
            }
        }
        debug!(
            type_name = %self.parts.type_name,
            instance_id = %self.instance_id,
            "Facade released"
        );
    }
}

impl fmt::Debug for Facade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Facade")
            .field("type_name", &self.type_name())
            .field("instance_id", &self.instance_id())
            .field("event_kinds", &self.event_kinds())
            .finish()
    }
}
