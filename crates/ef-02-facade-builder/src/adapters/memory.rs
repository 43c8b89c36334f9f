//! In-memory wrapped object
//!
//! Implements the `WrappedObject` and `WrappedFactory` ports with a property
//! map, scripted methods and a callback table. Used to exercise facades
//! without a native object; `InMemoryObject::fire` plays the native side of a
//! callback.

use crate::ports::outbound::{NativeCallback, Returned, WrappedFactory, WrappedObject};
use parking_lot::{Mutex, RwLock};
use shared_types::{slot_kind, slot_property, MemberDescriptor, ShapeBlueprint, Value, WrappedError};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Weak};
use tracing::debug;

/// Scripted method body. Receives the object it was called on.
pub type MethodFn =
    Arc<dyn Fn(&InMemoryObject, &[Value]) -> Result<Returned, WrappedError> + Send + Sync>;

type ArgsValidator = Arc<dyn Fn(&[Value]) -> Result<(), WrappedError> + Send + Sync>;

/// In-memory wrapped object.
pub struct InMemoryObject {
    type_name: String,
    constructor_args: Vec<Value>,
    properties: RwLock<HashMap<String, Value>>,
    read_only: HashSet<String>,
    methods: HashMap<String, MethodFn>,
    callbacks: Mutex<BTreeMap<String, NativeCallback>>,
    calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl InMemoryObject {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Arguments the object was constructed with.
    pub fn constructor_args(&self) -> &[Value] {
        &self.constructor_args
    }

    /// Current value of a property.
    pub fn property(&self, name: &str) -> Option<Value> {
        self.properties.read().get(name).cloned()
    }

    /// Change a property from the native side, read-only ones included.
    pub fn set_internal(&self, name: &str, value: Value) {
        self.properties.write().insert(name.to_string(), value);
    }

    /// Invoke the callback stored in `slot` with `raw` arguments.
    ///
    /// Returns `false` if the slot is empty.
    pub fn fire(&self, slot: &str, raw: &[Value]) -> bool {
        let callback = self.callbacks.lock().get(slot).cloned();
        match callback {
            Some(callback) => {
                callback(raw);
                true
            }
            None => false,
        }
    }

    /// Invoke the callback for event `kind`.
    pub fn fire_event(&self, kind: &str, raw: &[Value]) -> bool {
        self.fire(&slot_property(kind), raw)
    }

    pub fn has_callback(&self, slot: &str) -> bool {
        self.callbacks.lock().contains_key(slot)
    }

    /// Slots holding a callback, sorted.
    pub fn installed_slots(&self) -> Vec<String> {
        self.callbacks.lock().keys().cloned().collect()
    }

    /// Method calls received so far, oldest first.
    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().clone()
    }
}

impl WrappedObject for InMemoryObject {
    fn get(&self, name: &str) -> Result<Value, WrappedError> {
        if let Some(value) = self.property(name) {
            return Ok(value);
        }
        if self.methods.contains_key(name) {
            return Err(WrappedError::TypeError(format!("{name} is a method")));
        }
        Err(WrappedError::NoSuchMember(name.to_string()))
    }

    fn set(&self, name: &str, value: Value) -> Result<(), WrappedError> {
        if self.read_only.contains(name) {
            return Err(WrappedError::TypeError(format!(
                "Cannot set read-only property {name}"
            )));
        }
        let mut properties = self.properties.write();
        match properties.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(WrappedError::NoSuchMember(name.to_string())),
        }
    }

    fn call(&self, name: &str, args: &[Value]) -> Result<Returned, WrappedError> {
        self.calls.lock().push((name.to_string(), args.to_vec()));
        let method = self
            .methods
            .get(name)
            .cloned()
            .ok_or_else(|| WrappedError::NoSuchMember(name.to_string()))?;
        method(self, args)
    }

    fn set_callback(&self, slot: &str, callback: Option<NativeCallback>) -> Result<(), WrappedError> {
        if slot_kind(slot).is_none() {
            return Err(WrappedError::NoSuchMember(slot.to_string()));
        }
        let mut callbacks = self.callbacks.lock();
        match callback {
            Some(callback) => {
                callbacks.insert(slot.to_string(), callback);
            }
            None => {
                callbacks.remove(slot);
            }
        }
        Ok(())
    }
}

/// Factory for [`InMemoryObject`]s sharing one shape.
///
/// ```ignore
/// let factory = InMemoryFactory::new("Socket")
///     .read_only("readyState", json!("connecting"))
///     .method("send", |_, args| Ok(Returned::ready(args.len())))
///     .callback_slot("open");
/// ```
pub struct InMemoryFactory {
    blueprint: ShapeBlueprint,
    properties: HashMap<String, Value>,
    read_only: HashSet<String>,
    methods: HashMap<String, MethodFn>,
    validator: Option<ArgsValidator>,
    instances: Mutex<Vec<Weak<InMemoryObject>>>,
}

impl InMemoryFactory {
    /// Factory for `type_name` objects with only a constructor.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            blueprint: ShapeBlueprint::new(type_name)
                .with_member(MemberDescriptor::method("constructor")),
            properties: HashMap::new(),
            read_only: HashSet::new(),
            methods: HashMap::new(),
            validator: None,
            instances: Mutex::new(Vec::new()),
        }
    }

    /// Add a read/write property.
    pub fn property(mut self, name: impl Into<String>, initial: Value) -> Self {
        let name = name.into();
        self.blueprint.members.push(MemberDescriptor::accessor(name.clone()));
        self.properties.insert(name, initial);
        self
    }

    /// Add a read-only property.
    pub fn read_only(mut self, name: impl Into<String>, initial: Value) -> Self {
        let name = name.into();
        self.blueprint.members.push(MemberDescriptor::read_only(name.clone()));
        self.read_only.insert(name.clone());
        self.properties.insert(name, initial);
        self
    }

    /// Add a method.
    pub fn method(
        mut self,
        name: impl Into<String>,
        body: impl Fn(&InMemoryObject, &[Value]) -> Result<Returned, WrappedError> + Send + Sync + 'static,
    ) -> Self {
        let name = name.into();
        self.blueprint.members.push(MemberDescriptor::method(name.clone()));
        self.methods.insert(name, Arc::new(body));
        self
    }

    /// Declare the `on<kind>` callback property in the blueprint.
    pub fn callback_slot(mut self, kind: &str) -> Self {
        self.blueprint
            .members
            .push(MemberDescriptor::accessor(slot_property(kind)));
        self
    }

    /// Add a blueprint member with no behavior.
    pub fn member(mut self, descriptor: MemberDescriptor) -> Self {
        self.blueprint.members.push(descriptor);
        self
    }

    /// Check constructor arguments before instantiating.
    pub fn validate_args(
        mut self,
        validator: impl Fn(&[Value]) -> Result<(), WrappedError> + Send + Sync + 'static,
    ) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Live objects created by this factory, oldest first.
    pub fn instances(&self) -> Vec<Arc<InMemoryObject>> {
        let mut instances = self.instances.lock();
        instances.retain(|weak| weak.strong_count() > 0);
        instances.iter().filter_map(Weak::upgrade).collect()
    }

    /// Most recently created object, if still alive.
    pub fn last_instance(&self) -> Option<Arc<InMemoryObject>> {
        self.instances.lock().last().and_then(Weak::upgrade)
    }

    fn create(&self, args: &[Value]) -> Result<Arc<InMemoryObject>, WrappedError> {
        if let Some(validator) = &self.validator {
            validator(args)?;
        }

        let object = Arc::new(InMemoryObject {
            type_name: self.blueprint.type_name.clone(),
            constructor_args: args.to_vec(),
            properties: RwLock::new(self.properties.clone()),
            read_only: self.read_only.clone(),
            methods: self.methods.clone(),
            callbacks: Mutex::new(BTreeMap::new()),
            calls: Mutex::new(Vec::new()),
        });
        self.instances.lock().push(Arc::downgrade(&object));

        debug!(type_name = %self.blueprint.type_name, "In-memory object created");
        Ok(object)
    }
}

impl WrappedFactory for InMemoryFactory {
    fn blueprint(&self) -> &ShapeBlueprint {
        &self.blueprint
    }

    fn instantiate(&self, args: &[Value]) -> Result<Arc<dyn WrappedObject>, WrappedError> {
        let object: Arc<dyn WrappedObject> = self.create(args)?;
        Ok(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn factory() -> InMemoryFactory {
        InMemoryFactory::new("Socket")
            .property("binaryType", json!("blob"))
            .read_only("readyState", json!(0))
            .method("send", |_, args| Ok(Returned::ready(args.len())))
            .callback_slot("open")
    }

    #[test]
    fn test_blueprint_lists_members() {
        let factory = factory();
        let blueprint = factory.blueprint();
        let member = |name: &str| blueprint.members.iter().find(|m| m.name == name);
        assert_eq!(factory.type_name(), "Socket");
        assert!(member("constructor").is_some());
        assert!(member("onopen").unwrap().is_writable());
        assert!(!member("readyState").unwrap().is_writable());
    }

    #[test]
    fn test_properties_and_read_only() {
        let factory = factory();
        let object = factory.instantiate(&[]).unwrap();

        object.set("binaryType", json!("arraybuffer")).unwrap();
        assert_eq!(object.get("binaryType").unwrap(), json!("arraybuffer"));
        assert!(matches!(
            object.set("readyState", json!(1)),
            Err(WrappedError::TypeError(_))
        ));
        assert_eq!(
            object.get("missing"),
            Err(WrappedError::NoSuchMember("missing".into()))
        );
    }

    #[test]
    fn test_calls_are_logged() {
        let factory = factory();
        let object = factory.instantiate(&[]).unwrap();

        let returned = object.call("send", &[json!(1), json!(2)]).unwrap();
        assert_eq!(returned.into_ready(), Some(json!(2)));

        let instance = factory.last_instance().unwrap();
        assert_eq!(instance.calls(), vec![("send".to_string(), vec![json!(1), json!(2)])]);
    }

    #[test]
    fn test_fire_invokes_installed_callback() {
        let factory = factory();
        let object = factory.instantiate(&[]).unwrap();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = hits.clone();
        object
            .set_callback(
                "onopen",
                Some(Arc::new(move |_: &[Value]| {
                    counter.fetch_add(1, Ordering::SeqCst);
                })),
            )
            .unwrap();

        let instance = factory.last_instance().unwrap();
        assert!(instance.fire_event("open", &[]));
        assert!(!instance.fire("onclose", &[]));
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        object.set_callback("onopen", None).unwrap();
        assert!(!instance.has_callback("onopen"));
    }

    #[test]
    fn test_callback_slots_need_on_prefix() {
        let factory = factory();
        let object = factory.instantiate(&[]).unwrap();
        assert!(object.set_callback("open", None).is_err());
    }

    #[test]
    fn test_validator_rejects_arguments() {
        let factory = factory().validate_args(|args| {
            if args.is_empty() {
                Err(WrappedError::TypeError("url required".into()))
            } else {
                Ok(())
            }
        });

        assert!(factory.instantiate(&[]).is_err());
        assert!(factory.instances().is_empty());

        let object = factory.instantiate(&[json!("wss://example.test")]);
        assert!(object.is_ok());
        assert_eq!(
            factory.last_instance().unwrap().constructor_args(),
            [json!("wss://example.test")]
        );
    }

    #[test]
    fn test_dropped_instances_are_forgotten() {
        let factory = factory();
        let object = factory.instantiate(&[]).unwrap();
        assert_eq!(factory.instances().len(), 1);
        drop(object);
        assert!(factory.instances().is_empty());
    }
}
