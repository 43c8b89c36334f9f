//! # Integration Test Flows
//!
//! Tests that the shape inspector, the dual-dispatch event target and the
//! facade builder work together when a native object fires its callbacks.
//!
//! ## Flows Tested:
//!
//! 1. **Native callback → facade**: a raw callback becomes one event,
//!    delivered to the `on<kind>` handler first, then to listeners
//! 2. **Failure isolation**: a failing listener never stops delivery
//! 3. **Forwarding**: accessors and methods reach the live native object
//! 4. **Lifecycle**: dropping a facade detaches its native callbacks

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use serde_json::json;
    use std::sync::Arc;

    use ef_01_shape_inspector::{InspectorConfig, ShapeInspector};
    use ef_02_facade_builder::{
        Facade, FacadeApi, FacadeBuilder, FacadeError, FacadeMetrics, InMemoryFactory, InMemoryObject,
        Returned, SynthesisTable,
    };
    use facade_telemetry::{init_telemetry, TelemetryConfig, TelemetryError};
    use shared_bus::{
        CollectingReporter, DispatchMetrics, Event, Listener, ListenerError, ListenerOptions,
    };
    use shared_types::{Value, WrappedError};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    type CallLog = Arc<Mutex<Vec<String>>>;

    fn call_log() -> CallLog {
        Arc::new(Mutex::new(Vec::new()))
    }

    /// Listener that appends `name:kind` to the log
    fn recorder(log: &CallLog, name: &str) -> Listener {
        let log = log.clone();
        let name = name.to_string();
        Listener::new(move |event| log.lock().push(format!("{}:{}", name, event.kind())))
    }

    /// Native "Channel" object with one plain and one payload event
    fn channel_factory() -> Arc<InMemoryFactory> {
        Arc::new(
            InMemoryFactory::new("Channel")
                .property("label", json!("control"))
                .read_only("readyState", json!("connecting"))
                .method("send", |native, args| {
                    native.set_internal("bufferedAmount", json!(args.len()));
                    Ok(Returned::ready(Value::Array(args.to_vec())))
                })
                .method("close", |native, _| {
                    if native.property("readyState") == Some(json!("closed")) {
                        return Err(WrappedError::InvalidState("already closed".into()));
                    }
                    native.set_internal("readyState", json!("closed"));
                    Ok(Returned::ready(Value::Null))
                })
                .method("flush", |_, args| {
                    let count = args.len();
                    Ok(Returned::pending(async move { Ok(json!(count)) }))
                })
                .callback_slot("opened")
                .callback_slot("message"),
        )
    }

    fn channel_synthesis() -> SynthesisTable {
        SynthesisTable::new()
            .plain("opened")
            .passthrough("message")
    }

    fn open_channel(factory: &Arc<InMemoryFactory>) -> (Facade, Arc<InMemoryObject>) {
        let facade = FacadeBuilder::new(factory.clone())
            .synthesis(channel_synthesis())
            .build()
            .unwrap()
            .construct(&[])
            .unwrap();
        let native = factory.last_instance().unwrap();
        (facade, native)
    }

    // =============================================================================
    // INTEGRATION TESTS: NATIVE CALLBACK → FACADE
    // =============================================================================

    /// A native callback reaches a registered listener exactly once
    #[test]
    fn test_native_callback_reaches_listener_once() {
        let factory = channel_factory();
        let (facade, native) = open_channel(&factory);
        let log = call_log();

        facade.add_listener("opened", recorder(&log, "L1"), ListenerOptions::default());
        assert!(native.fire_event("opened", &[]));

        assert_eq!(*log.lock(), vec!["L1:opened"]);
    }

    /// Handler assigned after a listener still fires first
    #[test]
    fn test_handler_fires_before_earlier_listener() {
        let factory = channel_factory();
        let (facade, native) = open_channel(&factory);
        let log = call_log();

        facade.add_listener("opened", recorder(&log, "L1"), ListenerOptions::default());
        facade
            .set_handler_property("onopened", Some(recorder(&log, "L2")))
            .unwrap();
        native.fire_event("opened", &[]);

        assert_eq!(*log.lock(), vec!["L2:opened", "L1:opened"]);
    }

    /// Replacing the handler detaches the previous one
    #[test]
    fn test_replaced_handler_no_longer_receives() {
        let factory = channel_factory();
        let (facade, native) = open_channel(&factory);
        let log = call_log();

        facade.set_event_handler("opened", Some(recorder(&log, "L1"))).unwrap();
        facade.set_event_handler("opened", Some(recorder(&log, "L2"))).unwrap();
        native.fire_event("opened", &[]);

        assert_eq!(*log.lock(), vec!["L2:opened"]);
        assert_eq!(facade.listener_count("opened"), 1);
    }

    /// A listener that is both registered and the handler is called once
    #[test]
    fn test_listener_also_handler_called_once() {
        let factory = channel_factory();
        let (facade, native) = open_channel(&factory);
        let log = call_log();
        let listener = recorder(&log, "L");

        facade.add_listener("opened", listener.clone(), ListenerOptions::default());
        facade.set_event_handler("opened", Some(listener)).unwrap();
        native.fire_event("opened", &[]);
        native.fire_event("opened", &[]);

        assert_eq!(*log.lock(), vec!["L:opened", "L:opened"]);
    }

    /// Removing a listener mid-delivery takes effect on the next event
    #[test]
    fn test_removal_during_notify_applies_next_time() {
        let factory = channel_factory();
        let (facade, native) = open_channel(&factory);
        let facade = Arc::new(facade);
        let log = call_log();
        let victim = recorder(&log, "victim");

        let remover = {
            let facade = Arc::downgrade(&facade);
            let victim = victim.clone();
            let log = log.clone();
            Listener::new(move |_| {
                log.lock().push("remover".into());
                if let Some(facade) = facade.upgrade() {
                    facade.remove_listener("opened", &victim, ListenerOptions::default());
                }
            })
        };
        facade.add_listener("opened", remover, ListenerOptions::default());
        facade.add_listener("opened", victim, ListenerOptions::default());

        native.fire_event("opened", &[]);
        native.fire_event("opened", &[]);

        assert_eq!(
            *log.lock(),
            vec!["remover", "victim:opened", "remover"]
        );
    }

    /// Raw arguments become the detail of passthrough events
    #[test]
    fn test_passthrough_detail_flows_to_listener() {
        let factory = channel_factory();
        let (facade, native) = open_channel(&factory);
        let details = Arc::new(Mutex::new(Vec::new()));

        let sink = details.clone();
        facade.add_listener(
            "message",
            Listener::new(move |event| sink.lock().push(event.detail().clone())),
            ListenerOptions::default(),
        );
        native.fire_event("message", &[json!({ "data": "ping" })]);
        native.fire_event("message", &[json!(1), json!(2)]);

        assert_eq!(
            *details.lock(),
            vec![json!({ "data": "ping" }), json!([1, 2])]
        );
    }

    /// `once` listeners see a single native event
    #[test]
    fn test_once_listener_across_native_events() {
        let factory = channel_factory();
        let (facade, native) = open_channel(&factory);
        let log = call_log();

        facade.add_listener("opened", recorder(&log, "once"), ListenerOptions::once());
        native.fire_event("opened", &[]);
        native.fire_event("opened", &[]);

        assert_eq!(*log.lock(), vec!["once:opened"]);
        assert_eq!(facade.listener_count("opened"), 0);
    }

    // =============================================================================
    // INTEGRATION TESTS: FAILURE ISOLATION
    // =============================================================================

    /// A failing listener does not stop later listeners nor the return value
    #[test]
    fn test_failing_listener_is_isolated() {
        let factory = channel_factory();
        let reporter = Arc::new(CollectingReporter::new());
        let facade = FacadeBuilder::new(factory.clone())
            .synthesis(channel_synthesis())
            .failure_reporter(reporter.clone())
            .build()
            .unwrap()
            .construct(&[])
            .unwrap();
        let log = call_log();

        facade.add_listener(
            "opened",
            Listener::fallible(|_| Err(ListenerError::failed("L3 broke"))).named("L3"),
            ListenerOptions::default(),
        );
        facade.add_listener(
            "opened",
            Listener::new(|_| panic!("L3b panicked")),
            ListenerOptions::default(),
        );
        facade.add_listener("opened", recorder(&log, "L4"), ListenerOptions::default());

        assert!(facade.notify(&Event::new("opened")));
        assert_eq!(*log.lock(), vec!["L4:opened"]);

        let failures = reporter.failures();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].label.as_deref(), Some("L3"));
        assert!(matches!(failures[1].error, ListenerError::Panicked(_)));
    }

    /// Cancelation is reported through the notify return value
    #[test]
    fn test_cancelable_event_prevented_by_listener() {
        let factory = channel_factory();
        let (facade, _native) = open_channel(&factory);

        facade.add_listener(
            "opened",
            Listener::new(|event| event.prevent_default()),
            ListenerOptions::default(),
        );

        assert!(facade.notify(&Event::new("opened")));
        assert!(!facade.notify(&Event::new("opened").with_cancelable(true)));
    }

    // =============================================================================
    // INTEGRATION TESTS: FORWARDING
    // =============================================================================

    /// Accessors read and write the live native value
    #[test]
    fn test_accessors_forward_live_values() {
        let factory = channel_factory();
        let (facade, native) = open_channel(&factory);

        assert_eq!(facade.get("label").unwrap(), json!("control"));
        facade.set("label", json!("data")).unwrap();
        assert_eq!(native.property("label"), Some(json!("data")));

        native.set_internal("readyState", json!("open"));
        assert_eq!(facade.get("readyState").unwrap(), json!("open"));
        assert!(matches!(
            facade.set("readyState", json!("closed")),
            Err(FacadeError::ReadOnlyMember(_))
        ));
    }

    /// Methods keep argument order and return values, and fail the same way
    #[test]
    fn test_methods_forward_arguments_and_failures() {
        let factory = channel_factory();
        let (facade, native) = open_channel(&factory);

        let echoed = facade
            .invoke("send", &[json!("a"), json!("b"), json!(3)])
            .unwrap()
            .into_ready()
            .unwrap();
        assert_eq!(echoed, json!(["a", "b", 3]));
        assert_eq!(native.property("bufferedAmount"), Some(json!(3)));

        facade.invoke("close", &[]).unwrap();
        let err = facade.invoke("close", &[]).unwrap_err();
        assert_eq!(
            err.wrapped(),
            Some(&WrappedError::InvalidState("already closed".into()))
        );
    }

    /// Pending results are handed back and settle later
    #[tokio::test]
    async fn test_pending_method_settles() {
        let factory = channel_factory();
        let (facade, _native) = open_channel(&factory);

        let returned = facade.invoke("flush", &[json!(1), json!(2)]).unwrap();
        assert!(returned.is_pending());
        assert_eq!(returned.settle().await.unwrap(), json!(2));
        assert_eq!(facade.invoke_settled("flush", &[]).await.unwrap(), json!(0));
    }

    /// Facades from concurrent tasks stay independent
    #[tokio::test]
    async fn test_concurrent_facades_are_independent() {
        let factory = channel_factory();
        let facade_type = Arc::new(
            FacadeBuilder::new(factory.clone())
                .synthesis(channel_synthesis())
                .build()
                .unwrap(),
        );

        let tasks: Vec<_> = (0..4)
            .map(|i| {
                let facade_type = facade_type.clone();
                tokio::spawn(async move {
                    let facade = facade_type.construct(&[json!(i)]).unwrap();
                    facade.set("label", json!(format!("ch-{}", i))).unwrap();
                    facade.get("label").unwrap()
                })
            })
            .collect();

        let labels: Vec<Value> = futures::future::join_all(tasks)
            .await
            .into_iter()
            .map(Result::unwrap)
            .collect();
        assert_eq!(
            labels,
            vec![json!("ch-0"), json!("ch-1"), json!("ch-2"), json!("ch-3")]
        );
    }

    // =============================================================================
    // INTEGRATION TESTS: LIFECYCLE AND METRICS
    // =============================================================================

    /// Dropping the facade clears every native slot it installed
    #[test]
    fn test_drop_detaches_native_callbacks() {
        let factory = channel_factory();
        let (facade, native) = open_channel(&factory);
        assert_eq!(native.installed_slots(), vec!["onmessage", "onopened"]);

        drop(facade);

        assert!(native.installed_slots().is_empty());
        assert!(!native.fire_event("opened", &[]));
    }

    /// Facade types built from one inspector share its classification cache
    #[test]
    fn test_shared_inspector_classifies_once() {
        let factory = channel_factory();
        let inspector = Arc::new(ShapeInspector::new(InspectorConfig::default()).unwrap());

        for _ in 0..3 {
            FacadeBuilder::new(factory.clone())
                .synthesis(channel_synthesis())
                .inspector(inspector.clone())
                .build()
                .unwrap();
        }

        assert_eq!(inspector.cached_shapes(), 1);
    }

    /// Counters follow construction, forwarding and delivery
    #[test]
    fn test_metrics_follow_activity() {
        let factory = channel_factory();
        let metrics = Arc::new(FacadeMetrics::new());
        let dispatch = Arc::new(DispatchMetrics::new());
        let facade = FacadeBuilder::new(factory.clone())
            .synthesis(channel_synthesis())
            .metrics(metrics.clone())
            .dispatch_metrics(dispatch.clone())
            .build()
            .unwrap()
            .construct(&[])
            .unwrap();
        let native = factory.last_instance().unwrap();
        let log = call_log();

        facade.add_listener("opened", recorder(&log, "L"), ListenerOptions::default());
        native.fire_event("opened", &[]);
        facade.get("label").unwrap();
        let _ = facade.invoke("nonexistent", &[]);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.constructions, 1);
        assert_eq!(snapshot.native_events, 1);
        assert_eq!(snapshot.forwarded_gets, 1);

        let delivered = dispatch.snapshot();
        assert_eq!(delivered.events_notified, 1);
        assert_eq!(delivered.listener_invocations, 1);
        assert_eq!(facade.dispatch_metrics(), delivered);
    }

    /// Logs from a full flow go through the installed subscriber
    #[test]
    fn test_telemetry_wraps_a_facade_flow() {
        let config = TelemetryConfig::default()
            .with_service_name("ef-tests")
            .with_log_level("debug")
            .with_console_output(false);

        let guard = match init_telemetry(config) {
            Ok(guard) => Some(guard),
            Err(TelemetryError::AlreadyInitialized(_)) => None,
            Err(other) => panic!("unexpected telemetry error: {}", other),
        };
        if let Some(guard) = &guard {
            assert_eq!(guard.service_name(), "ef-tests");
        }

        let factory = channel_factory();
        let (facade, native) = open_channel(&factory);
        let log = call_log();
        facade.add_listener("opened", recorder(&log, "L"), ListenerOptions::default());
        native.fire_event("opened", &[]);

        assert_eq!(*log.lock(), vec!["L:opened"]);
    }
}
