//! # Peer-Connection Flow
//!
//! Drives a scripted native peer connection through offer creation and ICE
//! gathering, and checks what the facade's listeners observe.

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use serde_json::json;
    use std::sync::Arc;

    use ef_02_facade_builder::{FacadeApi, FacadeError, InMemoryFactory, Returned};
    use ef_03_peer_connection::{
        peer_connection_builder, peer_connection_type, typed_listener, IceCandidateInit,
        PeerConnectionEvent, PeerEventKind,
    };
    use shared_bus::{Listener, ListenerOptions};
    use shared_types::{MemberDescriptor, Value};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Native peer connection that gathers two candidates on `setLocalDescription`
    fn native_peer_connection() -> Arc<InMemoryFactory> {
        let mut factory = InMemoryFactory::new("RTCPeerConnection")
            .read_only("signalingState", json!("stable"))
            .read_only("iceGatheringState", json!("new"))
            .property("localDescription", Value::Null)
            .method("createOffer", |_, _| {
                Ok(Returned::pending(async { Ok(json!({ "type": "offer", "sdp": "v=0" })) }))
            })
            .method("setLocalDescription", |native, args| {
                let description = args.first().cloned().unwrap_or(Value::Null);
                native.set_internal("localDescription", description);
                native.set_internal("signalingState", json!("have-local-offer"));
                native.fire_event("signalingstatechange", &[]);

                native.set_internal("iceGatheringState", json!("gathering"));
                native.fire_event("icegatheringstatechange", &[]);
                for (index, address) in ["192.0.2.10", "198.51.100.7"].iter().enumerate() {
                    native.fire_event(
                        "icecandidate",
                        &[json!({
                            "candidate": {
                                "candidate": format!("candidate:{} 1 udp 100 {} 9 typ host", index, address),
                                "address": address,
                                "type": "host",
                                "sdpMid": "0",
                                "sdpMLineIndex": 0
                            }
                        })],
                    );
                }
                native.fire_event("icecandidate", &[json!({ "candidate": null })]);
                native.set_internal("iceGatheringState", json!("complete"));
                native.fire_event("icegatheringstatechange", &[]);

                Ok(Returned::pending(async { Ok(Value::Null) }))
            })
            .method("legacyGetStats", |_, _| Ok(Returned::ready(json!({}))))
            .member(MemberDescriptor::read_only("sctp"));
        for kind in PeerEventKind::ALL {
            factory = factory.callback_slot(kind.as_str());
        }
        Arc::new(factory)
    }

    // =============================================================================
    // INTEGRATION TESTS: OFFER AND ICE GATHERING
    // =============================================================================

    /// Candidates gathered during `setLocalDescription` reach typed listeners
    #[tokio::test]
    async fn test_offer_and_gathering_flow() {
        let factory = native_peer_connection();
        let pc = peer_connection_type(factory.clone())
            .unwrap()
            .construct(&[json!({ "iceServers": [] })])
            .unwrap();

        let signals: Arc<Mutex<Vec<Option<IceCandidateInit>>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = signals.clone();
        pc.add_listener(
            "icecandidate",
            typed_listener(move |event| {
                if let PeerConnectionEvent::IceCandidate(payload) = event {
                    sink.lock().push(payload.candidate.map(|c| c.to_init()));
                }
            }),
            ListenerOptions::default(),
        );

        let gathering = Arc::new(Mutex::new(Vec::new()));
        let states = gathering.clone();
        let observed = Arc::new(pc);
        let weak = Arc::downgrade(&observed);
        observed
            .set_event_handler(
                "icegatheringstatechange",
                Some(Listener::new(move |_| {
                    if let Some(pc) = weak.upgrade() {
                        states.lock().push(pc.get("iceGatheringState").unwrap());
                    }
                })),
            )
            .unwrap();

        let offer = observed.invoke_settled("createOffer", &[]).await.unwrap();
        assert_eq!(offer["type"], "offer");
        observed
            .invoke_settled("setLocalDescription", &[offer.clone()])
            .await
            .unwrap();

        assert_eq!(observed.get("signalingState").unwrap(), json!("have-local-offer"));
        assert_eq!(observed.get("localDescription").unwrap(), offer);
        assert_eq!(*gathering.lock(), vec![json!("gathering"), json!("complete")]);

        let signals = signals.lock();
        assert_eq!(signals.len(), 3);
        assert_eq!(signals[0].as_ref().unwrap().sdp_mid.as_deref(), Some("0"));
        assert!(signals[1].as_ref().unwrap().candidate.contains("198.51.100.7"));
        assert!(signals[2].is_none());
    }

    /// Non-standard members stay hidden, extra exclusions can be layered on
    #[test]
    fn test_exclusions_hide_members() {
        let factory = native_peer_connection();
        let pc = peer_connection_type(factory.clone()).unwrap().construct(&[]).unwrap();
        assert!(matches!(
            pc.invoke("legacyGetStats", &[]),
            Err(FacadeError::UnknownMember { .. })
        ));
        assert!(matches!(pc.get("sctp"), Err(FacadeError::UnknownMember { .. })));

        let narrowed = peer_connection_builder(factory)
            .exclude("localDescription")
            .build()
            .unwrap()
            .construct(&[])
            .unwrap();
        assert!(narrowed.get("localDescription").is_err());
        assert_eq!(narrowed.get("signalingState").unwrap(), json!("stable"));
    }

    /// Every adapted kind has a handler property on the facade
    #[test]
    fn test_handler_properties_for_every_kind() {
        let pc = peer_connection_type(native_peer_connection())
            .unwrap()
            .construct(&[])
            .unwrap();

        for kind in PeerEventKind::ALL {
            let property = format!("on{}", kind);
            assert!(pc.handler_property(&property).unwrap().is_none());
        }
        assert!(matches!(
            pc.handler_property("onaddstream"),
            Err(FacadeError::UnknownEventKind(_))
        ));
    }
}
