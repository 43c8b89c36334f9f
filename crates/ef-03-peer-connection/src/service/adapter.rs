//! Peer-connection facade type.

use crate::domain::events::decode;
use crate::domain::{
    DataChannelEventPayload, IceCandidateErrorPayload, IceCandidateEventPayload, PeerConnectionEvent,
    PeerEventKind, TrackEventPayload, EXCLUDED_MEMBERS,
};
use ef_02_facade_builder::{FacadeBuilder, FacadeError, FacadeType, SynthesisTable, WrappedFactory};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_bus::{Event, Listener, ListenerError};
use shared_types::Value;
use std::sync::Arc;
use tracing::warn;

/// Synthesizers for every [`PeerEventKind`].
///
/// Payload kinds decode the first raw argument. A missing or malformed
/// argument is logged and replaced by the payload's default, so the event
/// still reaches listeners.
pub fn peer_connection_synthesis() -> SynthesisTable {
    let mut table = SynthesisTable::new();
    for kind in PeerEventKind::ALL {
        table = match kind {
            PeerEventKind::DataChannel => with_payload::<DataChannelEventPayload>(table, kind),
            PeerEventKind::IceCandidate => with_payload::<IceCandidateEventPayload>(table, kind),
            PeerEventKind::IceCandidateError => with_payload::<IceCandidateErrorPayload>(table, kind),
            PeerEventKind::Track => with_payload::<TrackEventPayload>(table, kind),
            plain => table.plain(plain.as_str()),
        };
    }
    table
}

fn with_payload<T>(table: SynthesisTable, kind: PeerEventKind) -> SynthesisTable
where
    T: DeserializeOwned + Serialize + Default + 'static,
{
    table.with(kind.as_str(), move |raw| {
        let payload: T = decode(kind, raw.first().unwrap_or(&Value::Null)).unwrap_or_else(|err| {
            warn!(kind = %kind, error = %err, "Native payload rejected, using defaults");
            T::default()
        });
        let detail = serde_json::to_value(&payload).unwrap_or_else(|err| {
            warn!(kind = %kind, error = %err, "Payload not serializable");
            Value::Null
        });
        Event::with_detail(kind.as_str(), detail)
    })
}

/// Builder preconfigured for a native peer connection.
///
/// Callers may still add exclusions or swap the dispatch config before
/// building.
pub fn peer_connection_builder(factory: Arc<dyn WrappedFactory>) -> FacadeBuilder {
    EXCLUDED_MEMBERS
        .into_iter()
        .fold(FacadeBuilder::new(factory), |builder, name| builder.exclude(name))
        .synthesis(peer_connection_synthesis())
}

/// Facade type for a native peer connection.
pub fn peer_connection_type(factory: Arc<dyn WrappedFactory>) -> Result<FacadeType, FacadeError> {
    peer_connection_builder(factory).build()
}

/// Listener that receives decoded [`PeerConnectionEvent`]s.
///
/// An event that does not decode is reported as a listener failure.
pub fn typed_listener(callback: impl Fn(PeerConnectionEvent) + Send + Sync + 'static) -> Listener {
    Listener::fallible(move |event| {
        let decoded =
            PeerConnectionEvent::from_event(event).map_err(|err| ListenerError::failed(err.to_string()))?;
        callback(decoded);
        Ok(())
    })
}
