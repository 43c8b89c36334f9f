//! Typed peer-connection events.

use super::kinds::PeerEventKind;
use super::payloads::{
    DataChannelEventPayload, IceCandidateErrorPayload, IceCandidateEventPayload, TrackEventPayload,
};
use crate::error::PayloadError;
use serde::de::DeserializeOwned;
use shared_bus::Event;
use shared_types::Value;

/// A facade event decoded by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PeerConnectionEvent {
    ConnectionStateChange,
    DataChannel(DataChannelEventPayload),
    IceCandidate(IceCandidateEventPayload),
    IceCandidateError(IceCandidateErrorPayload),
    IceConnectionStateChange,
    IceGatheringStateChange,
    NegotiationNeeded,
    SignalingStateChange,
    Track(TrackEventPayload),
}

impl PeerConnectionEvent {
    pub fn kind(&self) -> PeerEventKind {
        match self {
            Self::ConnectionStateChange => PeerEventKind::ConnectionStateChange,
            Self::DataChannel(_) => PeerEventKind::DataChannel,
            Self::IceCandidate(_) => PeerEventKind::IceCandidate,
            Self::IceCandidateError(_) => PeerEventKind::IceCandidateError,
            Self::IceConnectionStateChange => PeerEventKind::IceConnectionStateChange,
            Self::IceGatheringStateChange => PeerEventKind::IceGatheringStateChange,
            Self::NegotiationNeeded => PeerEventKind::NegotiationNeeded,
            Self::SignalingStateChange => PeerEventKind::SignalingStateChange,
            Self::Track(_) => PeerEventKind::Track,
        }
    }

    /// Decode an event delivered by a peer-connection facade.
    pub fn from_event(event: &Event) -> Result<Self, PayloadError> {
        let kind: PeerEventKind = event.kind().parse()?;
        let detail = event.detail();

        Ok(match kind {
            PeerEventKind::ConnectionStateChange => Self::ConnectionStateChange,
            PeerEventKind::DataChannel => Self::DataChannel(decode(kind, detail)?),
            PeerEventKind::IceCandidate => Self::IceCandidate(decode(kind, detail)?),
            PeerEventKind::IceCandidateError => Self::IceCandidateError(decode(kind, detail)?),
            PeerEventKind::IceConnectionStateChange => Self::IceConnectionStateChange,
            PeerEventKind::IceGatheringStateChange => Self::IceGatheringStateChange,
            PeerEventKind::NegotiationNeeded => Self::NegotiationNeeded,
            PeerEventKind::SignalingStateChange => Self::SignalingStateChange,
            PeerEventKind::Track => Self::Track(decode(kind, detail)?),
        })
    }
}

/// Decode one payload value for `kind`.
pub(crate) fn decode<T: DeserializeOwned>(kind: PeerEventKind, value: &Value) -> Result<T, PayloadError> {
    if value.is_null() {
        return Err(PayloadError::Missing {
            kind: kind.to_string(),
        });
    }
    T::deserialize(value).map_err(|err| PayloadError::Malformed {
        kind: kind.to_string(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_state_change_without_detail() {
        let event = Event::new("signalingstatechange");
        assert_eq!(
            PeerConnectionEvent::from_event(&event),
            Ok(PeerConnectionEvent::SignalingStateChange)
        );
    }

    #[test]
    fn test_decodes_ice_candidate() {
        let event = Event::with_detail(
            "icecandidate",
            json!({ "candidate": { "candidate": "candidate:1", "sdpMid": "0" } }),
        );
        let PeerConnectionEvent::IceCandidate(payload) = PeerConnectionEvent::from_event(&event).unwrap() else {
            panic!("expected an icecandidate event");
        };
        let candidate = payload.candidate.unwrap();
        assert_eq!(candidate.candidate, "candidate:1");
        assert_eq!(candidate.sdp_mid.as_deref(), Some("0"));
    }

    #[test]
    fn test_unknown_kind() {
        assert_eq!(
            PeerConnectionEvent::from_event(&Event::new("message")),
            Err(PayloadError::UnknownKind("message".into()))
        );
    }

    #[test]
    fn test_missing_payload() {
        assert_eq!(
            PeerConnectionEvent::from_event(&Event::new("track")),
            Err(PayloadError::Missing { kind: "track".into() })
        );
    }

    #[test]
    fn test_malformed_payload() {
        let event = Event::with_detail("icecandidateerror", json!({ "errorCode": "bad" }));
        assert!(matches!(
            PeerConnectionEvent::from_event(&event),
            Err(PayloadError::Malformed { .. })
        ));
    }

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            PeerConnectionEvent::NegotiationNeeded.kind(),
            PeerEventKind::NegotiationNeeded
        );
        assert_eq!(
            PeerConnectionEvent::Track(TrackEventPayload::default()).kind().as_str(),
            "track"
        );
    }
}
