//! Domain Layer
//!
//! Peer-connection event kinds, payloads and the typed event enum.

pub mod events;
pub mod kinds;
pub mod payloads;

pub use events::PeerConnectionEvent;
pub use kinds::{PeerEventKind, EXCLUDED_MEMBERS};
pub use payloads::{
    DataChannelEventPayload, IceCandidate, IceCandidateErrorPayload, IceCandidateEventPayload,
    IceCandidateInit, IceCandidateType, IceComponent, IceProtocol, IceTcpCandidateType,
    TrackEventPayload,
};
