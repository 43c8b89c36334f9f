//! Peer-connection event kinds and members kept out of forwarding.

use crate::error::PayloadError;
use std::fmt;
use std::str::FromStr;

/// Members of the native peer connection that are never forwarded, besides
/// the constructor.
pub const EXCLUDED_MEMBERS: [&str; 3] = [
    // non-standard
    "legacyGetStats",
    // experimental
    "sctp",
    // non-standard
    "updateIce",
];

/// Event kinds a peer connection reports.
///
/// The deprecated `addstream` and `removestream` kinds are not adapted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PeerEventKind {
    ConnectionStateChange,
    DataChannel,
    IceCandidate,
    IceCandidateError,
    IceConnectionStateChange,
    IceGatheringStateChange,
    NegotiationNeeded,
    SignalingStateChange,
    Track,
}

impl PeerEventKind {
    /// All kinds, in name order.
    pub const ALL: [PeerEventKind; 9] = [
        Self::ConnectionStateChange,
        Self::DataChannel,
        Self::IceCandidate,
        Self::IceCandidateError,
        Self::IceConnectionStateChange,
        Self::IceGatheringStateChange,
        Self::NegotiationNeeded,
        Self::SignalingStateChange,
        Self::Track,
    ];

    /// Event kind name, as used in `on<kind>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConnectionStateChange => "connectionstatechange",
            Self::DataChannel => "datachannel",
            Self::IceCandidate => "icecandidate",
            Self::IceCandidateError => "icecandidateerror",
            Self::IceConnectionStateChange => "iceconnectionstatechange",
            Self::IceGatheringStateChange => "icegatheringstatechange",
            Self::NegotiationNeeded => "negotiationneeded",
            Self::SignalingStateChange => "signalingstatechange",
            Self::Track => "track",
        }
    }
}

impl fmt::Display for PeerEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeerEventKind {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PayloadError::UnknownKind(s.to_string()))
    }
}
