//! # Event Payloads
//!
//! Typed views of the raw arguments a native peer connection passes to its
//! callbacks. Field names follow the native camelCase spelling on the wire.
//! Media and channel handles are opaque and kept as [`Value`]s.

use serde::{Deserialize, Serialize};
use shared_types::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IceComponent {
    Rtp,
    Rtcp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IceProtocol {
    Udp,
    Tcp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IceTcpCandidateType {
    Active,
    Passive,
    So,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IceCandidateType {
    Host,
    Srflx,
    Prflx,
    Relay,
}

/// An ICE candidate.
///
/// Every field is optional on input. A missing `candidate` line becomes the
/// empty string; every other missing field stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IceCandidate {
    pub address: Option<String>,
    pub candidate: String,
    pub component: Option<IceComponent>,
    pub foundation: Option<String>,
    pub port: Option<u16>,
    pub priority: Option<u32>,
    pub protocol: Option<IceProtocol>,
    pub related_address: Option<String>,
    pub related_port: Option<u16>,
    #[serde(rename = "sdpMLineIndex")]
    pub sdp_m_line_index: Option<u16>,
    pub sdp_mid: Option<String>,
    pub tcp_type: Option<IceTcpCandidateType>,
    #[serde(rename = "type")]
    pub candidate_type: Option<IceCandidateType>,
    pub username_fragment: Option<String>,
}

/// The part of a candidate needed to signal it to the remote peer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IceCandidateInit {
    pub candidate: String,
    #[serde(rename = "sdpMLineIndex")]
    pub sdp_m_line_index: Option<u16>,
    pub sdp_mid: Option<String>,
    pub username_fragment: Option<String>,
}

impl IceCandidate {
    /// Signaling form of this candidate.
    pub fn to_init(&self) -> IceCandidateInit {
        IceCandidateInit {
            candidate: self.candidate.clone(),
            sdp_m_line_index: self.sdp_m_line_index,
            sdp_mid: self.sdp_mid.clone(),
            username_fragment: self.username_fragment.clone(),
        }
    }
}

/// Payload of `icecandidate`. `candidate` is `None` once gathering is done.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IceCandidateEventPayload {
    pub candidate: Option<IceCandidate>,
    pub url: Option<String>,
}

/// Payload of `icecandidateerror`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IceCandidateErrorPayload {
    #[serde(default)]
    pub address: Option<String>,
    pub error_code: u16,
    #[serde(default)]
    pub error_text: String,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub url: String,
}

/// Payload of `track`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackEventPayload {
    #[serde(default)]
    pub receiver: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streams: Option<Vec<Value>>,
    #[serde(default)]
    pub track: Value,
    #[serde(default)]
    pub transceiver: Value,
}

/// Payload of `datachannel`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataChannelEventPayload {
    #[serde(default)]
    pub channel: Value,
}
