use crate::model::client::ClientId;
use serde::{Deserialize, Serialize};

/// Error text sent back to a sender whose target id resolves to nothing.
pub const TARGET_NOT_CONNECTED: &str = "Target client not connected";

/// Inbound events a client may send through the relay.
///
/// Every variant carries a `targetClientId` naming the peer the payload is
/// addressed to. The payload fields (`sdp`, `candidate`, `mid`, `message`)
/// are opaque to the relay and forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ClientEvent {
    OfferSdp {
        #[serde(rename = "targetClientId")]
        target_client_id: ClientId,
        sdp: String,
    },
    AnswerSdp {
        #[serde(rename = "targetClientId")]
        target_client_id: ClientId,
        sdp: String,
    },
    SendSdp {
        #[serde(rename = "targetClientId")]
        target_client_id: ClientId,
        sdp: String,
    },
    SendIce {
        #[serde(rename = "targetClientId")]
        target_client_id: ClientId,
        candidate: String,
        mid: String,
    },
    SendMessage {
        #[serde(rename = "targetClientId")]
        target_client_id: ClientId,
        message: String,
    },
}

impl ClientEvent {
    /// The peer this event is addressed to.
    pub fn target(&self) -> &ClientId {
        match self {
            Self::OfferSdp {
                target_client_id, ..
            }
            | Self::AnswerSdp {
                target_client_id, ..
            }
            | Self::SendSdp {
                target_client_id, ..
            }
            | Self::SendIce {
                target_client_id, ..
            }
            | Self::SendMessage {
                target_client_id, ..
            } => target_client_id,
        }
    }

    /// Wire label of the inbound event, for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OfferSdp { .. } => "offer_sdp",
            Self::AnswerSdp { .. } => "answer_sdp",
            Self::SendSdp { .. } => "send_sdp",
            Self::SendIce { .. } => "send_ice",
            Self::SendMessage { .. } => "send_message",
        }
    }

    /// The opaque payload body, for (truncated) log previews.
    pub fn payload(&self) -> &str {
        match self {
            Self::OfferSdp { sdp, .. }
            | Self::AnswerSdp { sdp, .. }
            | Self::SendSdp { sdp, .. } => sdp,
            Self::SendIce { candidate, .. } => candidate,
            Self::SendMessage { message, .. } => message,
        }
    }

    /// Build the outbound event delivered to the target, stamping the true
    /// sender id into `from`. The sender never supplies this field itself.
    ///
    /// The label mapping is total and fixed: SDP kinds keep their label,
    /// `send_ice` forwards as `send_ice`, `send_message` arrives at the
    /// target as `receive_message`.
    pub fn into_forward(self, from: ClientId) -> ServerEvent {
        match self {
            Self::OfferSdp { sdp, .. } => ServerEvent::OfferSdp { from, sdp },
            Self::AnswerSdp { sdp, .. } => ServerEvent::AnswerSdp { from, sdp },
            Self::SendSdp { sdp, .. } => ServerEvent::SendSdp { from, sdp },
            Self::SendIce { candidate, mid, .. } => ServerEvent::SendIce {
                from,
                candidate,
                mid,
            },
            Self::SendMessage { message, .. } => ServerEvent::ReceiveMessage { from, message },
        }
    }
}

/// Outbound events the relay emits to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Sent exactly once, immediately after a client attaches.
    YourId { id: ClientId },
    OfferSdp { from: ClientId, sdp: String },
    AnswerSdp { from: ClientId, sdp: String },
    SendSdp { from: ClientId, sdp: String },
    SendIce {
        from: ClientId,
        candidate: String,
        mid: String,
    },
    ReceiveMessage { from: ClientId, message: String },
    Error { message: String },
}

impl ServerEvent {
    pub fn target_not_connected() -> Self {
        Self::Error {
            message: TARGET_NOT_CONNECTED.to_string(),
        }
    }
}
