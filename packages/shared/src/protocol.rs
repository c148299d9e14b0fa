//! Wire protocol spoken over the game WebSocket.
//!
//! Every frame is a JSON envelope `{ "type": ..., "payload": ... }`. The
//! `payload` key is omitted for messages that carry no data.

use serde::{Deserialize, Deserializer, Serialize, de};
use thiserror::Error;

/// Failure to decode an inbound frame.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The frame is not a known `{ type, payload }` envelope.
    #[error("Malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Payload of `PASS_POTATO` and `NEW_POTATO_HOLDER`.
///
/// The index is not range-checked; whatever the sender supplied is relayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PotatoHolderPayload {
    pub new_potato_holder_index: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAssignmentPayload {
    pub client_player_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownPayload {
    pub clock_value: u32,
}

/// Client → server messages.
///
/// Decoding reads `type` first; a payload sent along with `NEW_USER` is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientMessage {
    NewUser,
    PassPotato(PotatoHolderPayload),
}

#[derive(Deserialize)]
struct ClientEnvelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Option<serde_json::Value>,
}

impl<'de> Deserialize<'de> for ClientMessage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let envelope = ClientEnvelope::deserialize(deserializer)?;
        match envelope.kind.as_str() {
            "NEW_USER" => Ok(ClientMessage::NewUser),
            "PASS_POTATO" => {
                let payload = envelope
                    .payload
                    .ok_or_else(|| de::Error::missing_field("payload"))?;
                PotatoHolderPayload::deserialize(payload)
                    .map(ClientMessage::PassPotato)
                    .map_err(de::Error::custom)
            }
            other => Err(de::Error::unknown_variant(
                other,
                &["NEW_USER", "PASS_POTATO"],
            )),
        }
    }
}

impl ClientMessage {
    /// Decode a text frame.
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn pass_potato(new_potato_holder_index: i64) -> Self {
        ClientMessage::PassPotato(PotatoHolderPayload {
            new_potato_holder_index,
        })
    }

    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Server → client messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerMessage {
    /// Direct reply to a newly seated connection.
    PlayerAssignment(PlayerAssignmentPayload),
    /// Direct reply to a connection that arrived after all seats were taken.
    GameFull,
    NewPotatoHolder(PotatoHolderPayload),
    Countdown(CountdownPayload),
    GameOver,
}

impl ServerMessage {
    pub fn player_assignment(client_player_index: usize) -> Self {
        ServerMessage::PlayerAssignment(PlayerAssignmentPayload {
            client_player_index,
        })
    }

    pub fn new_potato_holder(new_potato_holder_index: i64) -> Self {
        ServerMessage::NewPotatoHolder(PotatoHolderPayload {
            new_potato_holder_index,
        })
    }

    pub fn countdown(clock_value: u32) -> Self {
        ServerMessage::Countdown(CountdownPayload { clock_value })
    }

    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize once; the same string is handed to every recipient.
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}
