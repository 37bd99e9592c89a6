//! Shared frame model and JSON codec for the chat websocket transport.
//!
//! This crate owns the wire representation used by the `chat-client`
//! dialect: JSON text frames discriminated by a `type` field. Inbound and
//! outbound frames share one model; outbound traffic only ever uses the
//! [`TextFrame::Chat`] variant.

use serde::{Deserialize, Serialize};

/// Error returned by [`decode_frame`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text payload is not a JSON frame this dialect understands.
    #[error("failed to decode chat frame: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Body of a `CHAT` frame, also the exact outbound frame payload.
///
/// The backend relays whatever subset of sender/recipient it knows, so both
/// sides of the conversation are optional on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sending username, if known.
    #[serde(default)]
    pub from: Option<String>,
    /// Receiving username, if known.
    #[serde(default)]
    pub to: Option<String>,
    /// Message body.
    pub content: String,
}

/// A single JSON text frame, discriminated by its `type` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TextFrame {
    /// The backend accepted the login; `to` carries the username.
    #[serde(rename = "AUTHENTICATED")]
    Authenticated {
        /// Username the session was authenticated as.
        #[serde(default)]
        to: Option<String>,
    },
    /// A direct chat message, inbound or outbound.
    #[serde(rename = "CHAT")]
    Chat(ChatMessage),
    /// A room message; delivered on the wire but not surfaced.
    #[serde(rename = "GROUP_CHAT")]
    GroupChat(ChatMessage),
    /// The backend could not log the session in or relay a message.
    #[serde(rename = "ERROR")]
    Error,
    /// Any frame type this dialect does not recognize.
    #[serde(other)]
    Unknown,
}

/// Encode a frame into its JSON text representation.
#[must_use]
pub fn encode_frame(frame: &TextFrame) -> String {
    // Serializing these derived types into a String is infallible; the only
    // serde_json failures here would require non-string map keys.
    serde_json::to_string(frame).unwrap_or_default()
}

/// Decode a JSON text frame.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] when the payload is not valid JSON or does
/// not match any frame shape. Frames with an unrecognized `type` tag decode
/// as [`TextFrame::Unknown`] instead of erroring.
pub fn decode_frame(text: &str) -> Result<TextFrame, CodecError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
