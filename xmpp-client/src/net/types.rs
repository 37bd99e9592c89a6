//! Local wire types for the `messageType` dialect.
//!
//! DESIGN
//! ======
//! Inbound frames discriminate on `messageType`; outbound frames carry the
//! same `{from, to, content, type:"CHAT"}` shape as the sibling dialect.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Error returned by [`decode_message`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text payload is not a JSON frame this dialect understands.
    #[error("failed to decode chat frame: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A frame delivered by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "messageType")]
pub enum ServerMessage {
    /// The backend accepted the join; `to` carries the username.
    #[serde(rename = "JOIN_SUCCESS")]
    JoinSuccess {
        #[serde(default)]
        to: Option<String>,
    },
    /// A chat message for this session.
    #[serde(rename = "NEW_MESSAGE")]
    NewMessage {
        #[serde(default)]
        from: Option<String>,
        #[serde(default)]
        to: Option<String>,
        content: String,
    },
    /// The backend could not join the session.
    #[serde(rename = "ERROR")]
    Error,
    /// A peer left the conversation.
    #[serde(rename = "LEAVE")]
    Leave {
        #[serde(default)]
        from: Option<String>,
    },
    /// The supplied password was rejected.
    #[serde(rename = "FORBIDDEN")]
    Forbidden,
    /// Any frame type this dialect does not recognize.
    #[serde(other)]
    Unknown,
}

/// An outbound frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum OutgoingFrame {
    /// A chat message to relay.
    #[serde(rename = "CHAT")]
    Chat {
        from: Option<String>,
        to: Option<String>,
        content: String,
    },
}

/// Encode an outbound frame into its JSON text representation.
#[must_use]
pub fn encode_outgoing(frame: &OutgoingFrame) -> String {
    // Serializing the derived type into a String is infallible.
    serde_json::to_string(frame).unwrap_or_default()
}

/// Decode a JSON text frame from the backend.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] when the payload is not valid JSON or
/// does not match any frame shape. Unrecognized `messageType` tags decode
/// as [`ServerMessage::Unknown`].
pub fn decode_message(text: &str) -> Result<ServerMessage, CodecError> {
    Ok(serde_json::from_str(text)?)
}
