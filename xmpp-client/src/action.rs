//! Dispatchable state-update intents.
//!
//! The first three variants are socket-lifecycle actions handled by the
//! connection event loop; the rest are folded into the store. Unlike the
//! sibling dialect, `Disconnect` also logs the session out.

use crate::net::types::OutgoingFrame;

/// A tagged record describing one state-update intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Open a connection as `username`, authenticating with `password`.
    Connect { username: String, password: String },
    /// Close the live connection and log out.
    Disconnect,
    /// Relay an outbound frame on the live connection.
    Send(OutgoingFrame),
    /// The local user submitted a message; append it to the log.
    MessageSent { id: String, content: String },
    /// The backend delivered a message; append it to the log.
    MessageReceived { id: String, content: String },
    /// The backend accepted the join as `username`.
    LoggedIn { username: Option<String> },
    /// The session ended.
    Logout,
    /// Surface a user-facing alert.
    RaiseAlert { message: String },
    /// Clear the user-facing alert.
    DismissAlert,
    /// The connection closed; no reducer consumes this today.
    SocketClosed,
}
