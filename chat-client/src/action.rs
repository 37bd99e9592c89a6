//! Dispatchable state-update intents.
//!
//! The first three variants are socket-lifecycle actions: the connection
//! event loop intercepts them and they never reach a reducer. Everything
//! else is folded into the store.

use messages::ChatMessage;

/// A tagged record describing one state-update intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Open a connection as `username`, closing any live one first.
    Connect { username: String },
    /// Close the live connection, if any.
    Disconnect,
    /// Relay an outbound chat frame on the live connection.
    Send(ChatMessage),
    /// The local user submitted a message; append it to the log.
    MessageSent { id: String, content: String },
    /// The backend delivered a message; append it to the log.
    MessageReceived { id: String, content: String },
    /// The backend accepted the login.
    LoginSuccess,
    /// The backend rejected the login.
    LoginFail,
    /// The local user ended the session.
    Logout,
    /// The connection closed; no reducer consumes this today.
    SocketClosed,
}
