//! Websocket lifecycle and frame dispatch for the `messageType` backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Same single-task shape as the sibling client: the loop owns the (at most
//! one) live socket together with the store, intercepts lifecycle actions,
//! reduces the rest, and publishes a state snapshot after every reduced
//! action. The dialect differences live in `endpoint_url` (password in the
//! connect path), `dispatched_actions` (one frame can dispatch more than
//! one action), and `Disconnect` logging the session out.

#[cfg(test)]
#[path = "socket_test.rs"]
mod socket_test;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use uuid::Uuid;

use crate::action::Action;
use crate::net::types::{self, OutgoingFrame, ServerMessage};
use crate::state::AppState;
use crate::storage::Storage;
use crate::store::Store;

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Error surfaced by connection setup.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The configured base URL is not a websocket URL.
    #[error("invalid server URL: {0}")]
    InvalidServerUrl(String),
    /// The websocket handshake failed.
    #[error("websocket connect failed: {0}")]
    Connect(Box<tokio_tungstenite::tungstenite::Error>),
}

/// Build the connect endpoint for `username`/`password` under `base_url`.
///
/// # Errors
///
/// Returns [`ClientError::InvalidServerUrl`] unless `base_url` uses the
/// `ws://` or `wss://` scheme.
pub fn endpoint_url(base_url: &str, username: &str, password: &str) -> Result<String, ClientError> {
    if base_url.starts_with("ws://") || base_url.starts_with("wss://") {
        return Ok(format!(
            "{}/chat/{username}/{password}",
            base_url.trim_end_matches('/')
        ));
    }
    Err(ClientError::InvalidServerUrl(base_url.to_owned()))
}

/// Run the connection event loop until every action sender is dropped.
///
/// `events` receives a state snapshot after each reduced action; dropping
/// the receiver only stops snapshot delivery, not the loop.
pub async fn run(
    base_url: String,
    storage: Storage,
    mut actions: UnboundedReceiver<Action>,
    events: UnboundedSender<AppState>,
) {
    let mut store = Store::default();
    let mut socket: Option<Socket> = None;

    loop {
        tokio::select! {
            action = actions.recv() => {
                let Some(action) = action else { break };
                match action {
                    Action::Connect { username, password } => {
                        close_socket(&mut socket).await;
                        match open_socket(&base_url, &username, &password).await {
                            Ok(stream) => socket = Some(stream),
                            Err(error) => tracing::warn!(error = %error, "websocket connect failed"),
                        }
                    }
                    Action::Disconnect => {
                        close_socket(&mut socket).await;
                        apply(&mut store, &events, &Action::Logout);
                    }
                    Action::Send(frame) => send_frame(&mut socket, &frame).await,
                    action => apply(&mut store, &events, &action),
                }
            }
            incoming = next_message(&mut socket) => {
                match incoming {
                    Some(Ok(Message::Text(text))) => {
                        handle_text(text.as_str(), &storage, &mut store, &events);
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        socket = None;
                        apply(&mut store, &events, &Action::SocketClosed);
                    }
                    // Ping/pong are answered by the transport.
                    Some(Ok(_)) => {}
                    Some(Err(error)) => {
                        tracing::warn!(error = %error, "websocket receive failed");
                        socket = None;
                        apply(&mut store, &events, &Action::SocketClosed);
                    }
                }
            }
        }
    }
}

fn handle_text(
    text: &str,
    storage: &Storage,
    store: &mut Store,
    events: &UnboundedSender<AppState>,
) {
    let message = match types::decode_message(text) {
        Ok(message) => message,
        Err(error) => {
            tracing::warn!(error = %error, "dropping undecodable frame");
            return;
        }
    };

    if let ServerMessage::JoinSuccess { to: Some(username) } = &message {
        if let Err(error) = storage.set("user", username) {
            tracing::warn!(error = %error, "failed to persist username");
        }
    }

    for action in dispatched_actions(message) {
        apply(store, events, &action);
    }
}

/// Map one inbound frame to the actions it dispatches, in order.
fn dispatched_actions(message: ServerMessage) -> Vec<Action> {
    match message {
        ServerMessage::JoinSuccess { to } => {
            tracing::info!("connected to chat backend");
            vec![Action::LoggedIn { username: to }, Action::DismissAlert]
        }
        ServerMessage::NewMessage { content, .. } => vec![Action::MessageReceived {
            id: Uuid::new_v4().to_string(),
            content,
        }],
        ServerMessage::Error => {
            tracing::warn!("join failed");
            Vec::new()
        }
        ServerMessage::Leave { from } => {
            tracing::info!(from = from.as_deref().unwrap_or("unknown"), "peer left");
            Vec::new()
        }
        ServerMessage::Forbidden => {
            tracing::warn!("invalid password");
            vec![Action::RaiseAlert {
                message: "Invalid password".to_owned(),
            }]
        }
        ServerMessage::Unknown => {
            tracing::debug!("ignoring unrecognized frame");
            Vec::new()
        }
    }
}

fn apply(store: &mut Store, events: &UnboundedSender<AppState>, action: &Action) {
    store.dispatch(action);
    let _ = events.send(store.state().clone());
}

async fn next_message(
    socket: &mut Option<Socket>,
) -> Option<Result<Message, tokio_tungstenite::tungstenite::Error>> {
    match socket.as_mut() {
        Some(stream) => stream.next().await,
        None => std::future::pending().await,
    }
}

async fn open_socket(base_url: &str, username: &str, password: &str) -> Result<Socket, ClientError> {
    let url = endpoint_url(base_url, username, password)?;
    let (stream, _) = connect_async(url.as_str())
        .await
        .map_err(|error| ClientError::Connect(Box::new(error)))?;
    tracing::debug!("websocket connected");
    Ok(stream)
}

async fn close_socket(socket: &mut Option<Socket>) {
    if let Some(mut stream) = socket.take() {
        if let Err(error) = stream.close(None).await {
            tracing::debug!(error = %error, "websocket close failed");
        }
    }
}

async fn send_frame(socket: &mut Option<Socket>, frame: &OutgoingFrame) {
    let Some(stream) = socket.as_mut() else {
        tracing::warn!("dropping outbound message: no live connection");
        return;
    };

    let text = types::encode_outgoing(frame);
    if let Err(error) = stream.send(Message::Text(text.into())).await {
        tracing::warn!(error = %error, "websocket send failed");
    }
}
