//! Websocket lifecycle and frame dispatch for the chat backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! One task owns the (at most one) live socket together with the store.
//! Lifecycle actions (`Connect`, `Disconnect`, `Send`) are intercepted here
//! and never reach a reducer; every other action is reduced and followed by
//! a state snapshot on the events channel. Inbound text frames are decoded
//! and mapped to actions; anything undecodable is logged and skipped. There
//! is no retry, reconnect, or buffering.

#[cfg(test)]
#[path = "socket_test.rs"]
mod socket_test;

use futures_util::{SinkExt, StreamExt};
use messages::{ChatMessage, TextFrame};
use tokio::net::TcpStream;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use uuid::Uuid;

use crate::action::Action;
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

/// Build the connect endpoint for `username` under `base_url`.
///
/// # Errors
///
/// Returns [`ClientError::InvalidServerUrl`] unless `base_url` uses the
/// `ws://` or `wss://` scheme.
pub fn endpoint_url(base_url: &str, username: &str) -> Result<String, ClientError> {
    if base_url.starts_with("ws://") || base_url.starts_with("wss://") {
        return Ok(format!("{}/chat/{username}", base_url.trim_end_matches('/')));
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
                    Action::Connect { username } => {
                        close_socket(&mut socket).await;
                        match open_socket(&base_url, &username).await {
                            Ok(stream) => socket = Some(stream),
                            Err(error) => tracing::warn!(error = %error, "websocket connect failed"),
                        }
                    }
                    Action::Disconnect => {
                        if socket.is_some() {
                            close_socket(&mut socket).await;
                            apply(&mut store, &events, &Action::SocketClosed);
                        }
                    }
                    Action::Send(message) => send_chat(&mut socket, &message).await,
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
    let frame = match messages::decode_frame(text) {
        Ok(frame) => frame,
        Err(error) => {
            tracing::warn!(error = %error, "dropping undecodable frame");
            return;
        }
    };

    if let TextFrame::Authenticated { to: Some(username) } = &frame {
        if let Err(error) = storage.set("user", username) {
            tracing::warn!(error = %error, "failed to persist username");
        }
    }

    if let Some(action) = dispatched_action(frame) {
        apply(store, events, &action);
    }
}

/// Map one inbound frame to the action it dispatches, if any.
fn dispatched_action(frame: TextFrame) -> Option<Action> {
    match frame {
        TextFrame::Authenticated { .. } => {
            tracing::info!("connected to chat backend");
            Some(Action::LoginSuccess)
        }
        TextFrame::Chat(message) => Some(Action::MessageReceived {
            id: Uuid::new_v4().to_string(),
            content: message.content,
        }),
        // Room traffic is delivered on the wire but not surfaced.
        TextFrame::GroupChat(_) => None,
        TextFrame::Error => {
            tracing::warn!("login failed");
            Some(Action::LoginFail)
        }
        TextFrame::Unknown => {
            tracing::debug!("ignoring unrecognized frame");
            None
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

async fn open_socket(base_url: &str, username: &str) -> Result<Socket, ClientError> {
    let url = endpoint_url(base_url, username)?;
    let (stream, _) = connect_async(url.as_str())
        .await
        .map_err(|error| ClientError::Connect(Box::new(error)))?;
    tracing::debug!(%url, "websocket connected");
    Ok(stream)
}

async fn close_socket(socket: &mut Option<Socket>) {
    if let Some(mut stream) = socket.take() {
        if let Err(error) = stream.close(None).await {
            tracing::debug!(error = %error, "websocket close failed");
        }
    }
}

async fn send_chat(socket: &mut Option<Socket>, message: &ChatMessage) {
    let Some(stream) = socket.as_mut() else {
        tracing::warn!("dropping outbound message: no live connection");
        return;
    };

    let text = messages::encode_frame(&TextFrame::Chat(message.clone()));
    if let Err(error) = stream.send(Message::Text(text.into())).await {
        tracing::warn!(error = %error, "websocket send failed");
    }
}
