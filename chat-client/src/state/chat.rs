//! Append-only message log for the conversation view.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::action::Action;

/// Whether a logged message left this client or arrived from the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Submitted locally.
    Sent,
    /// Delivered by the backend.
    Received,
}

/// One logged message; never mutated or removed once appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub direction: Direction,
}

/// The conversation log, in arrival order.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

/// Append sent/received messages; everything else leaves the slice untouched.
pub fn reduce(state: &mut ChatState, action: &Action) {
    match action {
        Action::MessageSent { id, content } => state.messages.push(ChatMessage {
            id: id.clone(),
            content: content.clone(),
            direction: Direction::Sent,
        }),
        Action::MessageReceived { id, content } => state.messages.push(ChatMessage {
            id: id.clone(),
            content: content.clone(),
            direction: Direction::Received,
        }),
        _ => {}
    }
}
