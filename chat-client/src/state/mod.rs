//! Client state slices and their reducers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `login` tracks the session flags, `chat` holds the append-only message
//! log. [`reduce`] fans one action out to every slice; slices ignore actions
//! they do not handle.

pub mod chat;
pub mod login;

use crate::action::Action;

/// Root state: one instance per client process.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Session login flags.
    pub login: login::LoginInfo,
    /// Append-only message log.
    pub chat: chat::ChatState,
}

/// Fold one action into every slice.
pub fn reduce(state: &mut AppState, action: &Action) {
    login::reduce(&mut state.login, action);
    chat::reduce(&mut state.chat, action);
}
