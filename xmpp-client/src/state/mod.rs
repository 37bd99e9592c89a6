//! Client state slices and their reducers.
//!
//! `user` tracks the session identity, `alert` the user-facing error
//! banner, and `chat` the append-only message log. [`reduce`] fans one
//! action out to every slice; slices ignore actions they do not handle.

pub mod alert;
pub mod chat;
pub mod user;

use crate::action::Action;

/// Root state: one instance per client process.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Session identity.
    pub user: user::UserInfo,
    /// User-facing alert banner.
    pub alert: alert::Alert,
    /// Append-only message log.
    pub chat: chat::ChatState,
}

/// Fold one action into every slice.
pub fn reduce(state: &mut AppState, action: &Action) {
    user::reduce(&mut state.user, action);
    alert::reduce(&mut state.alert, action);
    chat::reduce(&mut state.chat, action);
}
