//! Identity slice for the current session.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use crate::action::Action;

/// Who is logged in, if anyone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserInfo {
    /// Username the backend joined the session as.
    pub username: Option<String>,
    /// Whether the session is currently joined.
    pub logged_in: bool,
}

/// Fold identity actions; everything else leaves the slice untouched.
pub fn reduce(state: &mut UserInfo, action: &Action) {
    match action {
        Action::LoggedIn { username } => {
            state.username = username.clone();
            state.logged_in = true;
        }
        Action::Logout => {
            state.username = None;
            state.logged_in = false;
        }
        _ => {}
    }
}
