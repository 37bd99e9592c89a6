//! Login flags for the current session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::action::Action;

/// Session login flags.
///
/// The two flags are independent: nothing resets `no_user` on a later
/// successful login, so both can be true at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginInfo {
    /// The backend accepted the most recent login.
    pub is_authenticated: bool,
    /// A login attempt was rejected at some point this session.
    pub no_user: bool,
}

/// Fold login actions; everything else leaves the slice untouched.
pub fn reduce(state: &mut LoginInfo, action: &Action) {
    match action {
        Action::LoginSuccess => state.is_authenticated = true,
        Action::Logout => state.is_authenticated = false,
        Action::LoginFail => state.no_user = true,
        _ => {}
    }
}
