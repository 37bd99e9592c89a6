//! User-facing alert banner.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use crate::action::Action;

/// The one user-facing error surface; raised on a rejected password.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alert {
    /// Text shown while the alert is enabled.
    pub message: Option<String>,
    /// Whether the alert is visible.
    pub enabled: bool,
}

/// Fold alert actions; everything else leaves the slice untouched.
pub fn reduce(state: &mut Alert, action: &Action) {
    match action {
        Action::RaiseAlert { message } => {
            state.message = Some(message.clone());
            state.enabled = true;
        }
        Action::DismissAlert => {
            state.message = None;
            state.enabled = false;
        }
        _ => {}
    }
}
