use super::*;

#[test]
fn user_info_default_is_logged_out() {
    let state = UserInfo::default();
    assert_eq!(state.username, None);
    assert!(!state.logged_in);
}

#[test]
fn logged_in_records_the_username() {
    let mut state = UserInfo::default();
    reduce(
        &mut state,
        &Action::LoggedIn {
            username: Some("alice".to_owned()),
        },
    );
    assert_eq!(state.username, Some("alice".to_owned()));
    assert!(state.logged_in);
}

#[test]
fn logged_in_without_a_username_still_joins() {
    let mut state = UserInfo::default();
    reduce(&mut state, &Action::LoggedIn { username: None });
    assert_eq!(state.username, None);
    assert!(state.logged_in);
}

#[test]
fn logout_clears_identity_and_flag() {
    let mut state = UserInfo {
        username: Some("alice".to_owned()),
        logged_in: true,
    };
    reduce(&mut state, &Action::Logout);
    assert_eq!(state.username, None);
    assert!(!state.logged_in);
}

#[test]
fn unrelated_actions_leave_the_slice_untouched() {
    let mut state = UserInfo {
        username: Some("alice".to_owned()),
        logged_in: true,
    };
    reduce(&mut state, &Action::DismissAlert);
    reduce(&mut state, &Action::SocketClosed);
    assert_eq!(state.username, Some("alice".to_owned()));
    assert!(state.logged_in);
}
