use super::*;

#[test]
fn login_info_default_has_both_flags_clear() {
    let state = LoginInfo::default();
    assert!(!state.is_authenticated);
    assert!(!state.no_user);
}

#[test]
fn login_success_sets_is_authenticated() {
    let mut state = LoginInfo::default();
    reduce(&mut state, &Action::LoginSuccess);
    assert!(state.is_authenticated);
    assert!(!state.no_user);
}

#[test]
fn logout_clears_is_authenticated() {
    let mut state = LoginInfo {
        is_authenticated: true,
        no_user: false,
    };
    reduce(&mut state, &Action::Logout);
    assert!(!state.is_authenticated);
}

#[test]
fn login_fail_sets_no_user() {
    let mut state = LoginInfo::default();
    reduce(&mut state, &Action::LoginFail);
    assert!(state.no_user);
    assert!(!state.is_authenticated);
}

#[test]
fn login_fail_after_success_leaves_both_flags_set() {
    // Nothing ties the two flags together; a rejected retry does not
    // clear an earlier authentication.
    let mut state = LoginInfo::default();
    reduce(&mut state, &Action::LoginSuccess);
    reduce(&mut state, &Action::LoginFail);
    assert!(state.is_authenticated);
    assert!(state.no_user);
}

#[test]
fn unrelated_actions_leave_the_slice_untouched() {
    let mut state = LoginInfo {
        is_authenticated: true,
        no_user: true,
    };
    reduce(
        &mut state,
        &Action::MessageReceived {
            id: "m1".to_owned(),
            content: "hi".to_owned(),
        },
    );
    reduce(&mut state, &Action::SocketClosed);
    assert!(state.is_authenticated);
    assert!(state.no_user);
}
