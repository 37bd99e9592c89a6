use super::*;

#[test]
fn chat_state_default_is_empty() {
    assert!(ChatState::default().messages.is_empty());
}

#[test]
fn sent_and_received_messages_accumulate_in_order() {
    let mut state = ChatState::default();
    reduce(
        &mut state,
        &Action::MessageSent {
            id: "m1".to_owned(),
            content: "hello".to_owned(),
        },
    );
    reduce(
        &mut state,
        &Action::MessageReceived {
            id: "m2".to_owned(),
            content: "hi back".to_owned(),
        },
    );

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].direction, Direction::Sent);
    assert_eq!(state.messages[1].direction, Direction::Received);
    assert_eq!(state.messages[1].content, "hi back");
}

#[test]
fn unrelated_actions_leave_the_log_untouched() {
    let mut state = ChatState::default();
    reduce(&mut state, &Action::LoggedIn { username: None });
    reduce(&mut state, &Action::DismissAlert);
    assert!(state.messages.is_empty());
}
