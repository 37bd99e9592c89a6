use super::*;

#[test]
fn dispatch_reaches_every_slice() {
    let mut store = Store::default();
    store.dispatch(&Action::LoggedIn {
        username: Some("alice".to_owned()),
    });
    store.dispatch(&Action::RaiseAlert {
        message: "Invalid password".to_owned(),
    });
    store.dispatch(&Action::MessageReceived {
        id: "m1".to_owned(),
        content: "hello".to_owned(),
    });

    assert!(store.state().user.logged_in);
    assert!(store.state().alert.enabled);
    assert_eq!(store.state().chat.messages.len(), 1);
}

#[test]
fn socket_closed_is_a_no_op_for_every_slice() {
    let mut store = Store::default();
    store.dispatch(&Action::LoggedIn {
        username: Some("alice".to_owned()),
    });
    store.dispatch(&Action::SocketClosed);

    assert!(store.state().user.logged_in);
    assert!(!store.state().alert.enabled);
    assert!(store.state().chat.messages.is_empty());
}
