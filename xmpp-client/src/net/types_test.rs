use super::*;

#[test]
fn join_success_decodes_username_from_to_field() {
    let message = decode_message(r#"{"messageType":"JOIN_SUCCESS","to":"alice"}"#).expect("decode");
    assert_eq!(
        message,
        ServerMessage::JoinSuccess {
            to: Some("alice".to_owned())
        }
    );
}

#[test]
fn new_message_decodes_payload_fields() {
    let message = decode_message(
        r#"{"messageType":"NEW_MESSAGE","from":"bob","to":"alice","content":"hi"}"#,
    )
    .expect("decode");
    assert_eq!(
        message,
        ServerMessage::NewMessage {
            from: Some("bob".to_owned()),
            to: Some("alice".to_owned()),
            content: "hi".to_owned(),
        }
    );
}

#[test]
fn bare_status_frames_decode_without_payload() {
    assert_eq!(
        decode_message(r#"{"messageType":"ERROR"}"#).expect("decode"),
        ServerMessage::Error
    );
    assert_eq!(
        decode_message(r#"{"messageType":"FORBIDDEN"}"#).expect("decode"),
        ServerMessage::Forbidden
    );
}

#[test]
fn leave_decodes_with_optional_sender() {
    let message = decode_message(r#"{"messageType":"LEAVE","from":"bob"}"#).expect("decode");
    assert_eq!(
        message,
        ServerMessage::Leave {
            from: Some("bob".to_owned())
        }
    );
}

#[test]
fn unrecognized_message_type_decodes_as_unknown() {
    let message = decode_message(r#"{"messageType":"TYPING"}"#).expect("decode");
    assert_eq!(message, ServerMessage::Unknown);
}

#[test]
fn decode_message_rejects_malformed_text() {
    assert!(matches!(
        decode_message("{{"),
        Err(CodecError::Decode(_))
    ));
}

#[test]
fn outgoing_chat_frame_uses_the_type_tag() {
    let text = encode_outgoing(&OutgoingFrame::Chat {
        from: Some("alice".to_owned()),
        to: Some("bob".to_owned()),
        content: "hello".to_owned(),
    });
    let value: serde_json::Value = serde_json::from_str(&text).expect("frame is JSON");

    assert_eq!(value.get("type"), Some(&serde_json::json!("CHAT")));
    assert_eq!(value.get("messageType"), None);
    assert_eq!(value.get("content"), Some(&serde_json::json!("hello")));
}
