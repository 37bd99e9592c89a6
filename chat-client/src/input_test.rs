use super::*;

#[test]
fn empty_line_is_not_sent() {
    assert_eq!(classify(""), Submission::Empty);
}

#[test]
fn whitespace_only_line_is_not_sent() {
    assert_eq!(classify("   \t  "), Submission::Empty);
}

#[test]
fn logout_command_is_recognized() {
    assert_eq!(classify("/logout"), Submission::Logout);
    assert_eq!(classify("  /logout  "), Submission::Logout);
}

#[test]
fn ordinary_text_becomes_a_message() {
    assert_eq!(classify("hello"), Submission::Message("hello".to_owned()));
}

#[test]
fn message_bodies_are_trimmed() {
    assert_eq!(
        classify("  hello there \n"),
        Submission::Message("hello there".to_owned())
    );
}

#[test]
fn text_mentioning_logout_mid_sentence_is_a_message() {
    assert_eq!(
        classify("how do I /logout"),
        Submission::Message("how do I /logout".to_owned())
    );
}
