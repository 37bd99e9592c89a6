//! Submission gating for the interactive send loop.
//!
//! Same rules as the sibling client: empty or whitespace-only input is
//! never sent, and the logout command ends the session.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// What a submitted line of input should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Nothing to send.
    Empty,
    /// End the session.
    Logout,
    /// Send this message body.
    Message(String),
}

/// Classify one line of user input.
#[must_use]
pub fn classify(line: &str) -> Submission {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Submission::Empty;
    }
    if trimmed == "/logout" {
        return Submission::Logout;
    }
    Submission::Message(trimmed.to_owned())
}
