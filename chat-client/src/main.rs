use std::io::{self, BufRead};

use clap::Parser;
use messages::ChatMessage;
use tokio::sync::mpsc;
use uuid::Uuid;

use chat_client::action::Action;
use chat_client::input::{self, Submission};
use chat_client::net::socket::{self, ClientError};
use chat_client::state::AppState;
use chat_client::state::chat::Direction;
use chat_client::storage::Storage;

#[derive(Parser, Debug)]
#[command(name = "chat-client", about = "Interactive websocket chat client")]
struct Cli {
    /// Username to connect as.
    username: String,

    /// Websocket base URL of the chat backend.
    #[arg(long, env = "CHAT_SERVER_URL", default_value = "ws://localhost:8080")]
    server: String,

    /// Default recipient for outbound messages.
    #[arg(long, env = "CHAT_PEER", default_value = "user2")]
    to: String,

    /// Path of the profile store holding the current username.
    #[arg(long, env = "CHAT_PROFILE", default_value = ".chat-profile.json")]
    profile: String,
}

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    // Fail fast on an unusable server URL before spawning anything.
    socket::endpoint_url(&cli.server, &cli.username)?;

    let storage = Storage::new(&cli.profile);
    let (actions, action_rx) = mpsc::unbounded_channel();
    let (events, event_rx) = mpsc::unbounded_channel();

    let connection = tokio::spawn(socket::run(
        cli.server.clone(),
        storage.clone(),
        action_rx,
        events,
    ));
    let printer = tokio::spawn(print_snapshots(event_rx));

    let _ = actions.send(Action::Connect {
        username: cli.username.clone(),
    });

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match input::classify(&line) {
            Submission::Empty => {}
            Submission::Logout => {
                let _ = actions.send(Action::Disconnect);
                let _ = actions.send(Action::Logout);
                break;
            }
            Submission::Message(content) => {
                let _ = actions.send(Action::MessageSent {
                    id: Uuid::new_v4().to_string(),
                    content: content.clone(),
                });
                let _ = actions.send(Action::Send(ChatMessage {
                    from: storage.get("user"),
                    to: Some(cli.to.clone()),
                    content,
                }));
            }
        }
    }

    drop(actions);
    let _ = connection.await;
    printer.abort();
    Ok(())
}

/// Print login transitions and newly received messages from snapshots.
async fn print_snapshots(mut events: mpsc::UnboundedReceiver<AppState>) {
    let mut printed = 0_usize;
    let mut was_authenticated = false;
    let mut saw_failure = false;

    while let Some(state) = events.recv().await {
        if state.login.is_authenticated && !was_authenticated {
            println!("* logged in");
        }
        if !state.login.is_authenticated && was_authenticated {
            println!("* logged out");
        }
        was_authenticated = state.login.is_authenticated;

        if state.login.no_user && !saw_failure {
            saw_failure = true;
            println!("* login failed");
        }

        for message in &state.chat.messages[printed..] {
            if message.direction == Direction::Received {
                println!("<- {}", message.content);
            }
        }
        printed = state.chat.messages.len();
    }
}
