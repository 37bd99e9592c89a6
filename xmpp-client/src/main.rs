use std::io::{self, BufRead};

use clap::Parser;
use tokio::sync::mpsc;
use uuid::Uuid;

use xmpp_client::action::Action;
use xmpp_client::input::{self, Submission};
use xmpp_client::net::socket::{self, ClientError};
use xmpp_client::net::types::OutgoingFrame;
use xmpp_client::state::AppState;
use xmpp_client::state::chat::Direction;
use xmpp_client::storage::Storage;

#[derive(Parser, Debug)]
#[command(name = "xmpp-client", about = "Interactive websocket chat client (password dialect)")]
struct Cli {
    /// Username to join as.
    username: String,

    /// Password for the account.
    #[arg(long, env = "XMPP_PASSWORD")]
    password: String,

    /// Websocket base URL of the chat backend.
    #[arg(long, env = "XMPP_SERVER_URL", default_value = "ws://localhost:8080")]
    server: String,

    /// Default recipient for outbound messages.
    #[arg(long, env = "XMPP_PEER", default_value = "user2")]
    to: String,

    /// Path of the profile store holding the current username.
    #[arg(long, env = "XMPP_PROFILE", default_value = ".xmpp-profile.json")]
    profile: String,
}

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    // Fail fast on an unusable server URL before spawning anything.
    socket::endpoint_url(&cli.server, &cli.username, &cli.password)?;

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
        password: cli.password.clone(),
    });

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match input::classify(&line) {
            Submission::Empty => {}
            Submission::Logout => {
                // Disconnect also reduces Logout in this dialect.
                let _ = actions.send(Action::Disconnect);
                break;
            }
            Submission::Message(content) => {
                let _ = actions.send(Action::MessageSent {
                    id: Uuid::new_v4().to_string(),
                    content: content.clone(),
                });
                let _ = actions.send(Action::Send(OutgoingFrame::Chat {
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

/// Print join transitions, alerts, and newly received messages.
async fn print_snapshots(mut events: mpsc::UnboundedReceiver<AppState>) {
    let mut printed = 0_usize;
    let mut was_logged_in = false;
    let mut alert_shown = false;

    while let Some(state) = events.recv().await {
        if state.user.logged_in && !was_logged_in {
            let name = state.user.username.as_deref().unwrap_or("unknown");
            println!("* joined as {name}");
        }
        if !state.user.logged_in && was_logged_in {
            println!("* logged out");
        }
        was_logged_in = state.user.logged_in;

        if state.alert.enabled && !alert_shown {
            let message = state.alert.message.as_deref().unwrap_or("error");
            println!("! {message}");
        }
        alert_shown = state.alert.enabled;

        for message in &state.chat.messages[printed..] {
            if message.direction == Direction::Received {
                println!("<- {}", message.content);
            }
        }
        printed = state.chat.messages.len();
    }
}
