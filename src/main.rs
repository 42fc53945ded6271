//! Post a one-off message to a Slack webhook from the shell.
//!
//! ```sh
//! SLACK_WEBHOOK_URL=https://hooks.slack.com/services/... iris Deploy finished
//! ```
//!
//! `SLACK_CHANNEL` optionally overrides the webhook's channel. Both may be
//! supplied via a `.env` file.

use dotenvy::dotenv;
use iris::{Message, SlackClient};
use std::{env, process::ExitCode};
use tracing::{error, info, warn};

/// Application entrypoint. Initialises tracing, checks for environment
/// variables, and sends a message built from the arguments.
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let has_dotenv = dotenv().is_ok();
    if !has_dotenv {
        warn!("No .env found");
    }

    let Ok(endpoint) = env::var("SLACK_WEBHOOK_URL") else {
        error!("No $SLACK_WEBHOOK_URL environment variable found");
        return ExitCode::FAILURE;
    };

    let text = env::args().skip(1).collect::<Vec<_>>().join(" ");
    let msg = build_message(text, env::var("SLACK_CHANNEL").ok());

    if SlackClient::new(endpoint).send_async(&msg).await {
        info!("Posted to {}", msg.channel());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Build the message to send. Empty text is sent as-is.
fn build_message(text: String, channel: Option<String>) -> Message {
    let mut msg = Message::default();
    msg.content(text);

    if let Some(channel) = channel {
        msg.on(channel);
    }

    msg
}
