//! Read-only Twitch chat client
//!
//! Connects anonymously (Twitch accepts any `justinfan` nickname without a
//! real token), joins the channels given on the command line and prints chat
//! until Ctrl+C.
//!
//! ```text
//! RUST_LOG=netirc=debug cargo run --example chat_client -- cohhcarnage
//! ```

use anyhow::Context;
use netirc::{Event, Session, SessionConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let channels: Vec<String> = std::env::args().skip(1).collect();
    if channels.is_empty() {
        anyhow::bail!("usage: chat_client <channel>[,<channel>...]");
    }

    let config = SessionConfig::new("justinfan12345", "oauth:anonymous");
    let (session, mut events) = Session::connect(config)
        .await
        .context("connecting to twitch chat")?;
    session.join(&channels.join(","))?;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            event = events.recv() => match event {
                Some(Event::Chat(chat)) => {
                    println!("{} #{} <{}> {}", chat.time.format("%H:%M:%S"), chat.channel, chat.user, chat.text);
                }
                Some(Event::Raw(message)) if message.is_numeric_reply() => {
                    tracing::debug!(code = %message.command, "{}", message.trailing().unwrap_or_default());
                }
                Some(_) => {}
                None => break,
            },
        }
    }

    let _ = session.send_raw("QUIT");
    session.close().await.context("closing session")?;
    Ok(())
}
