//! Async client session for Twitch-style chat servers.
//!
//! [`Session::connect`] opens the transport, registers with `PASS` and
//! `NICK`, then runs until closed. Decoded traffic arrives on the [`Events`]
//! receiver returned alongside the session.

mod config;
mod event;
mod session;

pub use self::config::{
    Endpoint, SessionConfig, DEFAULT_PONG_ORIGIN, PLAIN_PORT, TLS_PORT, TWITCH_HOST,
};
pub use self::event::{ChatMessage, Event};
pub use self::session::{Events, Phase, Session};
