//! # netirc
//!
//! An IRC client protocol library tuned for Twitch chat.
//!
//! ## Features
//!
//! - Lenient line decoding that tolerates a missing `:` before user prefixes
//! - Numeric replies mapped to named RFC 1459 responses
//! - A command builder that validates arity and shapes channel lists
//! - Optional Tokio session with keep-alive handling and chat events

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Decoding
//!
//! ```rust
//! use netirc::MessageDecoder;
//!
//! let chunk = b":nick!user@host PRIVMSG #channel :hello world\r\n";
//! let messages = MessageDecoder::new().decode(chunk);
//!
//! assert_eq!(messages[0].nick(), "nick");
//! assert_eq!(messages[0].parameters, vec!["#channel", ":hello world"]);
//! ```
//!
//! ### Building commands
//!
//! ```rust
//! use netirc::{CommandBuilder, Verb};
//!
//! let join = CommandBuilder::from_line(Verb::JOIN, "Cohh,Soda").build()?;
//! assert_eq!(join, "JOIN #cohh,#soda");
//! # Ok::<(), netirc::CommandError>(())
//! ```

pub mod command;
pub mod error;
pub mod message;
pub mod prefix;
pub mod response;

pub use self::command::{CommandBuilder, Verb};
pub use self::error::{CommandError, ProtocolError};
pub use self::message::{Message, MessageDecoder};
pub use self::prefix::Prefix;
pub use self::response::Response;

#[cfg(feature = "tokio")]
pub mod client;
#[cfg(feature = "tokio")]
pub mod line;
#[cfg(feature = "tokio")]
pub mod transport;

#[cfg(feature = "tokio")]
pub use self::client::{ChatMessage, Endpoint, Event, Events, Phase, Session, SessionConfig};
#[cfg(feature = "tokio")]
pub use self::line::{LineCodec, MAX_IRC_LINE_LEN};
#[cfg(feature = "tokio")]
pub use self::transport::Transport;
