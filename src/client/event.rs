use chrono::{DateTime, Utc};

use crate::message::Message;

/// Something the session observed on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Event {
    /// Every decoded line, whatever its command.
    Raw(Message),
    /// A chat delivery (`PRIVMSG`), projected for display.
    Chat(ChatMessage),
}

/// A chat line as an application would show it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatMessage {
    /// Target channel without its `#`.
    pub channel: String,
    /// Nickname of the sender.
    pub user: String,
    /// Message text without the trailing `:`.
    pub text: String,
    /// When the line was received.
    pub time: DateTime<Utc>,
}

impl ChatMessage {
    /// Project a `PRIVMSG`, stamping it with the current time.
    ///
    /// Returns `None` for any other command.
    pub fn from_message(message: &Message) -> Option<ChatMessage> {
        Self::from_message_at(message, Utc::now())
    }

    pub fn from_message_at(message: &Message, time: DateTime<Utc>) -> Option<ChatMessage> {
        if !message.is("PRIVMSG") {
            return None;
        }
        let channel = message.parameters.first().map_or("", String::as_str);
        Some(ChatMessage {
            channel: channel.strip_prefix('#').unwrap_or(channel).to_owned(),
            user: message.nick().to_owned(),
            text: message.trailing().unwrap_or_default().to_owned(),
            time,
        })
    }
}
