use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::prefix::Prefix;
use crate::response::Response;

use super::parse::parse_line;

/// One decoded protocol line.
///
/// Built once per wire line and never mutated afterwards. Decoding is
/// lenient: an empty or truncated line still yields a `Message`, with the
/// missing parts left empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Origin of the message, if any.
    pub prefix: Option<Prefix>,
    /// Verb or numeric code, exactly as received.
    pub command: String,
    /// The parsed code when `command` is numeric.
    pub numeric_reply: Option<u32>,
    /// Positional parameters. A trailing parameter keeps its leading `:`.
    pub parameters: Vec<String>,
    /// The line this message was decoded from, without its terminator.
    pub raw: String,
}

impl Message {
    /// Decode one line of text.
    ///
    /// Leading and trailing whitespace (including any CR/LF) is ignored.
    ///
    /// ```
    /// use netirc::Message;
    ///
    /// let msg = Message::parse(":nick!user@host PRIVMSG #channel :hello world");
    /// assert_eq!(msg.nick(), "nick");
    /// assert_eq!(msg.command, "PRIVMSG");
    /// assert_eq!(msg.parameters, vec!["#channel", ":hello world"]);
    /// ```
    pub fn parse(line: &str) -> Message {
        let raw = line.trim_end_matches(['\r', '\n']).to_owned();
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Message {
                raw,
                ..Message::default()
            };
        }

        let parsed = parse_line(trimmed);
        Message {
            prefix: parsed.prefix,
            command: parsed.command.to_owned(),
            numeric_reply: parsed.numeric,
            parameters: parsed.params,
            raw,
        }
    }

    /// True if the command is a numeric reply.
    #[inline]
    pub fn is_numeric_reply(&self) -> bool {
        self.numeric_reply.is_some()
    }

    /// The named reply for a numeric command, where one exists.
    pub fn response(&self) -> Option<Response> {
        self.numeric_reply
            .and_then(|code| u16::try_from(code).ok())
            .and_then(Response::from_code)
    }

    /// The raw prefix text, or `""`.
    pub fn prefix_str(&self) -> &str {
        self.prefix.as_ref().map_or("", |p| p.raw.as_str())
    }

    /// Server name from the prefix, or `""`.
    pub fn server(&self) -> &str {
        self.prefix.as_ref().map_or("", |p| p.server.as_str())
    }

    /// Nickname from the prefix, or `""`.
    pub fn nick(&self) -> &str {
        self.prefix.as_ref().map_or("", |p| p.nick.as_str())
    }

    /// `!user` section of the prefix, or `""`.
    pub fn user(&self) -> &str {
        self.prefix.as_ref().map_or("", |p| p.user.as_str())
    }

    /// `@host` section of the prefix, or `""`.
    pub fn host(&self) -> &str {
        self.prefix.as_ref().map_or("", |p| p.host.as_str())
    }

    /// The last parameter with one leading `:` removed.
    pub fn trailing(&self) -> Option<&str> {
        self.parameters
            .last()
            .map(|p| p.strip_prefix(':').unwrap_or(p))
    }

    /// True if the command matches `verb`, ignoring ASCII case.
    pub fn is(&self, verb: &str) -> bool {
        self.command.eq_ignore_ascii_case(verb)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Message {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Message::parse(s))
    }
}
