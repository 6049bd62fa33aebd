//! Chunk decoder: raw socket bytes in, messages out.

use std::borrow::Cow;

use encoding::Encoding;

use crate::error::{ProtocolError, Result};

use super::types::Message;

/// Line terminator required by the wire grammar.
pub const CRLF: &[u8] = b"\r\n";

/// Turns byte chunks into [`Message`]s.
///
/// Each CRLF-terminated line in a chunk becomes one message, in order. Bytes
/// after the last CRLF are dropped: the decoder keeps no state between
/// chunks, so callers that need reassembly across reads must align chunks on
/// line boundaries themselves (the session's line codec does this).
///
/// By default lines are read as single-byte ASCII and any byte above `0x7F`
/// becomes `?`. [`MessageDecoder::with_encoding`] selects a real text encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MessageDecoder {
    encoding: Option<&'static Encoding>,
}

impl MessageDecoder {
    /// ASCII decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoder for a WHATWG encoding label such as `"utf-8"` or `"latin1"`.
    pub fn with_encoding(label: &str) -> Result<Self> {
        Encoding::for_label(label.as_bytes())
            .map(|encoding| MessageDecoder {
                encoding: Some(encoding),
            })
            .ok_or_else(|| ProtocolError::UnknownEncoding(label.to_owned()))
    }

    /// Name of the configured encoding.
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.map_or("ascii", |e| e.name())
    }

    /// Decode every complete line in `chunk`.
    ///
    /// ```
    /// use netirc::MessageDecoder;
    ///
    /// let chunk = b"PING :tmi.twitch.tv\r\n:tmi.twitch.tv 001 bot :Welcome\r\npart";
    /// let messages = MessageDecoder::new().decode(chunk);
    /// assert_eq!(messages.len(), 2);
    /// assert_eq!(messages[0].command, "PING");
    /// assert_eq!(messages[1].command, "001");
    /// ```
    pub fn decode(&self, chunk: &[u8]) -> Vec<Message> {
        let mut messages = Vec::new();
        let mut start = 0;

        while let Some(offset) = find_crlf(&chunk[start..]) {
            let end = start + offset;
            messages.push(self.decode_line(&chunk[start..end]));
            start = end + CRLF.len();
        }

        messages
    }

    /// Decode a single line; a trailing terminator is optional.
    pub fn decode_line(&self, line: &[u8]) -> Message {
        Message::parse(&self.text(line))
    }

    fn text<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        match self.encoding {
            Some(encoding) => encoding.decode_without_bom_handling(bytes).0,
            None => ascii(bytes),
        }
    }
}

/// Position of the first CRLF in `bytes`.
pub(crate) fn find_crlf(bytes: &[u8]) -> Option<usize> {
    bytes.windows(CRLF.len()).position(|w| w == CRLF)
}

fn ascii(bytes: &[u8]) -> Cow<'_, str> {
    if bytes.is_ascii() {
        // All bytes are ASCII, which is valid UTF-8.
        return String::from_utf8_lossy(bytes);
    }
    Cow::Owned(
        bytes
            .iter()
            .map(|&b| if b.is_ascii() { b as char } else { '?' })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_lines_in_order() {
        let chunk = b":a!a@a PRIVMSG #x :one\r\nPING :tmi.twitch.tv\r\n:tmi.twitch.tv 372 bot :motd\r\n";
        let messages = MessageDecoder::new().decode(chunk);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].command, "PRIVMSG");
        assert_eq!(messages[1].command, "PING");
        assert_eq!(messages[2].numeric_reply, Some(372));
    }

    #[test]
    fn test_trailing_partial_is_dropped() {
        let messages = MessageDecoder::new().decode(b"PING :x\r\nPRIVMSG #ch :half");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].command, "PING");
    }

    #[test]
    fn test_no_terminator_yields_nothing() {
        assert!(MessageDecoder::new().decode(b"PING :x").is_empty());
        assert!(MessageDecoder::new().decode(b"").is_empty());
    }

    #[test]
    fn test_empty_lines_are_messages() {
        let messages = MessageDecoder::new().decode(b"\r\n\r\n");
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| m.command.is_empty()));
    }

    #[test]
    fn test_bare_lf_is_not_a_terminator() {
        let messages = MessageDecoder::new().decode(b"PING :a\nPING :b\r\n");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].parameters, vec![":a\nPING :b"]);
    }

    #[test]
    fn test_ascii_replaces_high_bytes() {
        let msg = MessageDecoder::new().decode_line("PRIVMSG #x :h\u{e9}".as_bytes());
        assert_eq!(msg.parameters[1], ":h??");
    }

    #[test]
    fn test_utf8_encoding() {
        let decoder = MessageDecoder::with_encoding("utf-8").unwrap();
        assert_eq!(decoder.encoding_name(), "UTF-8");
        let msg = decoder.decode_line("PRIVMSG #x :h\u{e9}\r\n".as_bytes());
        assert_eq!(msg.trailing(), Some("h\u{e9}"));
    }

    #[test]
    fn test_unknown_encoding() {
        assert!(matches!(
            MessageDecoder::with_encoding("klingon"),
            Err(ProtocolError::UnknownEncoding(_))
        ));
    }
}
