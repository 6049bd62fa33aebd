//! CRLF line framing for async streams.
//!
//! [`LineCodec`] buffers bytes across reads, so a line split over two
//! packets is still decoded once complete. Lines longer than the configured
//! limit are skipped with a warning instead of failing the stream.

use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, warn};

use crate::error::ProtocolError;
use crate::message::{find_crlf, Message, MessageDecoder, CRLF};

/// Longest accepted line, terminator excluded.
pub const MAX_IRC_LINE_LEN: usize = 8191;

/// Codec turning a byte stream into [`Message`]s and outbound lines into bytes.
#[derive(Clone, Debug)]
pub struct LineCodec {
    decoder: MessageDecoder,
    max_line_len: usize,
    /// Bytes already scanned for a terminator.
    next_index: usize,
    /// Set while skipping the rest of an overlong line.
    discarding: bool,
}

impl LineCodec {
    /// Codec with the ASCII decoder and the default line limit.
    pub fn new() -> Self {
        Self::with_decoder(MessageDecoder::new())
    }

    pub fn with_decoder(decoder: MessageDecoder) -> Self {
        LineCodec {
            decoder,
            max_line_len: MAX_IRC_LINE_LEN,
            next_index: 0,
            discarding: false,
        }
    }

    /// Override the line limit.
    pub fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len;
        self
    }

    pub fn max_line_len(&self) -> usize {
        self.max_line_len
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = Message;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Message>, ProtocolError> {
        loop {
            // A CR at the end of the previous scan may pair with a new LF.
            let start = self.next_index.saturating_sub(1);

            let Some(offset) = find_crlf(&src[start..]) else {
                // A trailing CR may still be the start of the terminator.
                let keep = usize::from(src.last() == Some(&b'\r'));
                if src.len() - keep > self.max_line_len {
                    if !self.discarding {
                        warn!(
                            len = src.len() - keep,
                            limit = self.max_line_len,
                            "discarding overlong line"
                        );
                        self.discarding = true;
                    }
                    src.advance(src.len() - keep);
                }
                self.next_index = src.len();
                return Ok(None);
            };

            let end = start + offset;
            self.next_index = 0;
            let line = src.split_to(end + CRLF.len());

            if self.discarding {
                self.discarding = false;
                continue;
            }
            if end > self.max_line_len {
                warn!(len = end, limit = self.max_line_len, "discarding overlong line");
                continue;
            }

            return Ok(Some(self.decoder.decode_line(&line[..end])));
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Message>, ProtocolError> {
        if let Some(message) = self.decode(src)? {
            return Ok(Some(message));
        }
        if !src.is_empty() {
            debug!(len = src.len(), "dropping unterminated data at end of stream");
            src.clear();
        }
        self.next_index = 0;
        self.discarding = false;
        Ok(None)
    }
}

impl Encoder<String> for LineCodec {
    type Error = ProtocolError;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> Result<(), ProtocolError> {
        if let Some(ch) = line.chars().find(|c| matches!(c, '\r' | '\n' | '\0')) {
            return Err(ProtocolError::IllegalControlChar(ch));
        }
        dst.reserve(line.len() + CRLF.len());
        dst.put_slice(line.as_bytes());
        dst.put_slice(CRLF);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_across_reads() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::from(&b"PRIVMSG #c :hel"[..]);
        assert!(codec.decode(&mut buf).unwrap().is_none());

        buf.extend_from_slice(b"lo\r");
        assert!(codec.decode(&mut buf).unwrap().is_none());

        buf.extend_from_slice(b"\nPING :x\r\n");
        let first = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(first.trailing(), Some("hello"));
        let second = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(second.command, "PING");
        assert!(codec.decode(&mut buf).unwrap().is_none());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_overlong_line_is_skipped() {
        let mut codec = LineCodec::new().with_max_line_len(16);
        let mut buf = BytesMut::new();
        buf.extend_from_slice(&[b'a'; 40]);
        assert!(codec.decode(&mut buf).unwrap().is_none());

        buf.extend_from_slice(b"aaaa\r\nPING :ok\r\n");
        let msg = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(msg.command, "PING");
        assert_eq!(msg.trailing(), Some("ok"));
    }

    #[test]
    fn test_line_at_limit_with_split_terminator() {
        let mut codec = LineCodec::new().with_max_line_len(8);
        let mut buf = BytesMut::from(&b"PING :ab\r"[..]);
        assert!(codec.decode(&mut buf).unwrap().is_none());

        buf.extend_from_slice(b"\n");
        let msg = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(msg.trailing(), Some("ab"));
    }

    #[test]
    fn test_overlong_complete_line_is_skipped() {
        let mut codec = LineCodec::new().with_max_line_len(8);
        let mut buf = BytesMut::from(&b"PRIVMSG #channel :too long\r\nPING :x\r\n"[..]);
        let msg = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(msg.command, "PING");
    }

    #[test]
    fn test_decode_eof_drops_partial() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::from(&b"PING :x\r\nPART"[..]);
        assert_eq!(codec.decode_eof(&mut buf).unwrap().unwrap().command, "PING");
        assert!(codec.decode_eof(&mut buf).unwrap().is_none());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_encode_appends_crlf() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::new();
        codec.encode("JOIN #cohh".to_owned(), &mut buf).unwrap();
        assert_eq!(&buf[..], b"JOIN #cohh\r\n");
    }

    #[test]
    fn test_encode_rejects_line_breaks() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::new();
        let err = codec
            .encode("PRIVMSG #c :a\r\nQUIT".to_owned(), &mut buf)
            .unwrap_err();
        assert!(matches!(err, ProtocolError::IllegalControlChar('\r')));
        assert!(buf.is_empty());
    }
}
