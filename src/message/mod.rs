//! Decoded IRC messages and the byte-stream decoder.

mod decoder;
mod parse;
mod types;

pub use self::decoder::{MessageDecoder, CRLF};
pub use self::types::Message;

#[cfg(feature = "tokio")]
pub(crate) use self::decoder::find_crlf;
