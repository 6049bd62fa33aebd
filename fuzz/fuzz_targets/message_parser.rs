//! Fuzz target for chunk decoding
//!
//! Feeds arbitrary bytes to the decoder and checks that every decoded
//! message re-decodes to itself.

#![no_main]

use libfuzzer_sys::fuzz_target;
use netirc::{Message, MessageDecoder};

fuzz_target!(|data: &[u8]| {
    if data.len() > 4096 {
        return;
    }

    for message in MessageDecoder::new().decode(data) {
        assert_eq!(Message::parse(&message.raw), message);
    }
});
