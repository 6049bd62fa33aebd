//! Fuzz target for command building
//!
//! The first line of input is the verb, the rest its parameter string.
//! Building must never panic, and a successful build never ends in
//! whitespace.

#![no_main]

use libfuzzer_sys::fuzz_target;
use netirc::CommandBuilder;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let (verb, params) = input.split_once('\n').unwrap_or((input, ""));

    if let Ok(line) = CommandBuilder::from_line(verb, params).build() {
        assert_eq!(line.trim_end(), line);
    }
});
