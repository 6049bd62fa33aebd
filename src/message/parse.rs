//! Lenient structural parser for a single IRC line.
//!
//! The grammar follows RFC 1459:
//!
//! ```text
//! <message>  ::= [':' <prefix> <SPACE> ] <command> <params> <crlf>
//! <prefix>   ::= <servername> | <nick> [ '!' <user> ] [ '@' <host> ]
//! <params>   ::= <SPACE> [ ':' <trailing> | <middle> <params> ]
//! ```
//!
//! Twitch sometimes omits the leading `:` of a user prefix, so a first token
//! containing `!` or `@` is also taken as a prefix. Parsing never fails: the
//! worst case is a message with empty fields.

use nom::{
    bytes::complete::take_till,
    character::complete::char,
    combinator::opt,
    sequence::{pair, preceded},
    IResult,
};

use crate::prefix::Prefix;

type ParseResult<'a, O> = IResult<&'a str, O>;

/// One space-delimited token plus the single space that ends it.
fn token(input: &str) -> ParseResult<'_, &str> {
    let (rest, (tok, _)) = pair(take_till(|c: char| c == ' '), opt(char(' ')))(input)?;
    Ok((rest, tok))
}

/// A `:`-introduced prefix token.
fn colon_prefix(input: &str) -> ParseResult<'_, &str> {
    preceded(char(':'), token)(input)
}

/// Split `input` into its first token and the remainder after one space.
fn split_token(input: &str) -> (&str, &str) {
    match token(input) {
        Ok((rest, tok)) => (tok, rest),
        Err(_) => (input, ""),
    }
}

/// Detect and strip the prefix, returning it with the rest of the line.
fn split_prefix(line: &str) -> (Option<&str>, &str) {
    if let Ok((rest, prefix)) = colon_prefix(line) {
        return (Some(prefix), rest);
    }

    let (head, rest) = split_token(line);
    if head.contains('!') || head.contains('@') {
        (Some(head), rest)
    } else {
        (None, line)
    }
}

/// Split the parameter section left to right.
///
/// A `:` at the start of a parameter swallows the rest of the line, colon
/// included. Without one, the last parameter simply runs to the end.
pub(super) fn split_params(input: &str) -> Vec<String> {
    if input.is_empty() {
        return vec![String::new()];
    }

    let mut params = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        if rest.starts_with(':') {
            params.push(rest.to_owned());
            break;
        }

        match rest.find(' ') {
            Some(end) => {
                params.push(rest[..end].to_owned());
                rest = &rest[end + 1..];
            }
            None => {
                params.push(rest.to_owned());
                break;
            }
        }
    }

    params
}

/// Borrowed pieces of one parsed line.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ParsedLine<'a> {
    pub prefix: Option<Prefix>,
    pub command: &'a str,
    pub numeric: Option<u32>,
    pub params: Vec<String>,
}

/// Parse one already-trimmed, non-empty line.
pub(super) fn parse_line(line: &str) -> ParsedLine<'_> {
    let (prefix, rest) = split_prefix(line);
    let (command, params) = split_token(rest);

    let numeric = match command.chars().next() {
        Some(c) if c.is_ascii_digit() => command.parse::<u32>().ok(),
        _ => None,
    };

    let params = if command.is_empty() {
        Vec::new()
    } else {
        split_params(params)
    };

    ParsedLine {
        prefix: prefix.map(Prefix::parse),
        command,
        numeric,
        params,
    }
}
