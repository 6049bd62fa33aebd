//! List and marker helpers shared by the command shapes.

/// Channel marker added to bare channel names.
pub const CHANNEL_PREFIX: char = '#';

/// Marker introducing a trailing parameter.
pub const TRAILING_PREFIX: char = ':';

/// Normalize a delimited list.
///
/// Splits `list` on `splitter`, drops empty entries and entries equal to the
/// `joiner`, optionally gives each entry a `#`, and joins the survivors with
/// `joiner`. The result has no trailing delimiter and may be empty.
///
/// ```
/// use netirc::command::build_list;
///
/// assert_eq!(build_list("a,,b,", ',', ',', true), "#a,#b");
/// assert_eq!(build_list("alice,bob", ',', ' ', false), "alice bob");
/// ```
pub fn build_list(list: &str, splitter: char, joiner: char, prefix: bool) -> String {
    let mut joined = String::with_capacity(list.len() + 8);

    for entry in list.split(splitter) {
        if entry.is_empty() || entry.chars().eq(std::iter::once(joiner)) {
            continue;
        }
        if !joined.is_empty() {
            joined.push(joiner);
        }
        if prefix && !entry.starts_with(CHANNEL_PREFIX) {
            joined.push(CHANNEL_PREFIX);
        }
        joined.push_str(entry);
    }

    joined
}

/// Give a channel name its `#` unless it already has one.
pub fn prefix_channel(channel: &str) -> String {
    if channel.starts_with(CHANNEL_PREFIX) {
        channel.to_owned()
    } else {
        format!("{}{}", CHANNEL_PREFIX, channel)
    }
}

/// Force a trailing parameter to start with `:`.
pub fn prefix_message(message: &str) -> String {
    if message.starts_with(TRAILING_PREFIX) {
        message.to_owned()
    } else {
        format!("{}{}", TRAILING_PREFIX, message)
    }
}
