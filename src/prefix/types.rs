use std::fmt;

/// The origin of a message: a server name or `nick[!user][@host]`.
///
/// The decomposed fields keep their delimiters, so `user` starts with `!` and
/// `host` starts with `@`. When both delimiters are present the three fields
/// concatenate back to `raw`. A prefix with neither delimiter is a server name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prefix {
    /// The prefix text without the leading `:`.
    pub raw: String,
    /// Server name, empty for user prefixes.
    pub server: String,
    /// Nickname, empty for server prefixes.
    pub nick: String,
    /// `!user` section, empty when absent.
    pub user: String,
    /// `@host` section, empty when absent.
    pub host: String,
}

impl Prefix {
    /// Decompose a raw prefix (without the leading `:`).
    ///
    /// ```
    /// use netirc::Prefix;
    ///
    /// let p = Prefix::parse("nick!user@host");
    /// assert_eq!(p.nick, "nick");
    /// assert_eq!(p.user, "!user");
    /// assert_eq!(p.host, "@host");
    ///
    /// let s = Prefix::parse("tmi.twitch.tv");
    /// assert_eq!(s.server, "tmi.twitch.tv");
    /// assert!(s.nick.is_empty());
    /// ```
    pub fn parse(raw: &str) -> Prefix {
        let excl = raw.find('!');
        let at = raw.find('@');

        if excl.is_none() && at.is_none() {
            return Prefix {
                raw: raw.to_owned(),
                server: raw.to_owned(),
                ..Prefix::default()
            };
        }

        let host = at.map(|i| &raw[i..]).unwrap_or("");
        let user = match excl {
            // A `!` after the `@` belongs to the host.
            Some(i) if i < raw.len() - host.len() => &raw[i..raw.len() - host.len()],
            _ => "",
        };
        let nick = &raw[..raw.len() - user.len() - host.len()];

        Prefix {
            raw: raw.to_owned(),
            server: String::new(),
            nick: nick.to_owned(),
            user: user.to_owned(),
            host: host.to_owned(),
        }
    }

    /// True if this prefix names a server.
    pub fn is_server(&self) -> bool {
        !self.server.is_empty()
    }

    /// True if this prefix names a user.
    pub fn is_user(&self) -> bool {
        !self.is_server() && !self.raw.is_empty()
    }

    /// The username without its `!` marker.
    pub fn username(&self) -> &str {
        self.user.strip_prefix('!').unwrap_or(&self.user)
    }

    /// The hostname without its `@` marker.
    pub fn hostname(&self) -> &str {
        self.host.strip_prefix('@').unwrap_or(&self.host)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Prefix {
    fn from(raw: &str) -> Self {
        Prefix::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_user_prefix() {
        let p = Prefix::parse("ronni!ronni@ronni.tmi.twitch.tv");
        assert_eq!(p.nick, "ronni");
        assert_eq!(p.user, "!ronni");
        assert_eq!(p.host, "@ronni.tmi.twitch.tv");
        assert_eq!(format!("{}{}{}", p.nick, p.user, p.host), p.raw);
        assert_eq!(p.username(), "ronni");
        assert_eq!(p.hostname(), "ronni.tmi.twitch.tv");
        assert!(p.is_user());
        assert!(!p.is_server());
    }

    #[test]
    fn test_server_prefix() {
        let p = Prefix::parse("irc.example.com");
        assert_eq!(p.server, "irc.example.com");
        assert!(p.nick.is_empty());
        assert!(p.user.is_empty());
        assert!(p.host.is_empty());
        assert!(p.is_server());
    }

    #[test]
    fn test_nick_and_host_only() {
        let p = Prefix::parse("nick@host");
        assert_eq!(p.nick, "nick");
        assert_eq!(p.user, "");
        assert_eq!(p.host, "@host");
    }

    #[test]
    fn test_nick_and_user_only() {
        let p = Prefix::parse("nick!user");
        assert_eq!(p.nick, "nick");
        assert_eq!(p.user, "!user");
        assert_eq!(p.host, "");
    }

    #[test]
    fn test_bang_inside_host() {
        let p = Prefix::parse("nick@ho!st");
        assert_eq!(p.nick, "nick");
        assert_eq!(p.user, "");
        assert_eq!(p.host, "@ho!st");
    }

    #[test]
    fn test_display_is_raw() {
        assert_eq!(Prefix::parse("a!b@c").to_string(), "a!b@c");
    }
}
