use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Command verbs known to the builder.
///
/// Every supported verb has its own arity and shaping rule. `USER`, `SERVER`,
/// `OPER`, `SQUIT` and `OPERWALL` are recognized but refused. Anything else is
/// carried in [`Verb::Raw`] and passed through unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
#[non_exhaustive]
pub enum Verb {
    // === Registration ===
    /// `PASS password`
    PASS,
    /// `NICK nickname`
    NICK,
    /// `QUIT [message]`
    QUIT,

    // === Channels ===
    /// `JOIN channels [keys]`
    JOIN,
    /// `PART channels`
    PART,
    /// `TOPIC channel [topic]`
    TOPIC,
    /// `KICK channel user [comment]`
    KICK,
    /// `INVITE nickname channel`
    INVITE,
    /// `NAMES [channels]`
    NAMES,
    /// `LIST [channels]`
    LIST,

    // === Messaging ===
    /// `PRIVMSG receivers text`
    PRIVMSG,
    /// `NOTICE nickname text`
    NOTICE,

    // === User queries ===
    /// `WHO [name [o]]`
    WHO,
    /// `WHOIS [server] nickmasks`
    WHOIS,
    /// `WHOWAS nickname [count [server]]`
    WHOWAS,
    /// `USERHOST nicknames`
    USERHOST,
    /// `ISON nicknames`
    ISON,

    // === Miscellaneous ===
    /// `PING server1 [server2]`
    PING,
    /// `PONG daemon1 [daemon2]`
    PONG,
    /// `AWAY [message]`
    AWAY,
    /// `REHASH`
    REHASH,
    /// `RESTART`
    RESTART,
    /// `SUMMON user [server]`
    SUMMON,
    /// `USERS [server]`
    USERS,

    // === Recognized, not supported ===
    /// `USER` (refused)
    USER,
    /// `SERVER` (refused)
    SERVER,
    /// `OPER` (refused)
    OPER,
    /// `SQUIT` (refused)
    SQUIT,
    /// `OPERWALL` (refused)
    OPERWALL,

    /// Any other verb, kept as written.
    Raw(String),
}

/// Accepted parameter count range for a verb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arity {
    /// Fewest parameters accepted.
    pub min: usize,
    /// Most parameters accepted, `None` for no limit.
    pub max: Option<usize>,
}

impl Arity {
    const fn exactly(n: usize) -> Self {
        Arity { min: n, max: Some(n) }
    }

    const fn between(min: usize, max: usize) -> Self {
        Arity { min, max: Some(max) }
    }

    const fn at_least(min: usize) -> Self {
        Arity { min, max: None }
    }

    /// True if `count` parameters are accepted.
    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && !matches!(self.max, Some(max) if count > max)
    }
}

impl Verb {
    /// The wire spelling of this verb.
    pub fn as_str(&self) -> &str {
        match self {
            Verb::PASS => "PASS",
            Verb::NICK => "NICK",
            Verb::QUIT => "QUIT",
            Verb::JOIN => "JOIN",
            Verb::PART => "PART",
            Verb::TOPIC => "TOPIC",
            Verb::KICK => "KICK",
            Verb::INVITE => "INVITE",
            Verb::NAMES => "NAMES",
            Verb::LIST => "LIST",
            Verb::PRIVMSG => "PRIVMSG",
            Verb::NOTICE => "NOTICE",
            Verb::WHO => "WHO",
            Verb::WHOIS => "WHOIS",
            Verb::WHOWAS => "WHOWAS",
            Verb::USERHOST => "USERHOST",
            Verb::ISON => "ISON",
            Verb::PING => "PING",
            Verb::PONG => "PONG",
            Verb::AWAY => "AWAY",
            Verb::REHASH => "REHASH",
            Verb::RESTART => "RESTART",
            Verb::SUMMON => "SUMMON",
            Verb::USERS => "USERS",
            Verb::USER => "USER",
            Verb::SERVER => "SERVER",
            Verb::OPER => "OPER",
            Verb::SQUIT => "SQUIT",
            Verb::OPERWALL => "OPERWALL",
            Verb::Raw(verb) => verb.as_str(),
        }
    }

    /// Accepted parameter counts, or `None` for refused verbs.
    pub fn arity(&self) -> Option<Arity> {
        let arity = match self {
            Verb::PASS | Verb::NICK | Verb::PART | Verb::USERHOST | Verb::ISON => Arity::exactly(1),
            Verb::NOTICE | Verb::INVITE => Arity::exactly(2),
            Verb::REHASH | Verb::RESTART => Arity::exactly(0),
            Verb::QUIT | Verb::AWAY | Verb::NAMES | Verb::LIST | Verb::USERS => {
                Arity::between(0, 1)
            }
            Verb::JOIN | Verb::WHOIS | Verb::PING | Verb::PONG | Verb::SUMMON => {
                Arity::between(1, 2)
            }
            Verb::WHO => Arity::between(0, 2),
            Verb::KICK => Arity::between(2, 3),
            Verb::WHOWAS => Arity::between(1, 3),
            Verb::TOPIC => Arity::at_least(1),
            Verb::PRIVMSG => Arity::at_least(2),
            Verb::Raw(_) => Arity::at_least(0),
            Verb::USER | Verb::SERVER | Verb::OPER | Verb::SQUIT | Verb::OPERWALL => return None,
        };
        Some(arity)
    }

    /// False for verbs the builder refuses to encode.
    pub fn is_supported(&self) -> bool {
        self.arity().is_some()
    }
}

impl FromStr for Verb {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let verb = match s.to_ascii_uppercase().as_str() {
            "PASS" => Verb::PASS,
            "NICK" => Verb::NICK,
            "QUIT" => Verb::QUIT,
            "JOIN" => Verb::JOIN,
            "PART" => Verb::PART,
            "TOPIC" => Verb::TOPIC,
            "KICK" => Verb::KICK,
            "INVITE" => Verb::INVITE,
            "NAMES" => Verb::NAMES,
            "LIST" => Verb::LIST,
            "PRIVMSG" => Verb::PRIVMSG,
            "NOTICE" => Verb::NOTICE,
            "WHO" => Verb::WHO,
            "WHOIS" => Verb::WHOIS,
            "WHOWAS" => Verb::WHOWAS,
            "USERHOST" => Verb::USERHOST,
            "ISON" => Verb::ISON,
            "PING" => Verb::PING,
            "PONG" => Verb::PONG,
            "AWAY" => Verb::AWAY,
            "REHASH" => Verb::REHASH,
            "RESTART" => Verb::RESTART,
            "SUMMON" => Verb::SUMMON,
            "USERS" => Verb::USERS,
            "USER" => Verb::USER,
            "SERVER" => Verb::SERVER,
            "OPER" => Verb::OPER,
            "SQUIT" => Verb::SQUIT,
            "OPERWALL" => Verb::OPERWALL,
            _ => Verb::Raw(s.to_owned()),
        };
        Ok(verb)
    }
}

impl From<&str> for Verb {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(verb) => verb,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
