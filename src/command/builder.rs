//! Command encoder: one verb plus parameters in, one wire line out.

use crate::error::CommandError;

use super::list::{build_list, prefix_channel, prefix_message};
use super::verb::Verb;

/// Builds a single outbound line from a [`Verb`] and its parameters.
///
/// Each verb validates its parameter count against [`Verb::arity`] and shapes
/// its arguments (channel prefixing, list joining, trailing `:`) before the
/// line is produced. The result never carries a terminator or trailing
/// whitespace.
///
/// ```
/// use netirc::{CommandBuilder, Verb};
///
/// let line = CommandBuilder::from_line(Verb::JOIN, "Cohh").build().unwrap();
/// assert_eq!(line, "JOIN #cohh");
///
/// let line = CommandBuilder::new(Verb::PRIVMSG, ["cohh", "hello", "there"]).build().unwrap();
/// assert_eq!(line, "PRIVMSG cohh :hello there");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandBuilder {
    verb: Verb,
    params: Vec<String>,
}

impl CommandBuilder {
    /// Builder over an ordered parameter list.
    pub fn new<I, S>(verb: impl Into<Verb>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandBuilder {
            verb: verb.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Builder over a space-delimited parameter string.
    ///
    /// The string is split on every single space, so `"a  b"` has an empty
    /// middle parameter. An empty string means no parameters.
    pub fn from_line(verb: impl Into<Verb>, line: &str) -> Self {
        let params = if line.is_empty() {
            Vec::new()
        } else {
            line.split(' ').map(str::to_owned).collect()
        };
        CommandBuilder {
            verb: verb.into(),
            params,
        }
    }

    pub fn verb(&self) -> &Verb {
        &self.verb
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Validate and shape the command into a wire line.
    pub fn build(&self) -> Result<String, CommandError> {
        let verb = &self.verb;
        let name = verb.as_str();
        let p = self.params.as_slice();

        let arity = verb
            .arity()
            .ok_or_else(|| CommandError::NotSupported(name.to_owned()))?;
        if !arity.contains(p.len()) {
            return Err(CommandError::arity(name, p.len()));
        }

        let line = match verb {
            Verb::JOIN => {
                let channels = channel_list(name, &p[0].to_lowercase())?;
                format!("{} {} {}", name, channels, opt(p, 1))
            }
            Verb::PART => format!("{} {}", name, channel_list(name, &p[0])?),
            Verb::TOPIC => {
                if p[0].is_empty() {
                    return Err(CommandError::validation(
                        name,
                        "",
                        "parameter 'channels' is empty",
                    ));
                }
                let channel = prefix_channel(&p[0]);
                if p.len() > 1 {
                    format!("{} {} {}", name, channel, prefix_message(&p[1..].join(" ")))
                } else {
                    format!("{} {}", name, channel)
                }
            }
            Verb::PASS => format!("{} {}", name, p[0]),
            Verb::NICK => format!("{} {}", name, p[0].to_lowercase()),
            Verb::KICK => {
                let comment = p.get(2).map(String::as_str).map(prefix_message).unwrap_or_default();
                format!("{} {} {} {}", name, p[0], p[1], comment)
            }
            Verb::PRIVMSG => {
                let receivers = build_list(&p[0], ',', ',', false);
                if receivers.is_empty() {
                    return Err(CommandError::validation(
                        name,
                        p[0].as_str(),
                        "parameter 'receivers' is empty",
                    ));
                }
                format!("{} {} {}", name, receivers, prefix_message(&p[1..].join(" ")))
            }
            Verb::NOTICE | Verb::INVITE => format!("{} {} {}", name, p[0], p[1]),
            Verb::WHO => match p.first() {
                None => name.to_owned(),
                Some(mask) if p.len() == 2 => format!("{} {} o", name, mask),
                Some(mask) => format!("{} {}", name, mask),
            },
            Verb::WHOIS => match p {
                [server, masks] => {
                    format!("{} {} {}", name, server, build_list(masks, ',', ',', false))
                }
                _ => format!("{} {}", name, build_list(&p[0], ',', ',', false)),
            },
            Verb::WHOWAS => match p.get(1) {
                None => format!("{} {}", name, p[0]),
                Some(count) => {
                    let count: i32 = count.parse().map_err(|_| {
                        CommandError::validation(
                            name,
                            count.as_str(),
                            "failed to parse parameter 'count' to an integer",
                        )
                    })?;
                    format!("{} {} {} {}", name, p[0], count, opt(p, 2))
                }
            },
            Verb::PING | Verb::PONG | Verb::SUMMON => format!("{} {} {}", name, p[0], opt(p, 1)),
            Verb::QUIT | Verb::AWAY | Verb::NAMES | Verb::LIST | Verb::USERS => {
                format!("{} {}", name, opt(p, 0))
            }
            Verb::USERHOST | Verb::ISON => {
                format!("{} {}", name, build_list(&p[0], ',', ' ', false))
            }
            Verb::REHASH | Verb::RESTART => name.to_owned(),
            Verb::Raw(raw) => {
                if raw.trim().is_empty() {
                    return Err(CommandError::validation(
                        raw.as_str(),
                        raw.as_str(),
                        "verb is empty",
                    ));
                }
                format!("{} {}", raw, p.join(" "))
            }
            Verb::USER | Verb::SERVER | Verb::OPER | Verb::SQUIT | Verb::OPERWALL => {
                return Err(CommandError::NotSupported(name.to_owned()));
            }
        };

        Ok(line.trim_end().to_owned())
    }
}

fn opt(params: &[String], index: usize) -> &str {
    params.get(index).map_or("", String::as_str)
}

/// Normalized channel list, or an error naming `verb` if nothing survives.
fn channel_list(verb: &str, list: &str) -> Result<String, CommandError> {
    if list.is_empty() {
        return Err(CommandError::validation(
            verb,
            "",
            "parameter 'channels' is empty",
        ));
    }
    let channels = build_list(list, ',', ',', true);
    if channels.is_empty() {
        return Err(CommandError::validation(
            verb,
            list,
            "parameter 'channels' has no channel names",
        ));
    }
    Ok(channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(verb: Verb, line: &str) -> Result<String, CommandError> {
        CommandBuilder::from_line(verb, line).build()
    }

    #[test]
    fn test_join_lowercases_and_prefixes() {
        assert_eq!(build(Verb::JOIN, "Cohh").unwrap(), "JOIN #cohh");
        assert_eq!(build(Verb::JOIN, "#Cohh,Soda").unwrap(), "JOIN #cohh,#soda");
        assert_eq!(
            build(Verb::JOIN, "cohh,soda key1,key2").unwrap(),
            "JOIN #cohh,#soda key1,key2"
        );
    }

    #[test]
    fn test_join_empty_channels() {
        let err = CommandBuilder::new(Verb::JOIN, [""]).build().unwrap_err();
        assert_eq!(err.verb(), "JOIN");
        assert!(build(Verb::JOIN, ",,").is_err());
    }

    #[test]
    fn test_part_error_names_part() {
        let err = CommandBuilder::new(Verb::PART, [""]).build().unwrap_err();
        assert_eq!(err.verb(), "PART");
        assert_eq!(build(Verb::PART, "cohh,#soda").unwrap(), "PART #cohh,#soda");
    }

    #[test]
    fn test_topic() {
        assert_eq!(build(Verb::TOPIC, "soda").unwrap(), "TOPIC #soda");
        assert_eq!(
            build(Verb::TOPIC, "#cohh This is the topic").unwrap(),
            "TOPIC #cohh :This is the topic"
        );
        assert_eq!(
            build(Verb::TOPIC, "cohh :already marked").unwrap(),
            "TOPIC #cohh :already marked"
        );
    }

    #[test]
    fn test_privmsg_colon_insertion() {
        assert_eq!(
            build(Verb::PRIVMSG, "cohh hello world").unwrap(),
            "PRIVMSG cohh :hello world"
        );
        assert_eq!(
            build(Verb::PRIVMSG, "#cohh :hello world").unwrap(),
            "PRIVMSG #cohh :hello world"
        );
        assert_eq!(
            build(Verb::PRIVMSG, "a,,b hi").unwrap(),
            "PRIVMSG a,b :hi"
        );
    }

    #[test]
    fn test_pass_and_nick() {
        assert_eq!(build(Verb::PASS, "oauth:abc").unwrap(), "PASS oauth:abc");
        assert_eq!(build(Verb::NICK, "BotName").unwrap(), "NICK botname");
    }

    #[test]
    fn test_kick_comment() {
        assert_eq!(build(Verb::KICK, "#c troll").unwrap(), "KICK #c troll");
        assert_eq!(
            CommandBuilder::new(Verb::KICK, ["#c", "troll", "be nice"])
                .build()
                .unwrap(),
            "KICK #c troll :be nice"
        );
    }

    #[test]
    fn test_who() {
        assert_eq!(build(Verb::WHO, "").unwrap(), "WHO");
        assert_eq!(build(Verb::WHO, "*.fi").unwrap(), "WHO *.fi");
        assert_eq!(build(Verb::WHO, "jto* o").unwrap(), "WHO jto* o");
    }

    #[test]
    fn test_whois() {
        assert_eq!(build(Verb::WHOIS, "a,b").unwrap(), "WHOIS a,b");
        assert_eq!(build(Verb::WHOIS, "eff.org trillian").unwrap(), "WHOIS eff.org trillian");
    }

    #[test]
    fn test_whowas() {
        assert_eq!(build(Verb::WHOWAS, "wiz").unwrap(), "WHOWAS wiz");
        assert_eq!(build(Verb::WHOWAS, "wiz 9").unwrap(), "WHOWAS wiz 9");
        assert_eq!(
            build(Verb::WHOWAS, "trillian 1 *.edu").unwrap(),
            "WHOWAS trillian 1 *.edu"
        );
    }

    #[test]
    fn test_whowas_non_integer_count() {
        match build(Verb::WHOWAS, "wiz many").unwrap_err() {
            CommandError::Validation { verb, value, reason } => {
                assert_eq!(verb, "WHOWAS");
                assert_eq!(value, "many");
                assert!(reason.contains("'count'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_userhost_and_ison_space_join() {
        assert_eq!(build(Verb::USERHOST, "a,b,,c").unwrap(), "USERHOST a b c");
        assert_eq!(build(Verb::ISON, "phone,trillian").unwrap(), "ISON phone trillian");
    }

    #[test]
    fn test_optional_single_param() {
        assert_eq!(build(Verb::QUIT, "").unwrap(), "QUIT");
        assert_eq!(build(Verb::AWAY, "lunch").unwrap(), "AWAY lunch");
        assert_eq!(build(Verb::NAMES, "#c").unwrap(), "NAMES #c");
        assert_eq!(build(Verb::LIST, "").unwrap(), "LIST");
        assert_eq!(build(Verb::USERS, "eff.org").unwrap(), "USERS eff.org");
    }

    #[test]
    fn test_ping_pong_summon() {
        assert_eq!(build(Verb::PONG, ":tmi.twitch.tv").unwrap(), "PONG :tmi.twitch.tv");
        assert_eq!(build(Verb::PING, "a b").unwrap(), "PING a b");
        assert_eq!(build(Verb::SUMMON, "jto tolsun.oulu.fi").unwrap(), "SUMMON jto tolsun.oulu.fi");
    }

    #[test]
    fn test_bare_verbs() {
        assert_eq!(build(Verb::REHASH, "").unwrap(), "REHASH");
        assert!(build(Verb::RESTART, "now").is_err());
    }

    #[test]
    fn test_raw_pass_through() {
        assert_eq!(
            build(Verb::from("CAP"), "REQ :twitch.tv/membership").unwrap(),
            "CAP REQ :twitch.tv/membership"
        );
        assert_eq!(build(Verb::from("RECONNECT"), "").unwrap(), "RECONNECT");
        assert!(build(Verb::from(""), "x").is_err());
    }

    #[test]
    fn test_refused_verbs() {
        for verb in [Verb::USER, Verb::SERVER, Verb::OPER, Verb::SQUIT, Verb::OPERWALL] {
            let err = build(verb.clone(), "a b c d").unwrap_err();
            assert_eq!(err, CommandError::NotSupported(verb.to_string()));
        }
    }

    #[test]
    fn test_arity_violation_names_count() {
        match build(Verb::PART, "a b c").unwrap_err() {
            CommandError::Validation { verb, value, .. } => {
                assert_eq!(verb, "PART");
                assert_eq!(value, "3");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
