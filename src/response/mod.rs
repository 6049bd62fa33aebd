//! IRC numeric reply codes.
//!
//! Servers answer commands with three-digit numerics instead of verbs. This
//! module names the RFC 1459 replies plus the few later numerics Twitch emits
//! during registration (`RPL_YOURHOST` through `RPL_ISUPPORT`).
//!
//! # Reference
//! - RFC 1459 section 6: Replies

#![allow(non_camel_case_types)]

use std::fmt;
use std::str::FromStr;

macro_rules! responses {
    ($($(#[$doc:meta])* $name:ident = $code:literal,)*) => {
        /// IRC server numeric reply.
        ///
        /// Codes are categorized as:
        /// - 001-099: Connection registration
        /// - 200-399: Command replies
        /// - 400-599: Error replies
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u16)]
        #[non_exhaustive]
        pub enum Response {
            $($(#[$doc])* $name = $code,)*
        }

        impl Response {
            /// Look up the named reply for a numeric code.
            pub fn from_code(code: u16) -> Option<Response> {
                match code {
                    $($code => Some(Response::$name),)*
                    _ => None,
                }
            }

            /// The reply's symbolic name, e.g. `RPL_WELCOME`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Response::$name => stringify!($name),)*
                }
            }
        }
    };
}

responses! {
    // === Connection Registration ===
    /// 001 - Welcome to the network
    RPL_WELCOME = 1,
    /// 002 - Your host is
    RPL_YOURHOST = 2,
    /// 003 - Server creation date
    RPL_CREATED = 3,
    /// 004 - Server info
    RPL_MYINFO = 4,
    /// 005 - Server feature advertisement
    RPL_ISUPPORT = 5,

    // === Command Replies ===
    /// 200 - Trace link
    RPL_TRACELINK = 200,
    /// 201 - Trace connecting
    RPL_TRACECONNECTING = 201,
    /// 202 - Trace handshake
    RPL_TRACEHANDSHAKE = 202,
    /// 203 - Trace unknown
    RPL_TRACEUNKNOWN = 203,
    /// 204 - Trace operator
    RPL_TRACEOPERATOR = 204,
    /// 205 - Trace user
    RPL_TRACEUSER = 205,
    /// 206 - Trace server
    RPL_TRACESERVER = 206,
    /// 208 - Trace new type
    RPL_TRACENEWTYPE = 208,
    /// 211 - Stats link info
    RPL_STATSLINKINFO = 211,
    /// 212 - Stats commands
    RPL_STATSCOMMANDS = 212,
    /// 213 - Stats C-line
    RPL_STATSCLINE = 213,
    /// 214 - Stats N-line
    RPL_STATSNLINE = 214,
    /// 215 - Stats I-line
    RPL_STATSILINE = 215,
    /// 216 - Stats K-line
    RPL_STATSKLINE = 216,
    /// 218 - Stats Y-line
    RPL_STATSYLINE = 218,
    /// 219 - End of stats
    RPL_ENDOFSTATS = 219,
    /// 221 - User mode string
    RPL_UMODEIS = 221,
    /// 241 - Stats L-line
    RPL_STATSLLINE = 241,
    /// 242 - Stats uptime
    RPL_STATSUPTIME = 242,
    /// 243 - Stats O-line
    RPL_STATSOLINE = 243,
    /// 244 - Stats H-line
    RPL_STATSHLINE = 244,
    /// 251 - Luser client count
    RPL_LUSERCLIENT = 251,
    /// 252 - Luser operator count
    RPL_LUSEROP = 252,
    /// 253 - Luser unknown connections
    RPL_LUSERUNKNOWN = 253,
    /// 254 - Luser channel count
    RPL_LUSERCHANNELS = 254,
    /// 255 - Luser local info
    RPL_LUSERME = 255,
    /// 256 - Admin info start
    RPL_ADMINME = 256,
    /// 257 - Admin location 1
    RPL_ADMINLOC1 = 257,
    /// 258 - Admin location 2
    RPL_ADMINLOC2 = 258,
    /// 259 - Admin email
    RPL_ADMINEMAIL = 259,
    /// 261 - Trace log
    RPL_TRACELOG = 261,
    /// 300 - Dummy reply
    RPL_NONE = 300,
    /// 301 - User is away
    RPL_AWAY = 301,
    /// 302 - USERHOST reply
    RPL_USERHOST = 302,
    /// 303 - ISON reply
    RPL_ISON = 303,
    /// 305 - No longer away
    RPL_UNAWAY = 305,
    /// 306 - Marked as away
    RPL_NOWAWAY = 306,
    /// 311 - WHOIS user info
    RPL_WHOISUSER = 311,
    /// 312 - WHOIS server
    RPL_WHOISSERVER = 312,
    /// 313 - WHOIS operator status
    RPL_WHOISOPERATOR = 313,
    /// 314 - WHOWAS user info
    RPL_WHOWASUSER = 314,
    /// 315 - End of WHO
    RPL_ENDOFWHO = 315,
    /// 317 - WHOIS idle time
    RPL_WHOISIDLE = 317,
    /// 318 - End of WHOIS
    RPL_ENDOFWHOIS = 318,
    /// 319 - WHOIS channels
    RPL_WHOISCHANNELS = 319,
    /// 321 - List start
    RPL_LISTSTART = 321,
    /// 322 - List entry
    RPL_LIST = 322,
    /// 323 - List end
    RPL_LISTEND = 323,
    /// 324 - Channel mode
    RPL_CHANNELMODEIS = 324,
    /// 331 - No topic set
    RPL_NOTOPIC = 331,
    /// 332 - Channel topic
    RPL_TOPIC = 332,
    /// 341 - Inviting user to channel
    RPL_INVITING = 341,
    /// 342 - Summoning user
    RPL_SUMMONING = 342,
    /// 351 - Server version
    RPL_VERSION = 351,
    /// 352 - WHO reply
    RPL_WHOREPLY = 352,
    /// 353 - NAMES reply
    RPL_NAMREPLY = 353,
    /// 364 - Links entry
    RPL_LINKS = 364,
    /// 365 - End of links
    RPL_ENDOFLINKS = 365,
    /// 366 - End of NAMES
    RPL_ENDOFNAMES = 366,
    /// 367 - Ban list entry
    RPL_BANLIST = 367,
    /// 368 - End of ban list
    RPL_ENDOFBANLIST = 368,
    /// 369 - End of WHOWAS
    RPL_ENDOFWHOWAS = 369,
    /// 371 - Info line
    RPL_INFO = 371,
    /// 372 - MOTD line
    RPL_MOTD = 372,
    /// 374 - End of info
    RPL_ENDOFINFO = 374,
    /// 375 - MOTD start
    RPL_MOTDSTART = 375,
    /// 376 - End of MOTD
    RPL_ENDOFMOTD = 376,
    /// 381 - You are now an operator
    RPL_YOUREOPER = 381,
    /// 382 - Rehashing
    RPL_REHASHING = 382,
    /// 391 - Server time
    RPL_TIME = 391,
    /// 392 - Users start
    RPL_USERSSTART = 392,
    /// 393 - Users entry
    RPL_USERS = 393,
    /// 394 - End of users
    RPL_ENDOFUSERS = 394,
    /// 395 - Nobody logged in
    RPL_NOUSERS = 395,

    // === Error Replies ===
    /// 401 - No such nick
    ERR_NOSUCHNICK = 401,
    /// 402 - No such server
    ERR_NOSUCHSERVER = 402,
    /// 403 - No such channel
    ERR_NOSUCHCHANNEL = 403,
    /// 404 - Cannot send to channel
    ERR_CANNOTSENDTOCHAN = 404,
    /// 405 - Too many channels
    ERR_TOOMANYCHANNELS = 405,
    /// 406 - There was no such nickname
    ERR_WASNOSUCHNICK = 406,
    /// 407 - Too many targets
    ERR_TOOMANYTARGETS = 407,
    /// 409 - No origin specified
    ERR_NOORIGIN = 409,
    /// 411 - No recipient given
    ERR_NORECIPIENT = 411,
    /// 412 - No text to send
    ERR_NOTEXTTOSEND = 412,
    /// 413 - No toplevel domain
    ERR_NOTOPLEVEL = 413,
    /// 414 - Wildcard in toplevel domain
    ERR_WILDTOPLEVEL = 414,
    /// 421 - Unknown command
    ERR_UNKNOWNCOMMAND = 421,
    /// 422 - MOTD file missing
    ERR_NOMOTD = 422,
    /// 423 - No admin info
    ERR_NOADMININFO = 423,
    /// 424 - File error
    ERR_FILEERROR = 424,
    /// 431 - No nickname given
    ERR_NONICKNAMEGIVEN = 431,
    /// 432 - Erroneous nickname
    ERR_ERRONEUSNICKNAME = 432,
    /// 433 - Nickname in use
    ERR_NICKNAMEINUSE = 433,
    /// 436 - Nickname collision
    ERR_NICKCOLLISION = 436,
    /// 441 - User not in channel
    ERR_USERNOTINCHANNEL = 441,
    /// 442 - Not on channel
    ERR_NOTONCHANNEL = 442,
    /// 443 - User already on channel
    ERR_USERONCHANNEL = 443,
    /// 444 - User not logged in
    ERR_NOLOGIN = 444,
    /// 445 - SUMMON disabled
    ERR_SUMMONDISABLED = 445,
    /// 446 - USERS disabled
    ERR_USERSDISABLED = 446,
    /// 451 - Not registered
    ERR_NOTREGISTERED = 451,
    /// 461 - Not enough parameters
    ERR_NEEDMOREPARAMS = 461,
    /// 462 - Already registered
    ERR_ALREADYREGISTRED = 462,
    /// 463 - Host not privileged
    ERR_NOPERMFORHOST = 463,
    /// 464 - Password incorrect
    ERR_PASSWDMISMATCH = 464,
    /// 465 - Banned from server
    ERR_YOUREBANNEDCREEP = 465,
    /// 467 - Channel key already set
    ERR_KEYSET = 467,
    /// 471 - Channel is full
    ERR_CHANNELISFULL = 471,
    /// 472 - Unknown mode char
    ERR_UNKNOWNMODE = 472,
    /// 473 - Invite-only channel
    ERR_INVITEONLYCHAN = 473,
    /// 474 - Banned from channel
    ERR_BANNEDFROMCHAN = 474,
    /// 475 - Bad channel key
    ERR_BADCHANNELKEY = 475,
    /// 481 - Not an operator
    ERR_NOPRIVILEGES = 481,
    /// 482 - Not channel operator
    ERR_CHANOPRIVSNEEDED = 482,
    /// 483 - Cannot kill a server
    ERR_CANTKILLSERVER = 483,
    /// 491 - No O-lines for host
    ERR_NOOPERHOST = 491,
    /// 501 - Unknown user mode flag
    ERR_UMODEUNKNOWNFLAG = 501,
    /// 502 - Cannot change mode for other users
    ERR_USERSDONTMATCH = 502,
}

impl Response {
    /// Returns the numeric code.
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is an error reply (400-599).
    #[inline]
    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.code())
    }

    /// Check if this is a connection registration reply (001-099).
    #[inline]
    pub fn is_registration(&self) -> bool {
        self.code() < 100
    }

    /// Check if this is a command reply (200-399).
    #[inline]
    pub fn is_reply(&self) -> bool {
        (200..400).contains(&self.code())
    }
}

impl FromStr for Response {
    type Err = ParseResponseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: u16 = s.parse().map_err(|_| ParseResponseError::InvalidFormat)?;
        Response::from_code(code).ok_or(ParseResponseError::UnknownCode(code))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.code())
    }
}

/// Error when parsing a response code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseResponseError {
    /// The string was not a valid number.
    InvalidFormat,
    /// The numeric code is not a known reply.
    UnknownCode(u16),
}

impl fmt::Display for ParseResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "invalid response code format"),
            Self::UnknownCode(code) => write!(f, "unknown response code: {}", code),
        }
    }
}

impl std::error::Error for ParseResponseError {}
