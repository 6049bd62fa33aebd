//! Session configuration.

use std::fmt;
use std::sync::Arc;

use tokio_rustls::rustls::ClientConfig;

/// Twitch chat host.
pub const TWITCH_HOST: &str = "irc.chat.twitch.tv";
/// Plaintext port.
pub const PLAIN_PORT: u16 = 6667;
/// TLS port.
pub const TLS_PORT: u16 = 6697;
/// Origin named in keep-alive replies.
pub const DEFAULT_PONG_ORIGIN: &str = "tmi.twitch.tv";

/// A host and port to connect to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Endpoint {
            host: host.into(),
            port,
        }
    }

    /// The plaintext Twitch endpoint.
    pub fn plain() -> Self {
        Endpoint::new(TWITCH_HOST, PLAIN_PORT)
    }

    /// The TLS Twitch endpoint.
    pub fn tls() -> Self {
        Endpoint::new(TWITCH_HOST, TLS_PORT)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Options for [`Session`](super::Session).
///
/// ```
/// use netirc::SessionConfig;
///
/// let config = SessionConfig::new("justinfan123", "oauth:secret")
///     .with_pong_origin("tmi.twitch.tv");
/// assert_eq!(config.endpoint().to_string(), "irc.chat.twitch.tv:6667");
/// assert!(!format!("{config:?}").contains("secret"));
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Nickname sent during registration.
    pub nickname: String,
    /// Password sent with `PASS`, usually `oauth:<token>`.
    pub token: String,
    /// Connect over TLS.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tls: bool,
    /// Endpoint override; the Twitch endpoint for `tls` is used otherwise.
    #[cfg_attr(feature = "serde", serde(default))]
    pub endpoint: Option<Endpoint>,
    /// Origin named in `PONG` replies.
    #[cfg_attr(feature = "serde", serde(default = "default_pong_origin"))]
    pub pong_origin: String,
    /// Encoding label for inbound text; ASCII when unset.
    #[cfg_attr(feature = "serde", serde(default))]
    pub encoding: Option<String>,
    /// Client TLS settings, required when `tls` is set.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub tls_config: Option<Arc<ClientConfig>>,
}

#[cfg(feature = "serde")]
fn default_pong_origin() -> String {
    DEFAULT_PONG_ORIGIN.to_owned()
}

impl SessionConfig {
    pub fn new(nickname: impl Into<String>, token: impl Into<String>) -> Self {
        SessionConfig {
            nickname: nickname.into(),
            token: token.into(),
            tls: false,
            endpoint: None,
            pong_origin: DEFAULT_PONG_ORIGIN.to_owned(),
            encoding: None,
            tls_config: None,
        }
    }

    /// Enable TLS with the given client settings.
    pub fn with_tls(mut self, tls_config: Arc<ClientConfig>) -> Self {
        self.tls = true;
        self.tls_config = Some(tls_config);
        self
    }

    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn with_pong_origin(mut self, origin: impl Into<String>) -> Self {
        self.pong_origin = origin.into();
        self
    }

    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// The endpoint this configuration connects to.
    pub fn endpoint(&self) -> Endpoint {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None if self.tls => Endpoint::tls(),
            None => Endpoint::plain(),
        }
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("nickname", &self.nickname)
            .field("token", &"<redacted>")
            .field("tls", &self.tls)
            .field("endpoint", &self.endpoint)
            .field("pong_origin", &self.pong_origin)
            .field("encoding", &self.encoding)
            .field("tls_config", &self.tls_config.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let mut config = SessionConfig::new("bot", "oauth:x");
        assert_eq!(config.endpoint(), Endpoint::new("irc.chat.twitch.tv", 6667));
        config.tls = true;
        assert_eq!(config.endpoint(), Endpoint::new("irc.chat.twitch.tv", 6697));
    }

    #[test]
    fn test_endpoint_override() {
        let config =
            SessionConfig::new("bot", "oauth:x").with_endpoint(Endpoint::new("127.0.0.1", 7000));
        assert_eq!(config.endpoint().to_string(), "127.0.0.1:7000");
    }

    #[test]
    fn test_debug_masks_token() {
        let config = SessionConfig::new("bot", "oauth:hunter2");
        let debug = format!("{:?}", config);
        assert!(debug.contains("bot"));
        assert!(!debug.contains("hunter2"));
    }
}
