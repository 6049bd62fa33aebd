//! Error types for the IRC protocol library.
//!
//! Decoding never fails: malformed wire data becomes a degenerate message.
//! The errors here cover command building and the connection session.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol and session errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during connecting, reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A command could not be built.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// The encoding label is not known to `encoding_rs`.
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    /// An outbound line contains a character that would break framing.
    #[error("illegal control character in outbound line: {0:?}")]
    IllegalControlChar(char),

    /// The configured host is not a valid TLS server name.
    #[error("invalid server name: {0}")]
    InvalidServerName(String),

    /// TLS was requested without a client configuration.
    #[error("tls requested but no client config was supplied")]
    MissingTlsConfig,

    /// The session has already closed.
    #[error("session closed")]
    Closed,

    /// The server closed the connection.
    #[error("connection closed by peer")]
    ConnectionReset,
}

/// Errors raised by the command builder.
///
/// Neither variant produces partial output: the command is simply not sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CommandError {
    /// A parameter constraint was violated.
    #[error("{verb}: invalid value {value:?}: {reason}")]
    Validation {
        /// The command verb being built.
        verb: String,
        /// The offending value (a parameter, or the parameter count).
        value: String,
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// The verb is recognized but deliberately not implemented.
    #[error("{0}: command is not supported")]
    NotSupported(String),
}

impl CommandError {
    pub(crate) fn validation(
        verb: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CommandError::Validation {
            verb: verb.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Arity violation: the value is the actual parameter count.
    pub(crate) fn arity(verb: impl Into<String>, got: usize) -> Self {
        Self::validation(
            verb,
            got.to_string(),
            format!("parameter count does not match '{}'", got),
        )
    }

    /// The verb this error refers to.
    pub fn verb(&self) -> &str {
        match self {
            CommandError::Validation { verb, .. } => verb,
            CommandError::NotSupported(verb) => verb,
        }
    }
}
