//! Byte transports for a session: plain TCP or client-side TLS.

use std::io;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};
use tokio::net::TcpStream;
use tokio_rustls::client::TlsStream;
use tokio_rustls::rustls::pki_types::ServerName;
use tokio_rustls::rustls::ClientConfig;
use tokio_rustls::TlsConnector;
use tracing::{debug, warn};

use crate::client::SessionConfig;
use crate::error::{ProtocolError, Result};

/// A connected stream to the server.
#[allow(clippy::large_enum_variant)]
pub enum Transport {
    Tcp(TcpStream),
    Tls(TlsStream<TcpStream>),
}

impl Transport {
    /// Open the transport described by `config`.
    pub async fn connect(config: &SessionConfig) -> Result<Self> {
        let endpoint = config.endpoint();
        debug!(%endpoint, tls = config.tls, "connecting");

        let stream = TcpStream::connect((endpoint.host.as_str(), endpoint.port)).await?;
        if let Err(e) = Self::enable_keepalive(&stream) {
            warn!("failed to enable TCP keepalive: {}", e);
        }

        if !config.tls {
            return Ok(Self::tcp(stream));
        }
        let tls_config = config
            .tls_config
            .clone()
            .ok_or(ProtocolError::MissingTlsConfig)?;
        Self::tls(stream, tls_config, &endpoint.host).await
    }

    pub fn tcp(stream: TcpStream) -> Self {
        Self::Tcp(stream)
    }

    /// Run the TLS handshake over an established TCP stream.
    pub async fn tls(stream: TcpStream, config: Arc<ClientConfig>, host: &str) -> Result<Self> {
        let server_name = ServerName::try_from(host)
            .map_err(|_| ProtocolError::InvalidServerName(host.to_owned()))?
            .to_owned();
        let stream = TlsConnector::from(config).connect(server_name, stream).await?;
        debug!(host, "tls handshake complete");
        Ok(Self::Tls(stream))
    }

    fn enable_keepalive(stream: &TcpStream) -> io::Result<()> {
        use socket2::{SockRef, TcpKeepalive};

        let sock = SockRef::from(stream);
        let keepalive = TcpKeepalive::new()
            .with_time(Duration::from_secs(120))
            .with_interval(Duration::from_secs(30));

        sock.set_tcp_keepalive(&keepalive)
    }

    pub fn is_tls(&self) -> bool {
        matches!(self, Self::Tls(_))
    }
}

impl AsyncRead for Transport {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        match self.get_mut() {
            Transport::Tcp(stream) => Pin::new(stream).poll_read(cx, buf),
            Transport::Tls(stream) => Pin::new(stream).poll_read(cx, buf),
        }
    }
}

impl AsyncWrite for Transport {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        match self.get_mut() {
            Transport::Tcp(stream) => Pin::new(stream).poll_write(cx, buf),
            Transport::Tls(stream) => Pin::new(stream).poll_write(cx, buf),
        }
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self.get_mut() {
            Transport::Tcp(stream) => Pin::new(stream).poll_flush(cx),
            Transport::Tls(stream) => Pin::new(stream).poll_flush(cx),
        }
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self.get_mut() {
            Transport::Tcp(stream) => Pin::new(stream).poll_shutdown(cx),
            Transport::Tls(stream) => Pin::new(stream).poll_shutdown(cx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Endpoint;

    #[tokio::test]
    async fn test_plain_connect() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let config =
            SessionConfig::new("bot", "oauth:x").with_endpoint(Endpoint::new("127.0.0.1", port));

        let (transport, accepted) = tokio::join!(Transport::connect(&config), listener.accept());
        assert!(!transport.unwrap().is_tls());
        assert!(accepted.is_ok());
    }

    #[tokio::test]
    async fn test_tls_requires_client_config() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let mut config =
            SessionConfig::new("bot", "oauth:x").with_endpoint(Endpoint::new("127.0.0.1", port));
        config.tls = true;

        let (transport, _accepted) = tokio::join!(Transport::connect(&config), listener.accept());
        assert!(matches!(transport, Err(ProtocolError::MissingTlsConfig)));
    }
}
