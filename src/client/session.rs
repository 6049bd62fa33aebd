//! The connection session: registration, keep-alive and the two I/O tasks.

use std::io;

use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite, ReadHalf, WriteHalf};
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinError, JoinHandle};
use tokio_util::codec::{FramedRead, FramedWrite};
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, info, trace, warn};

use crate::command::{CommandBuilder, Verb};
use crate::error::{ProtocolError, Result};
use crate::line::LineCodec;
use crate::message::MessageDecoder;
use crate::transport::Transport;

use super::config::SessionConfig;
use super::event::{ChatMessage, Event};

/// Lifecycle of a [`Session`].
///
/// A `Session` handle only exists from `Ready` on. `Disconnected` is the
/// default, for callers tracking a connection they have not started yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Disconnected,
    Connecting,
    Registering,
    Ready,
    Closed,
}

/// Receiving side of the event stream returned with a [`Session`].
pub type Events = mpsc::UnboundedReceiver<Event>;

/// A live connection to a chat server.
///
/// Inbound lines are read by one task and outbound lines written by another;
/// the two share nothing but the outbound queue. Every inbound line is
/// published as an [`Event`], and `PING` is answered without involving the
/// caller. Closing or dropping the session, or any transport failure, stops
/// both tasks.
///
/// ```no_run
/// # async fn run() -> netirc::error::Result<()> {
/// use netirc::{Event, Session, SessionConfig};
///
/// let config = SessionConfig::new("justinfan123", "oauth:anything");
/// let (session, mut events) = Session::connect(config).await?;
/// session.join("cohhcarnage")?;
///
/// while let Some(event) = events.recv().await {
///     if let Event::Chat(chat) = event {
///         println!("#{} <{}> {}", chat.channel, chat.user, chat.text);
///     }
/// }
/// session.close().await
/// # }
/// ```
#[derive(Debug)]
pub struct Session {
    outbound: mpsc::UnboundedSender<String>,
    phase: watch::Receiver<Phase>,
    cancel: CancellationToken,
    supervisor: JoinHandle<Result<()>>,
    _guard: DropGuard,
}

impl Session {
    /// Connect to the configured endpoint and register.
    pub async fn connect(config: SessionConfig) -> Result<(Session, Events)> {
        let (phase, _) = watch::channel(Phase::Connecting);
        info!(endpoint = %config.endpoint(), nickname = %config.nickname, "connecting");

        let transport = match Transport::connect(&config).await {
            Ok(transport) => transport,
            Err(e) => {
                warn!("connect failed: {}", e);
                phase.send_replace(Phase::Closed);
                return Err(e);
            }
        };
        Self::start(transport, &config, phase)
    }

    /// Run a session over an already connected stream.
    pub fn from_stream<S>(stream: S, config: &SessionConfig) -> Result<(Session, Events)>
    where
        S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        let (phase, _) = watch::channel(Phase::Connecting);
        Self::start(stream, config, phase)
    }

    fn start<S>(
        stream: S,
        config: &SessionConfig,
        phase: watch::Sender<Phase>,
    ) -> Result<(Session, Events)>
    where
        S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        let decoder = match &config.encoding {
            Some(label) => MessageDecoder::with_encoding(label)?,
            None => MessageDecoder::new(),
        };
        let pong = CommandBuilder::new(Verb::PONG, [format!(":{}", config.pong_origin)]).build()?;
        let pass = CommandBuilder::new(Verb::PASS, [config.token.as_str()]).build()?;
        let nick = CommandBuilder::new(Verb::NICK, [config.nickname.as_str()]).build()?;
        check_line(&pass)?;
        check_line(&nick)?;

        let (read_half, write_half) = tokio::io::split(stream);
        let (outbound, queue) = mpsc::unbounded_channel();
        let (events_tx, events) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let reader = tokio::spawn(read_loop(
            FramedRead::new(read_half, LineCodec::with_decoder(decoder)),
            events_tx,
            outbound.clone(),
            pong,
            cancel.clone(),
        ));
        let writer = tokio::spawn(write_loop(
            FramedWrite::new(write_half, LineCodec::new()),
            queue,
            cancel.clone(),
        ));

        phase.send_replace(Phase::Registering);
        debug!(encoding = decoder.encoding_name(), "registering");
        for line in [pass, nick] {
            outbound.send(line).map_err(|_| ProtocolError::Closed)?;
        }
        // Registration completes implicitly; nothing waits for the welcome.
        phase.send_replace(Phase::Ready);
        info!("session ready");

        let receiver = phase.subscribe();
        let supervisor = tokio::spawn(supervise(reader, writer, phase));

        let session = Session {
            outbound,
            phase: receiver,
            _guard: cancel.clone().drop_guard(),
            cancel,
            supervisor,
        };
        Ok((session, events))
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    /// A receiver that observes phase changes.
    pub fn watch_phase(&self) -> watch::Receiver<Phase> {
        self.phase.clone()
    }

    /// Join one or more comma-separated channels.
    pub fn join(&self, channels: &str) -> Result<()> {
        self.send(CommandBuilder::new(Verb::JOIN, [channels]))
    }

    /// Join channels with their keys, both comma-separated.
    pub fn join_with_keys(&self, channels: &str, keys: &str) -> Result<()> {
        self.send(CommandBuilder::new(Verb::JOIN, [channels, keys]))
    }

    /// Leave one or more comma-separated channels.
    pub fn part(&self, channels: &str) -> Result<()> {
        self.send(CommandBuilder::new(Verb::PART, [channels]))
    }

    /// Set a channel topic, or query it when `topic` is `None`.
    pub fn topic(&self, channel: &str, topic: Option<&str>) -> Result<()> {
        self.send(CommandBuilder::new(
            Verb::TOPIC,
            std::iter::once(channel).chain(topic),
        ))
    }

    /// Send a chat message to one or more comma-separated receivers.
    pub fn privmsg(&self, receivers: &str, text: &str) -> Result<()> {
        self.send(CommandBuilder::new(Verb::PRIVMSG, [receivers, text]))
    }

    /// Build and queue any command.
    pub fn send(&self, command: CommandBuilder) -> Result<()> {
        let line = command.build()?;
        self.enqueue(line)
    }

    /// Queue a line as-is. It must not contain CR, LF or NUL.
    pub fn send_raw(&self, line: impl Into<String>) -> Result<()> {
        self.enqueue(line.into())
    }

    fn enqueue(&self, line: String) -> Result<()> {
        check_line(&line)?;
        if self.cancel.is_cancelled() {
            return Err(ProtocolError::Closed);
        }
        self.outbound.send(line).map_err(|_| ProtocolError::Closed)
    }

    /// Stop both tasks and wait for them.
    ///
    /// Lines already queued are written before the writer exits. Returns the
    /// transport error that ended the session, if any.
    pub async fn close(self) -> Result<()> {
        debug!("close requested");
        self.cancel.cancel();
        self.closed().await
    }

    /// Wait for the session to end without asking it to.
    ///
    /// Dropping the returned future before it completes closes the session.
    pub async fn closed(self) -> Result<()> {
        let Session {
            supervisor, _guard, ..
        } = self;
        flatten(supervisor.await)
    }
}

fn check_line(line: &str) -> Result<()> {
    match line.chars().find(|c| matches!(c, '\r' | '\n' | '\0')) {
        Some(ch) => Err(ProtocolError::IllegalControlChar(ch)),
        None => Ok(()),
    }
}

async fn read_loop<S>(
    mut reader: FramedRead<ReadHalf<S>, LineCodec>,
    events: mpsc::UnboundedSender<Event>,
    outbound: mpsc::UnboundedSender<String>,
    pong: String,
    cancel: CancellationToken,
) -> Result<()>
where
    S: AsyncRead + AsyncWrite,
{
    let _guard = cancel.clone().drop_guard();

    loop {
        let next = tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            next = reader.next() => next,
        };
        let message = match next {
            Some(Ok(message)) => message,
            Some(Err(e)) => {
                warn!("read failed: {}", e);
                return Err(e);
            }
            None => {
                info!("server closed the connection");
                return Err(ProtocolError::ConnectionReset);
            }
        };
        trace!(raw = %message, "received");

        if message.is("PING") {
            debug!("answering keep-alive");
            if outbound.send(pong.clone()).is_err() {
                return Ok(());
            }
        }
        if let Some(chat) = ChatMessage::from_message(&message) {
            let _ = events.send(Event::Chat(chat));
        }
        let _ = events.send(Event::Raw(message));
    }
}

async fn write_loop<S>(
    mut writer: FramedWrite<WriteHalf<S>, LineCodec>,
    mut queue: mpsc::UnboundedReceiver<String>,
    cancel: CancellationToken,
) -> Result<()>
where
    S: AsyncRead + AsyncWrite,
{
    let _guard = cancel.clone().drop_guard();

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = queue.recv() => match line {
                Some(line) => line,
                None => break,
            },
        };
        trace!(raw = %line, "sending");
        if let Err(e) = writer.send(line).await {
            warn!("write failed: {}", e);
            return Err(e);
        }
    }

    // Flush whatever was queued before the close.
    while let Ok(line) = queue.try_recv() {
        if let Err(e) = writer.send(line).await {
            debug!("dropping queued lines after close: {}", e);
            return Ok(());
        }
    }
    if let Err(e) = SinkExt::<String>::close(&mut writer).await {
        debug!("shutdown failed: {}", e);
    }
    Ok(())
}

async fn supervise(
    reader: JoinHandle<Result<()>>,
    writer: JoinHandle<Result<()>>,
    phase: watch::Sender<Phase>,
) -> Result<()> {
    let (read, write) = tokio::join!(reader, writer);
    phase.send_replace(Phase::Closed);

    let result = flatten(read).and(flatten(write));
    match &result {
        Ok(()) => info!("session closed"),
        Err(e) => warn!("session terminated: {}", e),
    }
    result
}

fn flatten(joined: std::result::Result<Result<()>, JoinError>) -> Result<()> {
    joined.unwrap_or_else(|e| Err(ProtocolError::Io(io::Error::new(io::ErrorKind::Other, e))))
}
