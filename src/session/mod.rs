//! # Streaming Session Module
//!
//! Owns one streaming session from connect to teardown.
//!
//! This module handles:
//! - Establishing the transport connection (supervisor)
//! - Sending the subscribe handshake
//! - Driving the receive loop and re-arming the idle watchdog
//! - Dispatching decoded samples to the caller's handler
//! - Deterministic teardown on every exit path

pub mod watchdog;

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::StreamConfig;
use crate::error::{HandlerError, Result, StreamError};
use crate::telemetry::TelemetrySample;
use crate::transport::socket::StreamSocket;
use crate::transport::WsSocket;
use crate::wire::decoder::{decode_frame, Decoded};
use crate::wire::encoder::encode_subscribe_frame;
use crate::wire::protocol::StreamAuth;
use watchdog::Watchdog;

/// Why a session ended on one of its designed termination paths
///
/// Faults (connection, transport, decode, handler) surface as
/// [`StreamError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopCause {
    /// The remote end closed the connection
    RemoteClosed,

    /// The service sent a `data:error` frame; carries its raw payload
    RemoteError(String),

    /// No message arrived within the idle timeout
    IdleTimeout,

    /// The caller requested a stop through the cancellation token
    Stopped,
}

/// One streaming session
///
/// Created by [`StreamSession::connect`] (or [`StreamSession::new`] with a
/// custom socket), consumed by [`StreamSession::run`]. A session is not
/// reusable; reconnecting means creating a new one.
pub struct StreamSession<S: StreamSocket> {
    /// Transport connection, sole reader is the session task
    socket: S,
    /// Prebuilt subscribe handshake frame
    subscribe_frame: String,
    /// Silence bound for the idle watchdog
    idle_timeout: Duration,
    /// External stop signal
    cancel: CancellationToken,
}

impl StreamSession<WsSocket> {
    /// Connect to the streaming endpoint and prepare a session
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the transport
    /// connection cannot be established. The session state machine is
    /// never entered on a connection fault.
    pub async fn connect(
        config: &StreamConfig,
        auth: &StreamAuth,
        vehicle_id: u64,
    ) -> Result<Self> {
        config.validate()?;

        let socket = WsSocket::connect(&config.endpoint).await?;
        Self::new(socket, config, auth, vehicle_id)
    }
}

impl<S: StreamSocket> StreamSession<S> {
    /// Build a session over an already-established socket
    ///
    /// # Errors
    ///
    /// Returns error if the subscribe frame cannot be encoded.
    pub fn new(
        socket: S,
        config: &StreamConfig,
        auth: &StreamAuth,
        vehicle_id: u64,
    ) -> Result<Self> {
        Ok(Self {
            socket,
            subscribe_frame: encode_subscribe_frame(auth, vehicle_id)?,
            idle_timeout: config.idle_timeout(),
            cancel: CancellationToken::new(),
        })
    }

    /// Token that stops the session from outside
    ///
    /// Cancelling it unblocks a pending read and ends the session with
    /// [`StopCause::Stopped`].
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Run the session until it terminates
    ///
    /// Sends the subscribe handshake, then delivers every decoded sample
    /// to `handler`, strictly sequentially in arrival order. Returns the
    /// termination cause, or the first fault.
    ///
    /// The transport is closed exactly once before this method returns,
    /// regardless of which terminal path was taken.
    ///
    /// # Errors
    ///
    /// Returns error on transport faults, malformed frames, or when the
    /// handler itself fails. Teardown has already run when the error
    /// surfaces.
    pub async fn run<F>(mut self, mut handler: F) -> Result<StopCause>
    where
        F: FnMut(TelemetrySample) -> std::result::Result<(), HandlerError>,
    {
        let outcome = self.drive(&mut handler).await;

        // Teardown runs on every exit path, including faults
        if let Err(e) = self.socket.close().await {
            debug!("error while closing transport: {}", e);
        }

        match &outcome {
            Ok(cause) => info!("session stopped: {:?}", cause),
            Err(e) => warn!("session failed: {}", e),
        }

        outcome
    }

    /// Receive loop: handshake, then frames until a terminal condition
    async fn drive<F>(&mut self, handler: &mut F) -> Result<StopCause>
    where
        F: FnMut(TelemetrySample) -> std::result::Result<(), HandlerError>,
    {
        debug!("[send] {}", self.subscribe_frame);
        self.socket.send_frame(self.subscribe_frame.clone()).await?;

        let (mut watchdog, mut expired_rx) = Watchdog::new(self.idle_timeout);
        watchdog.arm();

        let cancel = self.cancel.clone();

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("stop requested");
                    return Ok(StopCause::Stopped);
                }

                _ = expired_rx.recv() => {
                    debug!("read timeout");
                    return Ok(StopCause::IdleTimeout);
                }

                inbound = self.socket.next_frame() => {
                    let Some(raw) = inbound? else {
                        debug!("connection closed by remote");
                        return Ok(StopCause::RemoteClosed);
                    };

                    // Re-arm before dispatch: the watchdog detects silence,
                    // so error frames count as traffic too. A fire that
                    // raced with this frame is stale once re-armed.
                    watchdog.arm();
                    while expired_rx.try_recv().is_ok() {}

                    debug!("[recv] {}", raw);

                    match decode_frame(&raw)? {
                        Decoded::Sample(sample) => {
                            handler(sample).map_err(StreamError::Handler)?;
                        }
                        Decoded::RemoteError(detail) => {
                            warn!("[err] {}", detail);
                            return Ok(StopCause::RemoteError(detail));
                        }
                        Decoded::Ignored => {}
                    }
                }
            }
        }
    }
}

/// Open a session and stream telemetry until it terminates
///
/// One-call entry point: connects, subscribes, and invokes `handler` once
/// per decoded sample.
///
/// # Examples
///
/// ```no_run
/// use fleet_stream::{stream, StreamAuth, StreamConfig};
///
/// # #[tokio::main]
/// # async fn main() -> fleet_stream::Result<()> {
/// let auth = StreamAuth {
///     account: "driver@example.com".to_string(),
///     session_token: "abc123".to_string(),
/// };
///
/// let cause = stream(&StreamConfig::default(), &auth, 1234567890, |sample| {
///     println!("{:?}", sample);
///     Ok(())
/// })
/// .await?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns error on connection faults, transport faults, malformed frames,
/// or handler failures.
pub async fn stream<F>(
    config: &StreamConfig,
    auth: &StreamAuth,
    vehicle_id: u64,
    handler: F,
) -> Result<StopCause>
where
    F: FnMut(TelemetrySample) -> std::result::Result<(), HandlerError>,
{
    let session = StreamSession::connect(config, auth, vehicle_id).await?;
    session.run(handler).await
}
