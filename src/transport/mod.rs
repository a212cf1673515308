//! # Transport Module
//!
//! Handles the secure WebSocket connection to the streaming endpoint.
//!
//! This module handles:
//! - Establishing the TLS WebSocket connection
//! - Sending and receiving discrete text frames
//! - Skipping non-text frames (pings are answered by the protocol layer)
//! - Clean connection shutdown

pub mod socket;

use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info};

use crate::error::{Result, StreamError};
use self::socket::StreamSocket;

/// WebSocket transport to the streaming endpoint
///
/// Message-oriented: callers exchange discrete text frames, not a raw byte
/// stream.
pub struct WsSocket {
    /// Underlying WebSocket stream
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    /// Endpoint URL this socket is connected to
    endpoint: String,
}

impl std::fmt::Debug for WsSocket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WsSocket")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl WsSocket {
    /// Open a WebSocket connection to the given endpoint
    ///
    /// # Arguments
    ///
    /// * `endpoint` - WebSocket URL (`ws://` or `wss://`)
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Connect`] if the connection cannot be
    /// established; the session never starts in that case.
    pub async fn connect(endpoint: &str) -> Result<Self> {
        debug!("connecting to {}...", endpoint);

        let (stream, response) = connect_async(endpoint)
            .await
            .map_err(|e| StreamError::Connect(format!("failed to connect to {}: {}", endpoint, e)))?;

        info!("connected to {} (HTTP {})", endpoint, response.status());

        Ok(Self {
            stream,
            endpoint: endpoint.to_string(),
        })
    }

    /// Endpoint URL this socket is connected to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl StreamSocket for WsSocket {
    async fn send_frame(&mut self, frame: String) -> Result<()> {
        self.stream
            .send(Message::text(frame))
            .await
            .map_err(|e| StreamError::Transport(format!("failed to send frame: {}", e)))
    }

    async fn next_frame(&mut self) -> Result<Option<String>> {
        while let Some(message) = self.stream.next().await {
            match message {
                Ok(Message::Text(text)) => return Ok(Some(text.as_str().to_owned())),
                Ok(Message::Close(_)) => return Ok(None),
                // Binary, ping and pong frames carry no telemetry; pings are
                // answered by tungstenite while the stream is polled.
                Ok(_) => continue,
                Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => {
                    return Ok(None)
                }
                Err(e) => {
                    return Err(StreamError::Transport(format!("failed to read frame: {}", e)))
                }
            }
        }

        Ok(None)
    }

    async fn close(&mut self) -> Result<()> {
        match self.stream.close(None).await {
            Ok(()) => Ok(()),
            // Closing an already-closed connection is not a fault
            Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => Ok(()),
            Err(e) => Err(StreamError::Transport(format!(
                "failed to close connection: {}",
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = WsSocket::connect("not a url").await;

        assert!(result.is_err());
        match result.unwrap_err() {
            StreamError::Connect(msg) => assert!(msg.contains("not a url")),
            other => panic!("expected Connect error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connect_refused_is_connect_error() {
        // Port 9 (discard) is almost certainly closed
        let result = WsSocket::connect("ws://127.0.0.1:9/streaming/").await;
        assert!(matches!(result, Err(StreamError::Connect(_))));
    }
}
