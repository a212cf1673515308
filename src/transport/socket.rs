//! Trait abstraction for the streaming socket to enable testing

use async_trait::async_trait;

use crate::error::Result;

/// Trait for message-oriented streaming socket operations
///
/// The session loop is written against this seam so tests can drive it
/// with a scripted socket instead of a live WebSocket.
#[async_trait]
pub trait StreamSocket: Send {
    /// Send one text frame
    async fn send_frame(&mut self, frame: String) -> Result<()>;

    /// Receive the next text frame; `None` when the remote closed
    async fn next_frame(&mut self) -> Result<Option<String>>;

    /// Close the connection
    async fn close(&mut self) -> Result<()>;
}
