//! # Inbound Frame Decoder
//!
//! Decodes one inbound message into a typed telemetry sample, a remote
//! error signal, or a no-op for unknown message kinds.

use super::protocol::{ServerFrame, MSG_TYPE_DATA_ERROR, MSG_TYPE_DATA_UPDATE};
use crate::error::{Result, StreamError};
use crate::telemetry::TelemetrySample;

/// Result of decoding one inbound frame
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// A telemetry record, ready for the caller's handler
    Sample(TelemetrySample),

    /// Terminal error raised by the service; carries the raw payload
    RemoteError(String),

    /// Unknown message kind, ignored for forward compatibility
    Ignored,
}

/// Decode a complete inbound frame
///
/// Pure function from frame text to decoded result; no side effects.
///
/// # Errors
///
/// Returns error if:
/// - The frame is not valid JSON
/// - A `data:update` record carries too few fields
pub fn decode_frame(raw: &str) -> Result<Decoded> {
    let frame: ServerFrame = serde_json::from_str(raw)
        .map_err(|e| StreamError::Frame(format!("invalid frame: {}", e)))?;

    match frame.msg_type.as_str() {
        MSG_TYPE_DATA_UPDATE => Ok(Decoded::Sample(TelemetrySample::parse(&frame.value)?)),
        MSG_TYPE_DATA_ERROR => Ok(Decoded::RemoteError(frame.value)),
        _ => Ok(Decoded::Ignored),
    }
}
