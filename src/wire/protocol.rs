//! # Wire Protocol Constants and Types
//!
//! Core message definitions for the streaming endpoint.

use serde::{Deserialize, Serialize};

/// Message kind of the subscribe handshake
pub const MSG_TYPE_SUBSCRIBE: &str = "data:subscribe";

/// Message kind of a telemetry record
pub const MSG_TYPE_DATA_UPDATE: &str = "data:update";

/// Message kind of a terminal error raised by the service
pub const MSG_TYPE_DATA_ERROR: &str = "data:error";

/// Telemetry fields requested at subscribe time, in wire order
///
/// The service answers with these values comma-joined, prefixed with a
/// millisecond timestamp.
pub const STREAM_FIELDS: &str = "speed,odometer,soc,elevation,est_heading,est_lat,est_lng,power,shift_state,range,est_range,heading";

/// Credentials used to authorize a streaming subscription
///
/// Supplied by the surrounding account client: the account identifier and
/// a currently valid session token.
#[derive(Debug, Clone)]
pub struct StreamAuth {
    /// Account identifier (typically the account email)
    pub account: String,

    /// Current session token for the account
    pub session_token: String,
}

/// Outbound subscribe handshake frame
#[derive(Debug, Serialize)]
pub struct SubscribeFrame {
    /// Always [`MSG_TYPE_SUBSCRIBE`]
    pub msg_type: &'static str,

    /// Base64 of `"{account}:{session_token}"`
    pub token: String,

    /// Comma-joined field list being requested
    pub value: &'static str,

    /// Target vehicle identifier, as text
    pub tag: String,
}

/// Inbound frame envelope
///
/// Every server message carries at least a `msg_type`; `value` is absent on
/// some control messages and defaults to empty.
#[derive(Debug, Deserialize)]
pub struct ServerFrame {
    /// Message kind, drives decoding
    pub msg_type: String,

    /// Raw payload text
    #[serde(default)]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_kind_constants() {
        assert_eq!(MSG_TYPE_SUBSCRIBE, "data:subscribe");
        assert_eq!(MSG_TYPE_DATA_UPDATE, "data:update");
        assert_eq!(MSG_TYPE_DATA_ERROR, "data:error");
    }

    #[test]
    fn test_stream_fields_order() {
        let fields: Vec<&str> = STREAM_FIELDS.split(',').collect();
        assert_eq!(fields.len(), 12);
        assert_eq!(fields[0], "speed");
        assert_eq!(fields[8], "shift_state");
        assert_eq!(fields[11], "heading");
    }

    #[test]
    fn test_server_frame_value_defaults_to_empty() {
        let frame: ServerFrame =
            serde_json::from_str(r#"{"msg_type":"control:hello"}"#).unwrap();
        assert_eq!(frame.msg_type, "control:hello");
        assert_eq!(frame.value, "");
    }

    #[test]
    fn test_server_frame_ignores_unknown_keys() {
        let frame: ServerFrame =
            serde_json::from_str(r#"{"msg_type":"data:update","value":"1,2","extra":42}"#)
                .unwrap();
        assert_eq!(frame.msg_type, "data:update");
        assert_eq!(frame.value, "1,2");
    }
}
