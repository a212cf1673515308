//! # Handshake Frame Encoder
//!
//! Encodes the subscribe frame sent once per connection.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::protocol::{StreamAuth, SubscribeFrame, MSG_TYPE_SUBSCRIBE, STREAM_FIELDS};
use crate::error::{Result, StreamError};

/// Encode the subscribe handshake frame
///
/// The auth token is the standard base64 encoding (with padding) of
/// `"{account}:{session_token}"`; the vehicle identifier is carried as text
/// in the `tag` field.
///
/// # Errors
///
/// Returns error if the frame cannot be serialized to JSON.
pub fn encode_subscribe_frame(auth: &StreamAuth, vehicle_id: u64) -> Result<String> {
    let token = STANDARD.encode(format!("{}:{}", auth.account, auth.session_token));

    let frame = SubscribeFrame {
        msg_type: MSG_TYPE_SUBSCRIBE,
        token,
        value: STREAM_FIELDS,
        tag: vehicle_id.to_string(),
    };

    serde_json::to_string(&frame)
        .map_err(|e| StreamError::Frame(format!("failed to encode subscribe frame: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use serde_json::Value;

    fn test_auth() -> StreamAuth {
        StreamAuth {
            account: "driver@example.com".to_string(),
            session_token: "abc123".to_string(),
        }
    }

    #[test]
    fn test_subscribe_frame_shape() {
        let encoded = encode_subscribe_frame(&test_auth(), 1234567890).unwrap();
        let frame: Value = serde_json::from_str(&encoded).unwrap();

        assert_eq!(frame["msg_type"], "data:subscribe");
        assert_eq!(frame["value"], STREAM_FIELDS);
        assert_eq!(frame["tag"], "1234567890");
    }

    #[test]
    fn test_vehicle_id_is_rendered_as_text() {
        let encoded = encode_subscribe_frame(&test_auth(), 42).unwrap();
        let frame: Value = serde_json::from_str(&encoded).unwrap();

        // The service expects a string tag, not a JSON number
        assert!(frame["tag"].is_string());
        assert_eq!(frame["tag"], "42");
    }

    #[test]
    fn test_token_is_base64_of_account_and_session_token() {
        let encoded = encode_subscribe_frame(&test_auth(), 1).unwrap();
        let frame: Value = serde_json::from_str(&encoded).unwrap();

        let token = frame["token"].as_str().unwrap();
        let decoded = STANDARD.decode(token).unwrap();
        assert_eq!(decoded, b"driver@example.com:abc123");
    }
}
