//! # Error Types
//!
//! Custom error types for Fleet Stream using `thiserror`.

use thiserror::Error;

/// Error returned by a caller-supplied sample handler.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for Fleet Stream
#[derive(Debug, Error)]
pub enum StreamError {
    /// Transport connection could not be established
    #[error("connection failed: {0}")]
    Connect(String),

    /// Transport-level send/receive failure on an established connection
    #[error("transport error: {0}")]
    Transport(String),

    /// Malformed inbound frame or telemetry record
    #[error("malformed frame: {0}")]
    Frame(String),

    /// Configuration values failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration parse errors
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Caller-supplied sample handler failed
    #[error("handler error: {0}")]
    Handler(HandlerError),
}

/// Result type alias for Fleet Stream
pub type Result<T> = std::result::Result<T, StreamError>;
