//! # Configuration Module
//!
//! Handles loading and validating streaming configuration from TOML files.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, StreamError};

/// Well-known streaming endpoint of the tracking service
pub const DEFAULT_ENDPOINT: &str = "wss://streaming.vn.teslamotors.com/streaming/";

/// Idle timeout between inbound messages, in seconds
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 30;

/// Streaming session configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StreamConfig {
    /// WebSocket endpoint to stream from (`ws://` or `wss://`)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Seconds of silence after which the session is terminated
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
}

// Default value functions
fn default_endpoint() -> String { DEFAULT_ENDPOINT.to_string() }
fn default_idle_timeout_secs() -> u64 { DEFAULT_IDLE_TIMEOUT_SECS }

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            idle_timeout_secs: default_idle_timeout_secs(),
        }
    }
}

impl StreamConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fleet_stream::config::StreamConfig;
    ///
    /// let config = StreamConfig::load("config/stream.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: StreamConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint is empty or not a WebSocket URL,
    /// or if the idle timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(StreamError::InvalidConfig(
                "endpoint must not be empty".to_string(),
            ));
        }

        if !self.endpoint.starts_with("ws://") && !self.endpoint.starts_with("wss://") {
            return Err(StreamError::InvalidConfig(format!(
                "endpoint must be a ws:// or wss:// URL, got: {}",
                self.endpoint
            )));
        }

        if self.idle_timeout_secs == 0 {
            return Err(StreamError::InvalidConfig(
                "idle_timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Idle timeout as a [`Duration`]
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}
