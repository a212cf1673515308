//! # Fleet Stream Library
//!
//! Stream live telemetry from a connected vehicle's tracking service.
//!
//! This library maintains a single streaming session: it opens a secure
//! WebSocket to the service's streaming endpoint, sends the subscribe
//! handshake, decodes the compact positional telemetry format into typed
//! [`TelemetrySample`] values, and delivers them one at a time to a
//! caller-supplied handler. An idle watchdog terminates the session when
//! the connection goes silent.
//!
//! ```no_run
//! use fleet_stream::{stream, StreamAuth, StreamConfig};
//!
//! #[tokio::main]
//! async fn main() -> fleet_stream::Result<()> {
//!     let auth = StreamAuth {
//!         account: "driver@example.com".to_string(),
//!         session_token: "abc123".to_string(),
//!     };
//!
//!     let cause = stream(&StreamConfig::default(), &auth, 1234567890, |sample| {
//!         println!("{} km/h at {}", sample.speed, sample.time);
//!         Ok(())
//!     })
//!     .await?;
//!
//!     println!("session ended: {:?}", cause);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod session;
pub mod telemetry;
pub mod transport;
pub mod wire;

pub use config::StreamConfig;
pub use error::{HandlerError, Result, StreamError};
pub use session::{stream, StopCause, StreamSession};
pub use telemetry::TelemetrySample;
pub use wire::protocol::StreamAuth;
