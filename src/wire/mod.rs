//! # Streaming Wire Protocol Module
//!
//! Implementation of the tracking service's streaming message format.
//!
//! This module handles:
//! - Message kind constants and frame types
//! - Subscribe handshake encoding (base64 auth token)
//! - Inbound frame decoding into typed telemetry samples

pub mod protocol;
pub mod encoder;
pub mod decoder;
