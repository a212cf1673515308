//! # Telemetry Sample Types
//!
//! Typed representation of one positional telemetry record.
//!
//! This module handles:
//! - The fixed-arity [`TelemetrySample`] record
//! - Parsing the comma-separated wire payload into typed fields
//! - Lenient numeric coercion (malformed values default, the frame survives)

use chrono::{DateTime, TimeZone, Utc};

use crate::error::{Result, StreamError};

/// Number of comma-separated fields in a telemetry record
///
/// The service prepends a millisecond timestamp to the twelve requested
/// fields, so every `data:update` payload carries 13 positional values.
pub const SAMPLE_FIELD_COUNT: usize = 13;

/// One decoded telemetry sample
///
/// Produced per inbound `data:update` frame. Numeric fields default to 0.0
/// when the source field is empty or non-numeric; `shift_state` is raw text
/// and may be empty (the vehicle is parked).
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySample {
    /// Sample instant, truncated to whole seconds
    pub time: DateTime<Utc>,

    /// Speed in mph
    pub speed: f64,

    /// Odometer reading in miles
    pub odometer: f64,

    /// Battery state of charge (0-100%)
    pub soc: f64,

    /// Elevation in meters
    pub elevation: f64,

    /// Estimated heading in degrees
    pub est_heading: f64,

    /// Estimated latitude in degrees
    pub est_lat: f64,

    /// Estimated longitude in degrees
    pub est_lng: f64,

    /// Drivetrain power in kW (negative while regenerating)
    pub power: f64,

    /// Shift state (P, R, N, D), empty when unavailable
    pub shift_state: String,

    /// Rated range in miles
    pub range: f64,

    /// Estimated range in miles
    pub est_range: f64,

    /// Heading in degrees
    pub heading: f64,
}

impl TelemetrySample {
    /// Parse a telemetry record from a `data:update` payload
    ///
    /// The payload is split on `,` and mapped positionally:
    /// `{time_ms, speed, odometer, soc, elevation, est_heading, est_lat,
    /// est_lng, power, shift_state, range, est_range, heading}`.
    /// Fields beyond index 12 are ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the record carries fewer than
    /// [`SAMPLE_FIELD_COUNT`] fields. Malformed values within a
    /// well-formed record never fail the frame; they coerce to defaults.
    pub fn parse(payload: &str) -> Result<Self> {
        let fields: Vec<&str> = payload.split(',').collect();

        if fields.len() < SAMPLE_FIELD_COUNT {
            return Err(StreamError::Frame(format!(
                "telemetry record has {} fields, expected {}",
                fields.len(),
                SAMPLE_FIELD_COUNT
            )));
        }

        Ok(Self {
            time: epoch_millis_to_time(fields[0]),
            speed: lenient_f64(fields[1]),
            odometer: lenient_f64(fields[2]),
            soc: lenient_f64(fields[3]),
            elevation: lenient_f64(fields[4]),
            est_heading: lenient_f64(fields[5]),
            est_lat: lenient_f64(fields[6]),
            est_lng: lenient_f64(fields[7]),
            power: lenient_f64(fields[8]),
            shift_state: fields[9].to_string(),
            range: lenient_f64(fields[10]),
            est_range: lenient_f64(fields[11]),
            heading: lenient_f64(fields[12]),
        })
    }
}

/// Parse a numeric field, defaulting to 0.0 on empty or malformed input
fn lenient_f64(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Convert a millisecond epoch field to a UTC timestamp, truncated to
/// whole seconds. Malformed input maps to the Unix epoch.
fn epoch_millis_to_time(raw: &str) -> DateTime<Utc> {
    let millis: i64 = raw.trim().parse().unwrap_or(0);
    Utc.timestamp_opt(millis / 1000, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
