//! Error types for the fetch and configuration boundaries.
//!
//! Aggregation itself is infallible; everything that can go wrong happens
//! while fetching/decoding the event payload or loading configuration.

use thiserror::Error;

/// Failure while fetching or decoding the event history.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Endpoint unreachable, timeout, or other transport-level failure
    #[error("transport error talking to the events endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status
    #[error("events endpoint returned status {0}")]
    BadStatus(reqwest::StatusCode),

    /// The payload was not a JSON array of event records, or a record was
    /// missing a required field
    #[error("malformed event payload: {0}")]
    MalformedInput(#[source] serde_json::Error),
}

/// A bucket-boundary list that cannot define meaningful buckets.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// Fewer than two boundaries, so no bucket can be formed
    #[error("need at least 2 bucket boundaries, got {0}")]
    TooFew(usize),

    /// Not a zero-padded 24-hour `HH:MM` string
    #[error("bucket boundary {0:?} is not a zero-padded HH:MM time of day")]
    BadFormat(String),

    /// Adjacent boundaries out of order or equal
    #[error("bucket boundaries must be strictly increasing, got {0:?} then {1:?}")]
    NotIncreasing(String, String),
}

/// Failure while loading the deployment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Boundaries(#[from] BoundaryError),
}
