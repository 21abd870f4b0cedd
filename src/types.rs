//! # Common Types
//!
//! This module contains the common types used throughout the application for
//! representing pixel-tracking events, bucket boundaries, and chart-ready
//! aggregation results.

use serde::{Deserialize, Serialize};

use crate::error::BoundaryError;

/// The canonical pixel event kinds, in the order series are emitted when the
/// "All events" filter is selected.
pub const EVENT_KINDS: [&str; 4] = ["PageView", "ViewContent", "AddToCart", "InitiateCheckout"];

/// A single tracked pixel event as returned by the events endpoint.
///
/// `event_time` is a Unix epoch timestamp in seconds. Records are decoded
/// strictly: a payload record missing either field is rejected at the fetch
/// boundary rather than counted as zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// The event kind, e.g. `"PageView"`
    #[serde(rename = "eventName")]
    pub event_name: String,
    /// Unix epoch timestamp in seconds
    #[serde(rename = "eventTime")]
    pub event_time: i64,
}

/// The user's selection of which event kind(s) to aggregate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventFilter {
    /// The "All events" sentinel: aggregate every canonical kind.
    All,
    /// A single event kind by name. Names outside the canonical set are
    /// permitted and simply produce an all-zero series when no data matches.
    Kind(String),
}

impl EventFilter {
    /// The user-facing label for the "all kinds" sentinel.
    pub const ALL_LABEL: &'static str = "All events";

    /// Resolve the filter to the concrete list of kinds to aggregate.
    pub fn selected_kinds(&self) -> Vec<&str> {
        match self {
            EventFilter::All => EVENT_KINDS.to_vec(),
            EventFilter::Kind(name) => vec![name.as_str()],
        }
    }
}

impl From<&str> for EventFilter {
    fn from(value: &str) -> Self {
        if value == Self::ALL_LABEL {
            EventFilter::All
        } else {
            EventFilter::Kind(value.to_string())
        }
    }
}

impl std::fmt::Display for EventFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventFilter::All => f.write_str(Self::ALL_LABEL),
            EventFilter::Kind(name) => f.write_str(name),
        }
    }
}

/// A validated, strictly increasing list of `"HH:MM"` bucket edges.
///
/// The fixed-width zero-padded format makes lexicographic string comparison
/// equivalent to chronological comparison, which is how bucket membership is
/// decided. The final boundary is a terminator: it closes the last bucket and
/// produces no bucket of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketBoundaries(Vec<String>);

impl BucketBoundaries {
    /// Validate and wrap a boundary list.
    ///
    /// Requires at least two entries, each formatted as zero-padded 24-hour
    /// `HH:MM`, in strictly increasing order.
    pub fn new(boundaries: Vec<String>) -> Result<Self, BoundaryError> {
        if boundaries.len() < 2 {
            return Err(BoundaryError::TooFew(boundaries.len()));
        }
        for boundary in &boundaries {
            if !is_valid_time_of_day(boundary) {
                return Err(BoundaryError::BadFormat(boundary.clone()));
            }
        }
        for pair in boundaries.windows(2) {
            if pair[0] >= pair[1] {
                return Err(BoundaryError::NotIncreasing(pair[0].clone(), pair[1].clone()));
            }
        }
        Ok(BucketBoundaries(boundaries))
    }

    /// Hourly boundaries from `00:00` through `23:00` (23 buckets).
    pub fn hourly() -> Self {
        let boundaries = (0..24).map(|hour| format!("{hour:02}:00")).collect();
        BucketBoundaries(boundaries)
    }

    /// All boundaries, including the terminating one.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The bucket start labels: every boundary except the last.
    pub fn bucket_starts(&self) -> &[String] {
        &self.0[..self.0.len() - 1]
    }

    /// Number of buckets (one fewer than the number of boundaries).
    pub fn bucket_count(&self) -> usize {
        self.0.len() - 1
    }

    /// Locate the bucket containing the given time-of-day string, comparing
    /// lexicographically against the half-open intervals `[b[i], b[i+1])`.
    ///
    /// Returns `None` for times before the first boundary or at/after the
    /// last one; those events are dropped from every count.
    pub fn bucket_index(&self, time_of_day: &str) -> Option<usize> {
        self.0
            .windows(2)
            .position(|pair| pair[0].as_str() <= time_of_day && time_of_day < pair[1].as_str())
    }
}

fn is_valid_time_of_day(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let hours = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let minutes = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    hours < 24 && minutes < 60
}

/// One named sequence of per-bucket counts, corresponding to one event kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Series {
    /// The event kind this series counts
    pub label: String,
    /// One count per bucket, aligned with the result's label order
    pub counts: Vec<u64>,
}

/// The chart-ready output of aggregation: bucket start labels plus one
/// [`Series`] per selected event kind.
///
/// Recreated fresh on every aggregation call; never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AggregationResult {
    /// Bucket start times (every boundary except the terminator)
    pub labels: Vec<String>,
    /// One series per selected event kind, in selection order
    pub series: Vec<Series>,
}

impl AggregationResult {
    /// Largest single bucket count across all series, used for chart scaling.
    pub fn max_count(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|series| series.counts.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn boundaries(values: &[&str]) -> Result<BucketBoundaries, BoundaryError> {
        BucketBoundaries::new(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!(EventFilter::from("All events"), EventFilter::All);
        assert_eq!(
            EventFilter::from("AddToCart"),
            EventFilter::Kind("AddToCart".to_string())
        );
    }

    #[test]
    fn test_all_filter_resolves_canonical_kinds_in_order() {
        assert_eq!(
            EventFilter::All.selected_kinds(),
            vec!["PageView", "ViewContent", "AddToCart", "InitiateCheckout"]
        );
    }

    #[test]
    fn test_boundaries_require_two_entries() {
        assert!(matches!(boundaries(&["10:00"]), Err(BoundaryError::TooFew(1))));
    }

    #[test]
    fn test_boundaries_reject_bad_format() {
        for bad in ["1000", "24:00", "10:60", "9:00", "10:0a"] {
            assert!(
                matches!(boundaries(&[bad, "23:59"]), Err(BoundaryError::BadFormat(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_boundaries_must_strictly_increase() {
        assert!(matches!(
            boundaries(&["10:00", "10:00"]),
            Err(BoundaryError::NotIncreasing(_, _))
        ));
        assert!(matches!(
            boundaries(&["10:00", "11:00", "09:00"]),
            Err(BoundaryError::NotIncreasing(_, _))
        ));
    }

    #[test]
    fn test_bucket_index_half_open() {
        let boundaries = boundaries(&["10:00", "11:00", "12:00"]).unwrap();
        assert_eq!(boundaries.bucket_index("10:00:00"), Some(0));
        assert_eq!(boundaries.bucket_index("10:59:59"), Some(0));
        assert_eq!(boundaries.bucket_index("11:00:00"), Some(1));
        assert_eq!(boundaries.bucket_index("09:59:59"), None);
        assert_eq!(boundaries.bucket_index("12:00:00"), None);
    }

    #[test]
    fn test_hourly_boundaries() {
        let hourly = BucketBoundaries::hourly();
        assert_eq!(hourly.as_slice().len(), 24);
        assert_eq!(hourly.bucket_count(), 23);
        assert_eq!(hourly.as_slice().first().unwrap(), "00:00");
        assert_eq!(hourly.as_slice().last().unwrap(), "23:00");
    }
}
