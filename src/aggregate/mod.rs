//! Time-of-day bucketing of raw pixel events into chart-ready series.

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::types::{AggregationResult, BucketBoundaries, EventFilter, RawEvent, Series};

/// Bucket raw events into per-kind counts aligned to the boundary list.
///
/// Pure function of its inputs: the event list is never mutated and the
/// result is rebuilt from scratch on every call. Events whose time of day
/// falls before the first boundary or at/after the last one are dropped from
/// every count, as are events with timestamps chrono cannot represent. An
/// empty event list still yields the full label list with all-zero counts.
pub fn aggregate(
    events: &[RawEvent],
    boundaries: &BucketBoundaries,
    filter: &EventFilter,
) -> AggregationResult {
    let kinds = filter.selected_kinds();
    let bucket_count = boundaries.bucket_count();
    let mut counts = vec![vec![0u64; bucket_count]; kinds.len()];

    for event in events {
        let Some(time_of_day) = time_of_day(event.event_time) else {
            trace!(event_time = event.event_time, "skipping unrepresentable timestamp");
            continue;
        };
        let Some(bucket) = boundaries.bucket_index(&time_of_day) else {
            continue;
        };
        if let Some(kind) = kinds.iter().position(|kind| *kind == event.event_name) {
            counts[kind][bucket] += 1;
        }
    }

    let series = kinds
        .into_iter()
        .zip(counts)
        .map(|(label, counts)| Series {
            label: label.to_string(),
            counts,
        })
        .collect();

    AggregationResult {
        labels: boundaries.bucket_starts().to_vec(),
        series,
    }
}

/// Render an epoch-seconds timestamp as a zero-padded UTC `HH:MM:SS` string.
///
/// Fixed-width so it compares lexicographically against `HH:MM` boundaries:
/// `"10:30:00"` sorts after `"10:00"` and before `"11:00"`.
fn time_of_day(epoch_seconds: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(epoch_seconds, 0).map(|dt| dt.format("%H:%M:%S").to_string())
}
