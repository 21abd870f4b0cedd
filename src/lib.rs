//! # Pixel Event Analytics Library
//!
//! `pixelstats` is a library for aggregating and visualizing e-commerce
//! pixel-tracking events. It fetches a shop's event history from a remote
//! endpoint, buckets events into fixed wall-clock time-of-day intervals, and
//! renders the per-kind counts as a line chart.
//!
//! ## Features
//!
//! - Fetch pixel events (`PageView`, `ViewContent`, `AddToCart`,
//!   `InitiateCheckout`) over HTTP
//! - Bucket events into configurable, validated time-of-day intervals
//! - Filter by a single event kind or aggregate all kinds at once
//! - Discard stale responses when fetches overlap
//! - Render chart-ready series as PNG line charts
//!
//! ## Example
//!
//! ```
//! use pixelstats::aggregate::aggregate;
//! use pixelstats::types::{BucketBoundaries, EventFilter, RawEvent};
//!
//! let boundaries = BucketBoundaries::new(vec![
//!     "10:00".to_string(),
//!     "11:00".to_string(),
//!     "12:00".to_string(),
//! ])
//! .unwrap();
//!
//! let events = vec![RawEvent {
//!     event_name: "PageView".to_string(),
//!     event_time: 1672569000, // 2023-01-01 10:30:00 UTC
//! }];
//!
//! let result = aggregate(&events, &boundaries, &EventFilter::All);
//! assert_eq!(result.labels, vec!["10:00", "11:00"]);
//! assert_eq!(result.series[0].counts, vec![1, 0]);
//! ```

pub mod aggregate;
pub mod app;
pub mod config;
pub mod error;
pub mod fetch;
pub mod plotting;
pub mod types;

// Re-export main types for convenience
pub use aggregate::aggregate;
pub use app::App;
pub use config::Config;
pub use error::{BoundaryError, ConfigError, FetchError};
pub use fetch::EventClient;
pub use types::{AggregationResult, BucketBoundaries, EventFilter, RawEvent, Series, EVENT_KINDS};
