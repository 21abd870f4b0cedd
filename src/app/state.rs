//! Dashboard state and fetch-cycle coordination.

use tracing::{debug, warn};

use crate::aggregate::aggregate;
use crate::error::FetchError;
use crate::types::{AggregationResult, BucketBoundaries, EventFilter, RawEvent};

/// Main application state.
///
/// Every fetch is tagged with a generation number issued by [`App::begin_fetch`].
/// Issuing a new generation supersedes all in-flight fetches, so a slow
/// response for an old filter selection can never overwrite the result for
/// the current one; [`App::apply_fetch`] discards superseded outcomes. The
/// displayed chart therefore always reflects the most recently requested
/// fetch, not whichever response happened to resolve last.
pub struct App {
    /// The currently selected event filter
    pub selected_filter: EventFilter,
    /// Validated bucket edges from configuration
    pub boundaries: BucketBoundaries,
    /// Result of the most recent successful fetch-and-aggregate cycle
    pub latest_result: Option<AggregationResult>,
    /// Human-readable description of the most recent fetch failure
    pub last_error: Option<String>,
    /// Whether a fetch is currently in flight
    pub is_fetching: bool,
    current_generation: u64,
}

impl App {
    pub fn new(boundaries: BucketBoundaries) -> Self {
        App {
            selected_filter: EventFilter::All,
            boundaries,
            latest_result: None,
            last_error: None,
            is_fetching: false,
            current_generation: 0,
        }
    }

    /// Change the selected filter. Callers trigger a fresh fetch afterwards;
    /// the generation check takes care of any fetch still in flight for the
    /// old selection.
    pub fn select_filter(&mut self, filter: EventFilter) {
        if self.selected_filter != filter {
            debug!(filter = %filter, "filter selection changed");
            self.selected_filter = filter;
        }
    }

    /// Start a new fetch cycle, superseding any in-flight one.
    ///
    /// Returns the generation tag to pass back to [`App::apply_fetch`].
    pub fn begin_fetch(&mut self) -> u64 {
        self.current_generation += 1;
        self.is_fetching = true;
        self.current_generation
    }

    /// Apply the outcome of a fetch cycle.
    ///
    /// Returns `true` when the outcome produced a new aggregation result.
    /// Outcomes for superseded generations are discarded outright. A fetch
    /// failure records the error and keeps the previous result on display;
    /// no failure here is fatal.
    pub fn apply_fetch(
        &mut self,
        generation: u64,
        outcome: Result<Vec<RawEvent>, FetchError>,
    ) -> bool {
        if generation != self.current_generation {
            debug!(
                generation,
                current = self.current_generation,
                "discarding stale fetch response"
            );
            return false;
        }
        self.is_fetching = false;

        match outcome {
            Ok(events) => {
                self.latest_result =
                    Some(aggregate(&events, &self.boundaries, &self.selected_filter));
                self.last_error = None;
                true
            }
            Err(e) => {
                warn!(error = %e, "fetch cycle failed, keeping previous result");
                self.last_error = Some(e.to_string());
                false
            }
        }
    }

    /// The result to hand to the chart presenter: the latest aggregation, or
    /// a freshly built empty one (full labels, zero counts) before the first
    /// fetch completes.
    pub fn chart_data(&self) -> AggregationResult {
        match &self.latest_result {
            Some(result) => result.clone(),
            None => aggregate(&[], &self.boundaries, &self.selected_filter),
        }
    }
}
