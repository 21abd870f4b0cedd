//! HTTP client for the pixel events endpoint.
//!
//! The endpoint returns a shop's full event history as a JSON array of
//! `{"eventName": ..., "eventTime": ...}` records; there is no pagination or
//! authentication. Decoding is strict so that a field-deficient record
//! surfaces [`FetchError::MalformedInput`] instead of silently miscounting
//! downstream.

use std::time::Duration;

use tracing::debug;

use crate::error::FetchError;
use crate::types::RawEvent;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for fetching a shop's event history.
pub struct EventClient {
    client: reqwest::Client,
    endpoint: String,
}

impl EventClient {
    /// Build a client for the given events endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(EventClient {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Fetch the full event history for a shop.
    ///
    /// Non-2xx responses become [`FetchError::BadStatus`]; transport failures
    /// become [`FetchError::Transport`]. The body is decoded with
    /// [`decode_events`].
    pub async fn fetch_events(&self, shop: &str) -> Result<Vec<RawEvent>, FetchError> {
        debug!(endpoint = %self.endpoint, shop, "fetching event history");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("shop", shop)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status));
        }

        let body = response.text().await?;
        let events = decode_events(&body)?;
        debug!(count = events.len(), "fetched event history");
        Ok(events)
    }
}

/// Decode an endpoint response body into event records.
///
/// The body must be a JSON array of objects carrying `eventName` and
/// `eventTime`; extra fields on a record are tolerated, missing ones are not.
pub fn decode_events(body: &str) -> Result<Vec<RawEvent>, FetchError> {
    serde_json::from_str::<Vec<RawEvent>>(body).map_err(FetchError::MalformedInput)
}
