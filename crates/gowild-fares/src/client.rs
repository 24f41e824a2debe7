//! HTTP client for the booking site's internal flight-select endpoint.

use std::time::Duration;

use rand::Rng;
use reqwest::Client;

use crate::error::FareError;
use crate::extract::extract_flight_data;
use crate::normalize::normalize_fares;
use crate::types::{FareRecord, RouteQuery};

/// Randomized pre-request pause bounds in milliseconds.
///
/// The pause runs once per `fetch_fares` call, per worker — overall pacing is
/// the product of pool size and this delay. A policy knob, not a correctness
/// requirement; `DelayBounds::none()` disables it for tests.
#[derive(Debug, Clone, Copy)]
pub struct DelayBounds {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayBounds {
    #[must_use]
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    #[must_use]
    pub fn none() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }
}

/// Client for one-way fare lookups against the booking endpoint.
///
/// An explicitly constructed, immutable value — the session, identity headers
/// and pacing policy all live here and get passed to whoever runs queries; no
/// module-level session state. Cheap to share by reference across workers;
/// the inner `reqwest::Client` is already connection-pooled and thread-safe.
pub struct FrontierClient {
    client: Client,
    base_url: String,
    delay: DelayBounds,
}

impl FrontierClient {
    /// Creates a client with the configured endpoint, timeout, browser
    /// identity and pre-request pacing.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::InvalidBaseUrl`] if `base_url` is not a valid URL
    /// base, or [`FareError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        delay: DelayBounds,
    ) -> Result<Self, FareError> {
        reqwest::Url::parse(base_url).map_err(|e| FareError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static("en-US,en;q=0.5"),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            delay,
        })
    }

    /// Runs one route/date lookup and returns its qualifying fares.
    ///
    /// Pauses for the configured random interval, fetches the search page,
    /// and pushes the body through extraction and normalization. A non-success
    /// status degrades to an empty vec with a warning — from the caller's
    /// side it is indistinguishable from "no fares", which is the intended
    /// contract.
    ///
    /// # Errors
    ///
    /// Returns [`FareError::Http`] on network-level failure (timeout,
    /// connection error). Orchestration contains these per route.
    pub async fn fetch_fares(&self, route: &RouteQuery) -> Result<Vec<FareRecord>, FareError> {
        self.pre_request_pause().await;

        let url = self.search_url(route);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(
                origin = %route.origin,
                destination = %route.destination,
                status = status.as_u16(),
                "booking endpoint returned non-success status; treating as no fares"
            );
            return Ok(Vec::new());
        }

        let body = response.text().await?;
        let Some(data) = extract_flight_data(&body) else {
            tracing::debug!(
                origin = %route.origin,
                destination = %route.destination,
                "no embedded flight payload in response"
            );
            return Ok(Vec::new());
        };

        Ok(normalize_fares(&data))
    }

    /// Builds the search URL for one route/date.
    ///
    /// The endpoint wants the date as `Mon-DD,-YYYY` with every hyphen
    /// replaced by an encoded space — e.g. `Aug%2027,%202026`. An artifact of
    /// the endpoint's expected format, preserved exactly.
    fn search_url(&self, route: &RouteQuery) -> String {
        let date = route.date.format("%b-%d,-%Y").to_string().replace('-', "%20");
        format!(
            "{base}?o1={origin}&d1={destination}&dd1={date}&ADT=1&mon=true&promo=",
            base = self.base_url,
            origin = route.origin,
            destination = route.destination,
        )
    }

    async fn pre_request_pause(&self) {
        let DelayBounds { min_ms, max_ms } = self.delay;
        if max_ms == 0 {
            return;
        }
        // Pick the pause before awaiting: ThreadRng is not Send.
        let pause_ms = {
            let mut rng = rand::rng();
            rng.random_range(min_ms..=max_ms.max(min_ms))
        };
        tokio::time::sleep(Duration::from_millis(pause_ms)).await;
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
