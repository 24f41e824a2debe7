//! Fan-out orchestration: one origin against many destinations on one date.

use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use serde::Serialize;

use gowild_core::airports::{display_name, DOMESTIC_AIRPORTS};

use crate::aggregate::aggregate_fares;
use crate::client::FrontierClient;
use crate::types::{DestinationGroup, FareRecord, RouteQuery};

/// Grouped, deduplicated results for one origin/date search, plus the echoed
/// request metadata the presentation layers need.
#[derive(Debug, Clone, Serialize)]
pub struct SearchSummary {
    pub origin: String,
    pub origin_name: String,
    pub date: NaiveDate,
    pub groups: Vec<DestinationGroup>,
}

impl SearchSummary {
    /// Total fares across all destination groups.
    #[must_use]
    pub fn fare_count(&self) -> usize {
        self.groups.iter().map(|g| g.fares.len()).sum()
    }
}

/// The domestic fan-out list for discovery mode, minus the origin itself.
#[must_use]
pub fn discovery_destinations(origin: &str) -> Vec<String> {
    let origin = origin.to_uppercase();
    DOMESTIC_AIRPORTS
        .iter()
        .filter(|code| **code != origin)
        .map(|code| (*code).to_string())
        .collect()
}

/// Checks `origin` against each destination on `date` and aggregates the
/// results.
///
/// Route queries run through a bounded worker pool of `max_concurrent`
/// in-flight requests; each worker performs its own randomized pre-request
/// pause inside the client. Per-route failures are logged and contribute an
/// empty result — nothing here aborts the batch. Results are collected in
/// input order so aggregation output is deterministic.
pub async fn search_fares(
    client: &FrontierClient,
    origin: &str,
    destinations: &[String],
    date: NaiveDate,
    max_concurrent: usize,
) -> SearchSummary {
    let origin = origin.to_uppercase();

    let routes: Vec<RouteQuery> = destinations
        .iter()
        .filter(|dest| {
            if dest.to_uppercase() == origin {
                tracing::debug!(destination = %dest, "skipping destination equal to origin");
                false
            } else {
                true
            }
        })
        .map(|dest| RouteQuery::new(&origin, dest, date))
        .collect();

    let results: Vec<(String, Vec<FareRecord>)> = stream::iter(routes)
        .map(|route| async move {
            let fares = match client.fetch_fares(&route).await {
                Ok(fares) => fares,
                Err(e) => {
                    tracing::warn!(
                        origin = %route.origin,
                        destination = %route.destination,
                        error = %e,
                        "route query failed; treating as no fares"
                    );
                    Vec::new()
                }
            };
            tracing::info!(
                origin = %route.origin,
                destination = %route.destination,
                fares = fares.len(),
                "route checked"
            );
            (route.destination, fares)
        })
        .buffered(max_concurrent.max(1))
        .collect()
        .await;

    SearchSummary {
        origin_name: display_name(&origin).to_string(),
        origin,
        date,
        groups: aggregate_fares(results),
    }
}
