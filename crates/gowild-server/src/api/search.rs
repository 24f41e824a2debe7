//! `POST /api/v1/search`: one origin against a destination list (or the whole
//! domestic table) on one date.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use gowild_fares::{discovery_destinations, search_fares, DestinationGroup};

use crate::api::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub origin: String,
    #[serde(default)]
    pub destinations: Vec<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub search_type: SearchType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    #[default]
    Specific,
    AllDomestic,
}

#[derive(Debug, Serialize)]
pub struct SearchData {
    pub origin: String,
    pub origin_name: String,
    pub date: NaiveDate,
    /// Human-readable date, e.g. `"Thursday, August 27, 2026"`.
    pub date_formatted: String,
    pub search_type: SearchType,
    pub destinations_searched: usize,
    pub total_fares: usize,
    pub results: Vec<DestinationGroup>,
}

pub async fn run_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<SearchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let origin = request.origin.trim().to_uppercase();
    if !is_airport_code(&origin) {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            format!("origin must be a 3-letter airport code, got {origin:?}"),
        ));
    }

    let destinations = match request.search_type {
        SearchType::AllDomestic => discovery_destinations(&origin),
        SearchType::Specific => {
            if request.destinations.is_empty() {
                return Err(ApiError::new(
                    req_id.0,
                    "validation_error",
                    "destinations must be non-empty for a specific search",
                ));
            }
            if let Some(bad) = request
                .destinations
                .iter()
                .find(|d| !is_airport_code(d.trim().to_uppercase().as_str()))
            {
                return Err(ApiError::new(
                    req_id.0,
                    "validation_error",
                    format!("destination must be a 3-letter airport code, got {bad:?}"),
                ));
            }
            request.destinations
        }
    };

    let summary = search_fares(
        &state.client,
        &origin,
        &destinations,
        request.date,
        state.config.max_concurrent_routes,
    )
    .await;

    let data = SearchData {
        date_formatted: summary.date.format("%A, %B %d, %Y").to_string(),
        search_type: request.search_type,
        destinations_searched: destinations.len(),
        total_fares: summary.fare_count(),
        origin: summary.origin,
        origin_name: summary.origin_name,
        date: summary.date,
        results: summary.groups,
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data,
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}

fn is_airport_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}
