mod search;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use gowild_core::AppConfig;
use gowild_fares::FrontierClient;

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<FrontierClient>,
    pub config: Arc<AppConfig>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/search", post(search::run_search))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(_state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData { status: "ok" },
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::json;
    use tower::ServiceExt;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use gowild_fares::client::DelayBounds;

    fn test_state(base_url: &str) -> AppState {
        let config = AppConfig {
            bind_addr: "127.0.0.1:0".parse().expect("valid addr"),
            log_level: "info".to_string(),
            booking_base_url: base_url.to_string(),
            request_timeout_secs: 5,
            user_agent: "gowild-test/0.1".to_string(),
            max_concurrent_routes: 2,
            delay_min_ms: 0,
            delay_max_ms: 0,
        };
        let client = FrontierClient::new(
            &config.booking_base_url,
            config.request_timeout_secs,
            &config.user_agent,
            DelayBounds::none(),
        )
        .expect("build test client");
        AppState {
            client: Arc::new(client),
            config: Arc::new(config),
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        serde_json::from_slice(&bytes).expect("json parse")
    }

    #[tokio::test]
    async fn health_returns_ok_envelope() {
        let app = build_app(test_state("http://localhost:1"));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["status"].as_str(), Some("ok"));
        assert!(json["meta"]["request_id"].is_string());
    }

    #[tokio::test]
    async fn incoming_request_id_is_echoed() {
        let app = build_app(test_state("http://localhost:1"));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .header("x-request-id", "req-abc")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(
            response.headers().get("x-request-id").map(|v| v.to_str().expect("ascii")),
            Some("req-abc")
        );
        let json = body_json(response).await;
        assert_eq!(json["meta"]["request_id"].as_str(), Some("req-abc"));
    }

    #[test]
    fn api_error_validation_error_maps_to_bad_request() {
        let response = ApiError::new("req-1", "validation_error", "invalid input").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    fn search_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/search")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn search_rejects_malformed_origin() {
        let app = build_app(test_state("http://localhost:1"));
        let response = app
            .oneshot(search_request(json!({
                "origin": "NEWARK",
                "destinations": ["DEN"],
                "date": "2026-08-27",
            })))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"].as_str(), Some("validation_error"));
    }

    #[tokio::test]
    async fn search_rejects_specific_search_without_destinations() {
        let app = build_app(test_state("http://localhost:1"));
        let response = app
            .oneshot(search_request(json!({
                "origin": "LGA",
                "date": "2026-08-27",
            })))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_returns_grouped_fares() {
        let server = MockServer::start().await;

        let payload = json!({
            "journeys": [{ "flights": [{
                "isGoWildFareEnabled": true,
                "goWildFare": 49.0,
                "goWildFareSeatsRemaining": 4,
                "stopsText": "Nonstop",
                "duration": "4h 02m",
                "legs": [{
                    "departureStation": "LGA",
                    "arrivalStation": "DEN",
                    "departureDateFormatted": "6:10 AM",
                    "arrivalDateFormatted": "8:12 AM",
                    "flightNumber": "F9 210",
                    "aircraftType": "A320",
                }]
            }] }]
        });
        let page = format!(
            "<html><script type=\"text/javascript\">var flightData = {};</script></html>",
            payload.to_string().replace('"', "&quot;")
        );

        Mock::given(method("GET"))
            .and(query_param("o1", "LGA"))
            .and(query_param("d1", "DEN"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page))
            .mount(&server)
            .await;

        let app = build_app(test_state(&server.uri()));
        let response = app
            .oneshot(search_request(json!({
                "origin": "lga",
                "destinations": ["DEN"],
                "date": "2026-08-27",
            })))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let data = &json["data"];
        assert_eq!(data["origin"].as_str(), Some("LGA"));
        assert_eq!(data["origin_name"].as_str(), Some("LaGuardia, NY"));
        assert_eq!(data["date_formatted"].as_str(), Some("Thursday, August 27, 2026"));
        assert_eq!(data["total_fares"].as_u64(), Some(1));

        let groups = data["results"].as_array().expect("results array");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0]["destination"].as_str(), Some("DEN"));
        let fare = &groups[0]["fares"][0];
        assert_eq!(fare["flight_number"].as_str(), Some("F9 210"));
        assert_eq!(fare["seats"].as_i64(), Some(4));
    }
}
