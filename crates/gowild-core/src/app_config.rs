use std::net::SocketAddr;

/// Runtime configuration shared by the CLI and the server.
///
/// Everything here is a knob with a working default; nothing is required at
/// startup. The scraper settings are handed to `FrontierClient` as plain
/// values — there is no ambient/global session state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL of the booking search endpoint. Overridable so tests can
    /// point the client at a local mock server.
    pub booking_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Bounded worker pool size for route fan-out.
    pub max_concurrent_routes: usize,
    /// Randomized pre-request pause bounds, per worker.
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
}
