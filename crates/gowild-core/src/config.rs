use crate::app_config::AppConfig;
use crate::ConfigError;

/// Identify ourselves the way the booking site expects a browser to.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const DEFAULT_BOOKING_BASE_URL: &str = "https://booking.flyfrontier.com/Flight/InternalSelect";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let bind_addr = parse_addr("GOWILD_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = or_default("GOWILD_LOG_LEVEL", "info");
    let booking_base_url = or_default("GOWILD_BOOKING_BASE_URL", DEFAULT_BOOKING_BASE_URL);
    let request_timeout_secs = parse_u64("GOWILD_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("GOWILD_USER_AGENT", DEFAULT_USER_AGENT);
    let max_concurrent_routes = parse_usize("GOWILD_MAX_CONCURRENT_ROUTES", "5")?;
    let delay_min_ms = parse_u64("GOWILD_DELAY_MIN_MS", "1000")?;
    let delay_max_ms = parse_u64("GOWILD_DELAY_MAX_MS", "2000")?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        booking_base_url,
        request_timeout_secs,
        user_agent,
        max_concurrent_routes,
        delay_min_ms,
        delay_max_ms,
    })
}
