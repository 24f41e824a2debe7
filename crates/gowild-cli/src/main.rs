mod report;

use chrono::{Duration, Local, NaiveDate};
use clap::Parser;

use gowild_fares::client::DelayBounds;
use gowild_fares::{discovery_destinations, search_fares, FrontierClient};

/// Discovery mode hits every domestic destination in one run, so it paces
/// itself more conservatively than a targeted check.
const DISCOVERY_DELAY_MIN_MS: u64 = 5_000;
const DISCOVERY_DELAY_MAX_MS: u64 = 8_000;

#[derive(Debug, Parser)]
#[command(name = "gowild-cli")]
#[command(about = "Check routes for discounted GoWild standby fares")]
struct Cli {
    /// Origin airport code (e.g. LGA)
    #[arg(short, long)]
    origin: String,

    /// Destination airport codes (e.g. SJC SFO DEN)
    #[arg(short, long, num_args = 1..)]
    destinations: Vec<String>,

    /// Days from today (default: 1 = tomorrow)
    #[arg(long, default_value_t = 1)]
    days: i64,

    /// Check both today and tomorrow
    #[arg(long)]
    both: bool,

    /// Check every domestic destination from the origin
    #[arg(long)]
    all_domestic: bool,

    /// Override the configured worker pool size
    #[arg(long)]
    concurrency: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if cli.destinations.is_empty() && !cli.all_domestic {
        anyhow::bail!("either --destinations or --all-domestic must be given");
    }

    let config = gowild_core::load_app_config_from_env()?;

    let delay = if cli.all_domestic {
        DelayBounds::new(DISCOVERY_DELAY_MIN_MS, DISCOVERY_DELAY_MAX_MS)
    } else {
        DelayBounds::new(config.delay_min_ms, config.delay_max_ms)
    };
    let client = FrontierClient::new(
        &config.booking_base_url,
        config.request_timeout_secs,
        &config.user_agent,
        delay,
    )?;
    let max_concurrent = cli.concurrency.unwrap_or(config.max_concurrent_routes);
    tracing::debug!(
        max_concurrent,
        delay_min_ms = delay.min_ms,
        delay_max_ms = delay.max_ms,
        "search pacing configured"
    );

    let destinations = if cli.all_domestic {
        discovery_destinations(&cli.origin)
    } else {
        cli.destinations.clone()
    };

    let today = Local::now().date_naive();
    let dates: Vec<NaiveDate> = if cli.both {
        vec![today, today + Duration::days(1)]
    } else {
        vec![today + Duration::days(cli.days)]
    };

    let mut summaries = Vec::new();
    for date in dates {
        report::print_search_header(&cli.origin, destinations.len(), date, cli.all_domestic);
        let summary = search_fares(&client, &cli.origin, &destinations, date, max_concurrent).await;
        report::print_summary(&summary, cli.all_domestic);
        summaries.push(summary);
    }

    if summaries.len() > 1 {
        report::print_combined_summary(&summaries);
    }

    Ok(())
}
