//! ordersight server — application entry point.
//!
//! A thin operational shell: it refreshes the merged timeline on an
//! interval and logs a summary of each snapshot. Presentation lives
//! elsewhere; this binary exists to exercise the engine end to end
//! against a live operations API.

use chrono::{Duration, Utc};
use ordersight_client::{ClientConfig, OpsApiClient};
use ordersight_engine::{DashboardState, MergeOptions, RefreshConfig, RefreshCoordinator, TimelineMerger};
use tracing_subscriber::EnvFilter;

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("ordersight=info".parse().unwrap()),
        )
        .json()
        .init();

    let config = ClientConfig {
        base_url: env_or("ORDERSIGHT_API_URL", "http://127.0.0.1:8080"),
        api_token: std::env::var("ORDERSIGHT_API_TOKEN").ok(),
        timeout_secs: 30,
    };
    let refresh_secs: u64 = env_or("ORDERSIGHT_REFRESH_SECS", "60").parse().unwrap_or(60);
    let window_hours: i64 = env_or("ORDERSIGHT_WINDOW_HOURS", "24").parse().unwrap_or(24);

    let client = match OpsApiClient::new(&config) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(error = %err, "failed to construct API client");
            std::process::exit(1);
        }
    };

    tracing::info!(base_url = %config.base_url, "Starting ordersight server...");

    let coordinator = RefreshCoordinator::new(
        client.clone(),
        client,
        TimelineMerger::default(),
        RefreshConfig::default(),
    );
    let mut state = DashboardState::new();
    let mut ticker = tokio::time::interval(std::time::Duration::from_secs(refresh_secs));

    loop {
        ticker.tick().await;
        let opts = MergeOptions {
            since: Utc::now() - Duration::hours(window_hours),
            include_system_audit: true,
            search: String::new(),
        };
        let snapshot = coordinator.refresh(&opts).await;
        let seq = snapshot.seq;
        let entries = snapshot.entries.len();
        let banner = snapshot.banner.clone();
        if state.apply(snapshot) {
            match banner {
                Some(banner) => tracing::warn!(seq, entries, %banner, "timeline refreshed with degraded feeds"),
                None => tracing::info!(seq, entries, "timeline refreshed"),
            }
        }
    }
}
