//! Launch Dashboard HTTP Server Binary
//!
//! Loads the launch table, builds the router and serves the dashboard.
//!
//! # Usage
//!
//! ```bash
//! LAUNCH_DATA_PATH=data/spacex_launch_dash.csv cargo run --bin launch-dashboard-server
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_HOST`: Server host (default: 127.0.0.1)
//! - `DASHBOARD_PORT`: Server port (default: 8050)
//! - `LAUNCH_DATA_PATH`: Launch table (default: spacex_launch_dash.csv)
//! - `RUST_LOG`: Log filter, e.g. `debug` or `launch_dashboard=debug` (default: info)

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use launch_dashboard::config::DashboardConfig;
use launch_dashboard::http::{create_router, AppState};
use launch_dashboard::io::LaunchLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting launch dashboard server");

    let config = DashboardConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let dataset = LaunchLoader::load_from_file(&config.data_path)
        .with_context(|| format!("loading launch data from {}", config.data_path.display()))?;
    info!(
        "Dataset ready: {} records, payload {}..{} kg",
        dataset.len(),
        dataset.payload_bounds().min,
        dataset.payload_bounds().max
    );
    dataset.reconcile_sites().log_warnings();

    let app = create_router(AppState::new(Arc::new(dataset)));

    let addr = config.socket_addr().map_err(|e| anyhow::anyhow!(e))?;
    info!("Dashboard available at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
