/// Space Explorer service entry point
mod catalog;
mod clients;
mod config;
mod detail;
mod domain;
mod errors;
mod handlers;
mod orbit;
mod routes;
mod services;
mod utils;
mod view;

use crate::clients::BodiesClient;
use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::routes::build_router;
use crate::services::ExplorerService;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    let client = BodiesClient::new(
        &config.bodies_api_url,
        Duration::from_secs(config.http_timeout_seconds),
    )?;
    let explorer = Arc::new(ExplorerService::new(
        client,
        config.catalog_limit,
        config.orbit,
    ));

    start_catalog_refresh(explorer.clone(), config.catalog_refresh_seconds);

    let app = build_router(AppState { explorer });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("space_explorer listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Keep the dashboard catalog fresh in the background
fn start_catalog_refresh(explorer: Arc<ExplorerService>, interval: u64) {
    tokio::spawn(async move {
        info!("Starting catalog refresh task (interval: {}s)", interval);
        loop {
            if let Err(e) = explorer.refresh_catalog().await {
                error!("Catalog refresh error: {}", e);
            }
            tokio::time::sleep(Duration::from_secs(interval.max(1))).await;
        }
    });
}
