mod catalog;
mod config;
mod db;
mod errors;
mod matching;
mod models;
mod quiz;
mod results;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{CategoryCatalog, ProgramCatalog};
use crate::config::Config;
use crate::db::connect_result_store;
use crate::matching::build_strategy;
use crate::quiz::questions::range_warnings;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Major Matcher v{}", env!("CARGO_PKG_VERSION"));

    // Catalogs are fixed for the process lifetime
    let catalog = ProgramCatalog::seeded();
    let categories = CategoryCatalog::seeded();
    info!(
        "Catalog loaded: {} programs, {} categories",
        catalog.all().len(),
        categories.all().len()
    );

    let strategy = build_strategy(config.match_strategy, &catalog, &categories);
    info!("Matching strategy: {}", strategy.name());
    for warning in range_warnings(strategy.questions()) {
        warn!("Question bank: {warning}");
    }

    let results = connect_result_store(&config).await?;

    // Build app state
    let state = AppState {
        catalog: Arc::new(catalog),
        strategy,
        results,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
