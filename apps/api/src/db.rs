use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::Config;
use crate::results::store::{InMemoryResultStore, PgResultStore, ResultStore};

/// Picks the result store backend: PostgreSQL when `DATABASE_URL` is set,
/// otherwise an in-memory log that lives as long as the process.
pub async fn connect_result_store(config: &Config) -> Result<Arc<dyn ResultStore>> {
    let Some(database_url) = config.database_url.as_deref() else {
        info!("DATABASE_URL not set; quiz results are kept in memory");
        return Ok(Arc::new(InMemoryResultStore::new()));
    };

    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .context("Failed to connect to DATABASE_URL")?;
    info!("PostgreSQL connection pool established");

    let store = PgResultStore::new(pool);
    store
        .ensure_schema()
        .await
        .context("Failed to prepare quiz_results table")?;

    Ok(Arc::new(store))
}
