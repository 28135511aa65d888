// Connection pool for the metadata store
use crate::infrastructure::config::DatabaseSettings;
use anyhow::Context;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Build the shared pool. Connections are acquired per query and returned
/// when the query completes.
pub async fn connect_pool(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let url = settings.resolve_url()?;

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect(&url)
        .await
        .context("Failed to connect to metadata database")?;

    tracing::info!(
        max_connections = settings.max_connections,
        "Connected to metadata database"
    );
    Ok(pool)
}
