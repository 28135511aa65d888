// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::database::connect_pool;
use crate::infrastructure::postgres_repository::PostgresRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, show_dashboard};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_app_config()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Create repository (infrastructure layer)
    let pool = connect_pool(&config.database).await?;
    let repository = Arc::new(PostgresRepository::new(pool));

    // Create services (application layer)
    let dashboard_service =
        DashboardService::new(repository.clone(), repository.clone(), repository);

    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(show_dashboard))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.server.socket_addr()?;
    tracing::info!("Starting team-health-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
