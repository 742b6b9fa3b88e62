// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_config;
use crate::infrastructure::recorder_repository::RecorderRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, get_device_detail, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let app_config = load_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(RecorderRepository::new(
        app_config.recorder.host,
        app_config.recorder.token,
        app_config.recorder.database,
    ));

    // Create services (application layer)
    let dashboard_service = DashboardService::new(repository);

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard/:day", get(get_dashboard))
        .route("/dashboard/:day/devices/:device_id", get(get_device_detail))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = app_config.server.bind.parse()?;
    tracing::info!("starting probe-statistics service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
