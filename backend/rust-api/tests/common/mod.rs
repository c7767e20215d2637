use axum::Router;
use std::sync::Arc;

use quizdeck_api::{config::Config, create_router, services::AppState, store::MemoryStore};

/// Build a router over a fresh, fully initialized in-memory state.
pub async fn create_test_app() -> Router {
    // Initialize tracing for tests
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let config = Config::load().expect("Failed to load test configuration");

    let app_state = Arc::new(AppState::new(config, Arc::new(MemoryStore::new())));

    app_state
        .initialize()
        .await
        .expect("Failed to initialize test app state");

    create_router(app_state)
}
