use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::services::AppState;

pub mod auth;
pub mod results;
pub mod subjects;
pub mod views;

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (status, status_code) = if state.is_ready() {
        ("healthy", StatusCode::OK)
    } else {
        ("starting", StatusCode::SERVICE_UNAVAILABLE)
    };

    (
        status_code,
        Json(json!({
            "status": status,
            "service": "quizdeck-api",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
