use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::services::AppState;

/// GET /api/v1/subjects - List all subjects
pub async fn list_subjects(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let subjects = state.store.subjects().await.map_err(|e| {
        tracing::error!("Failed to list subjects: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(subjects))
}

/// GET /api/v1/subjects/{id}/questions - Questions for one subject
///
/// An unknown subject id yields an empty list, not an error: the store has
/// no referential integrity to consult.
pub async fn subject_questions(
    State(state): State<Arc<AppState>>,
    Path(subject_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let questions = state
        .store
        .questions_by_subject(&subject_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list questions: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    Ok(Json(questions))
}
