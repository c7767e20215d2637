use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use std::sync::Arc;

use crate::{
    extractors::AppJson,
    models::{
        quiz_result::{NewQuizResult, SaveResultRequest},
        user::SessionUser,
    },
    services::AppState,
};

/// POST /api/v1/results - Record a finished quiz attempt for the session user
pub async fn save_result(
    State(state): State<Arc<AppState>>,
    Extension(session_user): Extension<SessionUser>,
    AppJson(req): AppJson<SaveResultRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    tracing::info!(
        user_id = %session_user.id,
        subject_id = %req.subject_id,
        "Saving quiz result"
    );

    let result = state
        .store
        .save_quiz_result(NewQuizResult {
            user_id: session_user.id,
            subject_id: req.subject_id,
            score: req.score,
            total_questions: req.total_questions,
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to save quiz result: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    Ok((StatusCode::CREATED, Json(result)))
}

/// GET /api/v1/results - Quiz history for the session user
pub async fn my_results(
    State(state): State<Arc<AppState>>,
    Extension(session_user): Extension<SessionUser>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let results = state
        .store
        .results_for_user(&session_user.id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list quiz results: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    Ok(Json(results))
}
