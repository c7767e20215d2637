use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One finished quiz attempt. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResult {
    pub id: String,
    pub user_id: String,
    pub subject_id: String,
    pub score: u32,
    pub total_questions: u32,
    pub completed_at: DateTime<Utc>,
}

/// A result before the store assigns the id and completion time.
#[derive(Debug, Clone)]
pub struct NewQuizResult {
    pub user_id: String,
    pub subject_id: String,
    pub score: u32,
    pub total_questions: u32,
}

/// Body for POST /api/v1/results; the owner comes from the session.
#[derive(Debug, Deserialize)]
pub struct SaveResultRequest {
    pub subject_id: String,
    pub score: u32,
    pub total_questions: u32,
}
