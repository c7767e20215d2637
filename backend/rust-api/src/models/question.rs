use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    /// Index into `options`. Nothing checks that it is in range.
    pub correct_answer: usize,
    pub explanation: String,
    /// Foreign reference by convention only; no referential integrity.
    pub subject_id: String,
}

/// A question before the store assigns it an id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
    pub subject_id: String,
}
