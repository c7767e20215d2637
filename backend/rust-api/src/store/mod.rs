use async_trait::async_trait;
use thiserror::Error;

use crate::models::question::{NewQuestion, Question};
use crate::models::quiz_result::{NewQuizResult, QuizResult};
use crate::models::subject::Subject;
use crate::models::user::User;

pub mod memory;

pub use memory::MemoryStore;

/// Failures a storage backend may report.
///
/// The in-memory backend never fails; the variant exists so a persistent
/// engine can slot in behind the same trait without changing callers.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Narrow record-access interface: create/find/list per record kind.
///
/// All operations hand back owned copies, never references into the backing
/// storage. Uniqueness is not enforced here; callers check before inserting.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Append a new user. Always succeeds; duplicate emails are the
    /// caller's problem.
    async fn create_user(&self, email: &str, name: &str, password: &str) -> StoreResult<User>;

    /// Linear scan, first match, exact string equality. Absent is `None`,
    /// not an error.
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    async fn create_subject(
        &self,
        name: &str,
        description: &str,
        icon: &str,
    ) -> StoreResult<Subject>;

    async fn subjects(&self) -> StoreResult<Vec<Subject>>;

    async fn add_question(&self, question: NewQuestion) -> StoreResult<Question>;

    async fn questions_by_subject(&self, subject_id: &str) -> StoreResult<Vec<Question>>;

    async fn save_quiz_result(&self, result: NewQuizResult) -> StoreResult<QuizResult>;

    async fn results_for_user(&self, user_id: &str) -> StoreResult<Vec<QuizResult>>;
}
