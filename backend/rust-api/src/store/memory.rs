use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use tokio::sync::RwLock;

use super::{RecordStore, StoreResult};
use crate::models::question::{NewQuestion, Question};
use crate::models::quiz_result::{NewQuizResult, QuizResult};
use crate::models::subject::Subject;
use crate::models::user::User;

const ID_LEN: usize = 16;

/// Random base-36 identifier. Not cryptographic, not collision-checked.
fn generate_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// In-memory record store. Nothing survives the process; the async shape
/// exists so a persistent backend can replace this one behind `RecordStore`.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    subjects: RwLock<Vec<Subject>>,
    questions: RwLock<Vec<Question>>,
    quiz_results: RwLock<Vec<QuizResult>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create_user(&self, email: &str, name: &str, password: &str) -> StoreResult<User> {
        let user = User {
            id: generate_id(),
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
            created_at: Utc::now(),
        };
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn create_subject(
        &self,
        name: &str,
        description: &str,
        icon: &str,
    ) -> StoreResult<Subject> {
        let subject = Subject {
            id: generate_id(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        };
        self.subjects.write().await.push(subject.clone());
        Ok(subject)
    }

    async fn subjects(&self) -> StoreResult<Vec<Subject>> {
        Ok(self.subjects.read().await.clone())
    }

    async fn add_question(&self, question: NewQuestion) -> StoreResult<Question> {
        let question = Question {
            id: generate_id(),
            text: question.text,
            options: question.options,
            correct_answer: question.correct_answer,
            explanation: question.explanation,
            subject_id: question.subject_id,
        };
        self.questions.write().await.push(question.clone());
        Ok(question)
    }

    async fn questions_by_subject(&self, subject_id: &str) -> StoreResult<Vec<Question>> {
        Ok(self
            .questions
            .read()
            .await
            .iter()
            .filter(|q| q.subject_id == subject_id)
            .cloned()
            .collect())
    }

    async fn save_quiz_result(&self, result: NewQuizResult) -> StoreResult<QuizResult> {
        let result = QuizResult {
            id: generate_id(),
            user_id: result.user_id,
            subject_id: result.subject_id,
            score: result.score,
            total_questions: result.total_questions,
            completed_at: Utc::now(),
        };
        self.quiz_results.write().await.push(result.clone());
        Ok(result)
    }

    async fn results_for_user(&self, user_id: &str) -> StoreResult<Vec<QuizResult>> {
        Ok(self
            .quiz_results
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_base36() {
        let id = generate_id();
        assert_eq!(id.len(), ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let store = MemoryStore::new();

        let created = store
            .create_user("ann@example.com", "Ann", "pw1")
            .await
            .unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.email, "ann@example.com");

        let found = store.find_user_by_email("ann@example.com").await.unwrap();
        assert_eq!(found.unwrap().id, created.id);

        // Exact, case-sensitive equality
        assert!(store
            .find_user_by_email("Ann@example.com")
            .await
            .unwrap()
            .is_none());
        assert!(store
            .find_user_by_email("missing@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_find_user_returns_first_match() {
        let store = MemoryStore::new();

        // The store itself allows duplicates; a scan returns the oldest one.
        let first = store
            .create_user("dup@example.com", "First", "a")
            .await
            .unwrap();
        store
            .create_user("dup@example.com", "Second", "b")
            .await
            .unwrap();

        let found = store
            .find_user_by_email("dup@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, first.id);
        assert_eq!(found.name, "First");
    }

    #[tokio::test]
    async fn test_subjects_returns_copies() {
        let store = MemoryStore::new();
        store
            .create_subject("Mathematics", "Test your math skills", "🧮")
            .await
            .unwrap();

        let mut listed = store.subjects().await.unwrap();
        listed[0].name = "Mutated".to_string();

        let listed_again = store.subjects().await.unwrap();
        assert_eq!(listed_again[0].name, "Mathematics");
    }

    #[tokio::test]
    async fn test_questions_filtered_by_subject() {
        let store = MemoryStore::new();
        let math = store.create_subject("Mathematics", "", "🧮").await.unwrap();
        let science = store.create_subject("Science", "", "🔬").await.unwrap();

        store
            .add_question(NewQuestion {
                text: "2 + 2 = ?".to_string(),
                options: vec!["3".to_string(), "4".to_string()],
                correct_answer: 1,
                explanation: "Basic addition".to_string(),
                subject_id: math.id.clone(),
            })
            .await
            .unwrap();
        store
            .add_question(NewQuestion {
                text: "H2O is?".to_string(),
                options: vec!["Water".to_string(), "Salt".to_string()],
                correct_answer: 0,
                explanation: "Chemistry".to_string(),
                subject_id: science.id.clone(),
            })
            .await
            .unwrap();

        let math_questions = store.questions_by_subject(&math.id).await.unwrap();
        assert_eq!(math_questions.len(), 1);
        assert_eq!(math_questions[0].text, "2 + 2 = ?");

        // Unknown subject: empty, not an error
        let none = store.questions_by_subject("no-such-subject").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_results_filtered_by_user() {
        let store = MemoryStore::new();

        let saved = store
            .save_quiz_result(NewQuizResult {
                user_id: "user-a".to_string(),
                subject_id: "subj-1".to_string(),
                score: 7,
                total_questions: 10,
            })
            .await
            .unwrap();
        assert!(!saved.id.is_empty());

        let a_results = store.results_for_user("user-a").await.unwrap();
        assert_eq!(a_results.len(), 1);
        assert_eq!(a_results[0].score, 7);
        assert_eq!(a_results[0].total_questions, 10);

        let b_results = store.results_for_user("user-b").await.unwrap();
        assert!(b_results.is_empty());
    }
}
