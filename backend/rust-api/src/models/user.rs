use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User record held by the record store.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Stored as plaintext; a real backend would hash this before it ever
    /// reaches the store.
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// User profile returned to clients (without the password)
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

/// The user as the session layer sees it between requests.
///
/// Only the identifier survives across requests (it is the one persisted
/// value); email and name are fixed stand-ins because the stored record is
/// not re-fetched on reconstruction.
#[derive(Debug, Clone, Serialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl SessionUser {
    pub fn from_stored_id(id: impl Into<String>) -> Self {
        SessionUser {
            id: id.into(),
            email: "user@example.com".to_string(),
            name: "User".to_string(),
        }
    }
}

/// Request to register a new user
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    // No length rule: the stand-in store accepts any password as-is.
    pub password: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
}

/// Request to login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}
