use std::sync::Arc;

use thiserror::Error;

use crate::models::user::{LoginRequest, RegisterRequest, User};
use crate::store::{RecordStore, StoreError};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("A user with this email already exists")]
    DuplicateEmail,
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct AuthService {
    store: Arc<dyn RecordStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Register a new user.
    ///
    /// Email uniqueness is check-then-insert; the store enforces no
    /// uniqueness of its own, so two registrations interleaving between the
    /// lookup and the insert could in principle both pass.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, AuthError> {
        if self.store.find_user_by_email(&req.email).await?.is_some() {
            return Err(AuthError::DuplicateEmail);
        }

        let user = self
            .store
            .create_user(&req.email, &req.name, &req.password)
            .await?;

        tracing::info!(
            user_id = %user.id,
            email = %user.email,
            "Registered new user"
        );

        Ok(user)
    }

    /// Login with email and password.
    ///
    /// `Ok(None)` covers both unknown email and wrong password; callers get
    /// no signal about which it was. The comparison is exact string equality
    /// against the stored plaintext password.
    pub async fn login(&self, req: &LoginRequest) -> Result<Option<User>, AuthError> {
        match self.store.find_user_by_email(&req.email).await? {
            Some(user) if user.password == req.password => {
                tracing::info!(user_id = %user.id, email = %user.email, "Successful login");
                Ok(Some(user))
            }
            Some(_) => {
                tracing::warn!(email = %req.email, "Failed login attempt: invalid password");
                Ok(None)
            }
            None => {
                tracing::warn!(email = %req.email, "Failed login attempt: unknown email");
                Ok(None)
            }
        }
    }
}
