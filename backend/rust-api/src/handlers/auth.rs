use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Extension, Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use std::sync::Arc;
use validator::Validate;

use crate::{
    extractors::AppJson,
    models::user::{LoginRequest, RegisterRequest, SessionUser, UserProfile},
    services::{
        auth_service::{AuthError, AuthService},
        AppState,
    },
};

/// The session cookie is the single persisted value: the user's id as a
/// plain string.
fn session_cookie(state: &AppState, user_id: &str) -> Cookie<'static> {
    Cookie::build((state.config.cookie.name.clone(), user_id.to_string()))
        .path("/")
        .http_only(true)
        .secure(state.config.cookie.secure)
        .same_site(state.config.cookie.parse_same_site())
        .max_age(time::Duration::days(30))
        .build()
}

fn clear_session_cookie(state: &AppState) -> Cookie<'static> {
    Cookie::build((state.config.cookie.name.clone(), ""))
        .path("/")
        .http_only(true)
        .secure(state.config.cookie.secure)
        .same_site(state.config.cookie.parse_same_site())
        .max_age(time::Duration::ZERO)
        .build()
}

/// POST /api/v1/auth/register - Register a new user
pub async fn register(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    AppJson(req): AppJson<RegisterRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    // Validate request
    if let Err(e) = req.validate() {
        return Err((StatusCode::BAD_REQUEST, format!("Validation error: {}", e)));
    }

    tracing::info!("Registering new user: {}", req.email);

    let service = AuthService::new(state.store.clone());

    match service.register(req).await {
        Ok(user) => {
            // The new user becomes the current session
            let jar = jar.add(session_cookie(&state, &user.id));
            Ok((StatusCode::CREATED, jar, Json(UserProfile::from(user))))
        }
        // The duplicate condition is the one failure callers must be able
        // to tell apart.
        Err(e @ AuthError::DuplicateEmail) => {
            tracing::warn!("Failed to register user: {}", e);
            Err((StatusCode::CONFLICT, e.to_string()))
        }
        Err(e) => {
            tracing::error!("Failed to register user: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// POST /api/v1/auth/login - Login with email and password
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    // Validate request
    if let Err(e) = req.validate() {
        return Err((StatusCode::BAD_REQUEST, format!("Validation error: {}", e)));
    }

    tracing::info!("Login attempt for user: {}", req.email);

    let service = AuthService::new(state.store.clone());

    match service.login(&req).await {
        Ok(Some(user)) => {
            let jar = jar.add(session_cookie(&state, &user.id));
            Ok((StatusCode::OK, jar, Json(UserProfile::from(user))))
        }
        Ok(None) => Err((
            StatusCode::UNAUTHORIZED,
            "Invalid email or password".to_string(),
        )),
        Err(e) => {
            // Lookup failures degrade to a failed login, never a distinct
            // user-facing message.
            tracing::error!("Login error: {}", e);
            Err((
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
            ))
        }
    }
}

/// POST /api/v1/auth/logout - Clear the session and return to the login view
///
/// Works from any state: there is nothing to invalidate beyond the cookie.
pub async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> impl IntoResponse {
    tracing::info!("Logging out user");

    let jar = jar.add(clear_session_cookie(&state));
    (jar, Redirect::to("/login"))
}

/// GET /api/v1/auth/me - The session user as the gate reconstructed it
pub async fn me(Extension(session_user): Extension<SessionUser>) -> impl IntoResponse {
    Json(session_user)
}
