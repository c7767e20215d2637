use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use crate::models::user::SessionUser;
use crate::services::AppState;

/// Session gate for protected routes.
///
/// While the application is still initializing, answers with a loading
/// placeholder instead of deciding. With a session cookie present, attaches
/// the reconstructed session user and passes through. Anonymous requests
/// are redirected to the login view.
///
/// This is a routing predicate, not a security boundary: the cookie value
/// is taken at face value and the user record is not re-fetched.
pub async fn session_gate(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    if !state.is_ready() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Loading...").into_response();
    }

    match jar.get(&state.config.cookie.name) {
        Some(cookie) => {
            let session_user = SessionUser::from_stored_id(cookie.value());
            tracing::debug!(user_id = %session_user.id, "Session cookie accepted");
            request.extensions_mut().insert(session_user);
            next.run(request).await
        }
        None => Redirect::to("/login").into_response(),
    }
}
