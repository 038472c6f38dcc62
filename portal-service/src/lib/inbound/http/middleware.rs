use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::SameSite;
use axum_extra::extract::CookieJar;

use crate::domain::user::models::User;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::EmailSender;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Name of the cookie carrying the opaque session identifier.
pub const SESSION_COOKIE: &str = "session_id";

/// Extension type to store the authenticated user in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Middleware that resolves the session cookie and adds the user to
/// request extensions
pub async fn authenticate<M: EmailSender>(
    State(state): State<AppState<M>>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let session_id = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))?;

    let user = state
        .auth_service
        .current_user(&session_id)
        .await
        .map_err(ApiError::from)?;

    req.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(req).await)
}

/// Build the session cookie attached on register and login.
///
/// HttpOnly keeps the identifier away from page scripts. Expiry is
/// enforced server-side; the cookie carries no max-age.
pub fn session_cookie(session_id: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

/// Build the cookie handed to `CookieJar::remove` to clear the session.
/// Name and path must match the cookie set at login.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}
