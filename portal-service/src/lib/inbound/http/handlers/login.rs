use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::EmailSender;
use crate::inbound::http::middleware::session_cookie;
use crate::inbound::http::router::AppState;

pub async fn login<M: EmailSender>(
    State(state): State<AppState<M>>,
    jar: CookieJar,
    Json(body): Json<LoginRequestBody>,
) -> Result<(CookieJar, ApiSuccess<UserData>), ApiError> {
    // A malformed username gets the same generic rejection as a wrong password
    let username = Username::new(body.username)
        .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let (user, session_id) = state
        .auth_service
        .login(&username, body.password)
        .await
        .map_err(ApiError::from)?;

    Ok((
        jar.add(session_cookie(session_id)),
        ApiSuccess::new(StatusCode::OK, UserData::from(&user)),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}
