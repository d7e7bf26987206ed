use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::CookieJar;
use time::{Duration, OffsetDateTime};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::auth::{
    dto::{PublicUser, RegisterRequest, UsersResponse},
    password::hash_password,
    repo::User,
    session::{build_session_cookie, SESSION_COOKIE},
};
use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

#[instrument(skip(state, jar, payload))]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> Result<(CookieJar, StatusCode), ApiError> {
    let username = payload.username.trim().to_string();
    if username.is_empty() || payload.password.is_empty() {
        warn!("registration with empty username or password");
        return Err(ApiError::Validation(
            "username and password are required".into(),
        ));
    }

    if User::find_by_username(&state.db, &username).await?.is_some() {
        warn!(%username, "username already registered");
        return Err(ApiError::UsernameTaken);
    }

    let digest = hash_password(&payload.password)?;

    // A returning browser keeps its existing token; a fresh client gets a new
    // one plus the cookie.
    let existing = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty());
    let (session_id, issue_cookie) = match existing {
        Some(token) => (token, false),
        None => (Uuid::new_v4().to_string(), true),
    };

    let expires_at = OffsetDateTime::now_utc() + Duration::days(state.config.session.ttl_days);
    let user = User::create(&state.db, &username, &digest, &session_id, expires_at).await?;
    info!(user_id = %user.id, %username, "user registered");

    let jar = if issue_cookie {
        jar.add(build_session_cookie(
            session_id,
            state.config.session.ttl_days,
        ))
    } else {
        jar
    };

    Ok((jar, StatusCode::CREATED))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<UsersResponse>, ApiError> {
    let users = User::list(&state.db)
        .await?
        .into_iter()
        .map(|u| PublicUser {
            id: u.id,
            username: u.username,
        })
        .collect();
    Ok(Json(UsersResponse { users }))
}
