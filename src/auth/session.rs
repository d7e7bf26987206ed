use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::Duration;
use tracing::warn;

use crate::auth::repo::User;
use crate::error::ApiError;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "sessionId";

/// The cookie is only sent back on the meals API, matching its scope of use.
const COOKIE_PATH: &str = "/meals";

pub fn build_session_cookie(token: String, ttl_days: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path(COOKIE_PATH)
        .max_age(Duration::days(ttl_days))
        .http_only(true)
        .build()
}

/// Resolves the `sessionId` cookie to the owning user before the handler
/// runs. Any miss (no cookie, unknown token, expired token) is a uniform 401;
/// handlers never see a half-authenticated request.
pub struct SessionUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Unauthorized)?;

        let token = jar
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(ApiError::Unauthorized)?;

        let user = User::find_by_session(&state.db, &token)
            .await?
            .ok_or_else(|| {
                warn!("session token did not resolve to a user");
                ApiError::Unauthorized
            })?;

        Ok(SessionUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_is_scoped_and_long_lived() {
        let cookie = build_session_cookie("abc".into(), 5);
        assert_eq!(cookie.name(), "sessionId");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.path(), Some("/meals"));
        assert_eq!(cookie.max_age(), Some(Duration::days(5)));
        assert_eq!(cookie.http_only(), Some(true));
    }
}
