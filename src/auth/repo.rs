use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub session_id: Option<String>,
    #[serde(skip_serializing)]
    pub session_expires_at: Option<OffsetDateTime>,
}

impl User {
    /// Resolve a session token to its user. Tokens past their store-side
    /// expiry no longer match.
    pub async fn find_by_session(db: &PgPool, token: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, session_id, session_expires_at
            FROM users
            WHERE session_id = $1 AND session_expires_at > now()
            "#,
        )
        .bind(token)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_username(
        db: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, session_id, session_expires_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await
    }

    /// Create a new user with a hashed password and an already-issued session
    /// token.
    pub async fn create(
        db: &PgPool,
        username: &str,
        password_hash: &str,
        session_id: &str,
        session_expires_at: OffsetDateTime,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, password, session_id, session_expires_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, password, session_id, session_expires_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password_hash)
        .bind(session_id)
        .bind(session_expires_at)
        .fetch_one(db)
        .await
    }

    pub async fn list(db: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, session_id, session_expires_at
            FROM users
            "#,
        )
        .fetch_all(db)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serialization_hides_credentials() {
        let user = User {
            id: Uuid::new_v4(),
            username: "ed".into(),
            password: "$argon2id$...".into(),
            session_id: Some("token".into()),
            session_expires_at: Some(OffsetDateTime::now_utc()),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("ed"));
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("token"));
    }
}
