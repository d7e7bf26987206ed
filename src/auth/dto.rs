use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Public part of the user returned to clients. Digest and session token
/// never leave the server.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<PublicUser>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_requires_both_fields() {
        let err = serde_json::from_str::<RegisterRequest>(r#"{"username":"ed"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn public_user_serializes_id_and_username_only() {
        let user = PublicUser {
            id: Uuid::new_v4(),
            username: "ed".into(),
        };
        let json = serde_json::to_value(&user).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["id", "username"]);
    }
}
