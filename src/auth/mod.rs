mod dto;
mod handlers;
mod password;
pub(crate) mod repo;
pub(crate) mod session;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/users", get(handlers::list_users))
}
