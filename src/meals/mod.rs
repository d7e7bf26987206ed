pub(crate) mod datetime;
mod dto;
mod handlers;
mod metrics;
pub(crate) mod repo;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/meals", post(handlers::create_meal).get(handlers::list_meals))
        .route("/meals/metrics", get(handlers::meal_metrics))
        .route(
            "/meals/:id",
            get(handlers::get_meal)
                .put(handlers::update_meal)
                .delete(handlers::delete_meal),
        )
}
