use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::auth::session::SessionUser;
use crate::error::{ApiError, ApiJson};
use crate::meals::{
    dto::{CreateMealRequest, MealPayload, MealResponse, MealsResponse, MetricsResponse},
    metrics::summarize,
    repo::Meal,
};
use crate::state::AppState;

#[instrument(skip(state, user, body))]
pub async fn create_meal(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    ApiJson(body): ApiJson<CreateMealRequest>,
) -> Result<StatusCode, ApiError> {
    Meal::insert(&state.db, user.id, &body.meal).await?;
    info!(user_id = %user.id, "meal created");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, user))]
pub async fn list_meals(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
) -> Result<Json<MealsResponse>, ApiError> {
    let meals = Meal::list_by_user(&state.db, user.id).await?;
    // An empty history is reported as an error, not an empty list.
    if meals.is_empty() {
        return Err(ApiError::MealsNotFound);
    }
    Ok(Json(MealsResponse { meals }))
}

#[instrument(skip(state, user))]
pub async fn get_meal(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MealResponse>, ApiError> {
    let meal = Meal::find_for_user(&state.db, user.id, id)
        .await?
        .ok_or_else(|| {
            warn!(user_id = %user.id, meal_id = %id, "meal absent or not owned");
            ApiError::Unauthorized
        })?;
    Ok(Json(MealResponse { meals: meal }))
}

#[instrument(skip(state, user, payload))]
pub async fn update_meal(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    Path(id): Path<Uuid>,
    ApiJson(payload): ApiJson<MealPayload>,
) -> Result<StatusCode, ApiError> {
    let affected = Meal::update_for_user(&state.db, user.id, id, &payload).await?;
    if affected == 0 {
        warn!(user_id = %user.id, meal_id = %id, "update hit no owned meal");
        return Err(ApiError::Unauthorized);
    }
    info!(user_id = %user.id, meal_id = %id, "meal updated");
    Ok(StatusCode::NON_AUTHORITATIVE_INFORMATION)
}

#[instrument(skip(state, user))]
pub async fn delete_meal(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let affected = Meal::delete_for_user(&state.db, user.id, id).await?;
    if affected == 0 {
        warn!(user_id = %user.id, meal_id = %id, "delete hit no owned meal");
        return Err(ApiError::Unauthorized);
    }
    info!(user_id = %user.id, meal_id = %id, "meal deleted");
    Ok(StatusCode::NON_AUTHORITATIVE_INFORMATION)
}

#[instrument(skip(state, user))]
pub async fn meal_metrics(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
) -> Result<Json<MetricsResponse>, ApiError> {
    let meals = Meal::list_for_metrics(&state.db, user.id).await?;
    Ok(Json(MetricsResponse {
        metrics: summarize(&meals),
    }))
}
