use serde::{Deserialize, Serialize};
use time::{Date, Time};

use crate::meals::metrics::MealMetrics;
use crate::meals::repo::Meal;

/// Request body for `POST /meals`; the meal sits under a `meal` key.
#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    pub meal: MealPayload,
}

/// Full meal contents as sent by clients. Used nested on create and flat as
/// the replacement body on update.
#[derive(Debug, Deserialize)]
pub struct MealPayload {
    pub name: String,
    pub description: String,
    #[serde(with = "crate::meals::datetime::iso_date")]
    pub some_date: Date,
    #[serde(with = "crate::meals::datetime::iso_time")]
    pub some_time: Time,
    pub in_diet: bool,
}

#[derive(Debug, Serialize)]
pub struct MealsResponse {
    pub meals: Vec<Meal>,
}

/// Single-meal response. The key is `meals` even for one record; clients
/// depend on that shape.
#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub meals: Meal,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub metrics: MealMetrics,
}

#[cfg(test)]
mod tests {
    use time::macros::{date, time};

    use super::*;

    #[test]
    fn create_request_accepts_full_payload() {
        let body = r#"{
            "meal": {
                "name": "Salad",
                "description": "greens and tomatoes",
                "some_date": "2025-08-07",
                "some_time": "20:20",
                "in_diet": false
            }
        }"#;
        let req: CreateMealRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.meal.name, "Salad");
        assert_eq!(req.meal.some_date, date!(2025 - 08 - 07));
        assert_eq!(req.meal.some_time, time!(20:20));
        assert!(!req.meal.in_diet);
    }

    #[test]
    fn create_request_rejects_missing_field() {
        let body = r#"{
            "meal": {
                "name": "Salad",
                "some_date": "2025-08-07",
                "some_time": "20:20",
                "in_diet": false
            }
        }"#;
        assert!(serde_json::from_str::<CreateMealRequest>(body).is_err());
    }

    #[test]
    fn create_request_rejects_non_boolean_flag() {
        let body = r#"{
            "meal": {
                "name": "Salad",
                "description": "greens",
                "some_date": "2025-08-07",
                "some_time": "20:20",
                "in_diet": "yes"
            }
        }"#;
        assert!(serde_json::from_str::<CreateMealRequest>(body).is_err());
    }

    #[test]
    fn update_payload_is_flat() {
        let body = r#"{
            "name": "Salad",
            "description": "greens",
            "some_date": "2025-08-07",
            "some_time": "12:00:30",
            "in_diet": true
        }"#;
        let payload: MealPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.some_time, time!(12:00:30));
        assert!(payload.in_diet);
    }
}
