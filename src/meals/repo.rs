use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::{Date, Time};
use uuid::Uuid;

use crate::meals::dto::MealPayload;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Meal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(with = "crate::meals::datetime::iso_date")]
    pub some_date: Date,
    #[serde(with = "crate::meals::datetime::iso_time")]
    pub some_time: Time,
    pub in_diet: bool,
}

impl Meal {
    pub async fn insert(
        db: &PgPool,
        user_id: Uuid,
        payload: &MealPayload,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO meals (id, user_id, name, description, some_date, some_time, in_diet)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.some_date)
        .bind(payload.some_time)
        .bind(payload.in_diet)
        .execute(db)
        .await?;
        Ok(())
    }

    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> Result<Vec<Meal>, sqlx::Error> {
        sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, user_id, name, description, some_date, some_time, in_diet
            FROM meals
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// Lookup scoped by owner. A meal that exists but belongs to someone else
    /// resolves to `None`, same as one that does not exist.
    pub async fn find_for_user(
        db: &PgPool,
        user_id: Uuid,
        meal_id: Uuid,
    ) -> Result<Option<Meal>, sqlx::Error> {
        sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, user_id, name, description, some_date, some_time, in_diet
            FROM meals
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(meal_id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    /// Full replacement, scoped by `(id, user_id)`. Returns the number of
    /// rows touched; zero means absent or not owned.
    pub async fn update_for_user(
        db: &PgPool,
        user_id: Uuid,
        meal_id: Uuid,
        payload: &MealPayload,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE meals
            SET name = $3, description = $4, some_date = $5, some_time = $6, in_diet = $7
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(meal_id)
        .bind(user_id)
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.some_date)
        .bind(payload.some_time)
        .bind(payload.in_diet)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_for_user(
        db: &PgPool,
        user_id: Uuid,
        meal_id: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM meals
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(meal_id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }

    /// Rows in the order the metrics pass expects: most recent date first,
    /// then time descending and id as stable tie-breakers so same-day meals
    /// always come back in the same order.
    pub async fn list_for_metrics(db: &PgPool, user_id: Uuid) -> Result<Vec<Meal>, sqlx::Error> {
        sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, user_id, name, description, some_date, some_time, in_diet
            FROM meals
            WHERE user_id = $1
            ORDER BY some_date DESC, some_time DESC, id
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }
}
