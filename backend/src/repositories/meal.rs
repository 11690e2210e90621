//! Meal repository - database operations for meal logs
//!
//! Meal reads join the referenced food so callers get the nutrient values
//! in one fetch instead of materializing the relation lazily.
//! `total_calories` is a derived column; it is computed by the service
//! before every insert and update and written here verbatim.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use vitalyou_shared::models::MealType;

/// Meal record from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MealRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_id: Uuid,
    pub quantity: Decimal,
    pub meal_type: MealType,
    pub meal_date: NaiveDate,
    pub total_calories: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Meal row joined with its referenced food
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MealWithFood {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_id: Uuid,
    pub quantity: Decimal,
    pub meal_type: MealType,
    pub meal_date: NaiveDate,
    pub total_calories: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub food_name: String,
    pub food_calories: Option<Decimal>,
    pub food_protein_g: Option<Decimal>,
    pub food_carbs_g: Option<Decimal>,
    pub food_fat_g: Option<Decimal>,
    pub food_serving_size: Option<String>,
    pub food_created_at: DateTime<Utc>,
}

/// Input for creating a new meal
#[derive(Debug, Clone)]
pub struct CreateMeal {
    pub user_id: Uuid,
    pub food_id: Uuid,
    pub quantity: Decimal,
    pub meal_type: MealType,
    pub meal_date: NaiveDate,
    pub total_calories: Option<Decimal>,
}

/// Input for partially updating a meal
#[derive(Debug, Clone, Default)]
pub struct UpdateMeal {
    pub food_id: Option<Uuid>,
    pub quantity: Option<Decimal>,
    pub meal_type: Option<MealType>,
    pub meal_date: Option<NaiveDate>,
}

/// Meal repository
pub struct MealRepository;

impl MealRepository {
    /// Create a new meal
    pub async fn create(pool: &PgPool, input: CreateMeal) -> Result<MealRecord> {
        let meal = sqlx::query_as::<_, MealRecord>(
            r#"
            INSERT INTO meals (user_id, food_id, quantity, meal_type, meal_date, total_calories)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, food_id, quantity, meal_type, meal_date,
                      total_calories, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.food_id)
        .bind(input.quantity)
        .bind(input.meal_type)
        .bind(input.meal_date)
        .bind(input.total_calories)
        .fetch_one(pool)
        .await?;

        Ok(meal)
    }

    /// Find meal by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<MealRecord>> {
        let meal = sqlx::query_as::<_, MealRecord>(
            r#"
            SELECT id, user_id, food_id, quantity, meal_type, meal_date,
                   total_calories, created_at
            FROM meals
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(meal)
    }

    /// Find meal by ID joined with its food
    pub async fn find_with_food(pool: &PgPool, id: Uuid) -> Result<Option<MealWithFood>> {
        let meal = sqlx::query_as::<_, MealWithFood>(
            r#"
            SELECT m.id, m.user_id, m.food_id, m.quantity, m.meal_type, m.meal_date,
                   m.total_calories, m.created_at,
                   f.name AS food_name, f.calories AS food_calories,
                   f.protein_g AS food_protein_g, f.carbs_g AS food_carbs_g,
                   f.fat_g AS food_fat_g, f.serving_size AS food_serving_size,
                   f.created_at AS food_created_at
            FROM meals m
            JOIN foods f ON f.id = m.food_id
            WHERE m.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(meal)
    }

    /// List all meals joined with their foods
    pub async fn list_with_food(pool: &PgPool) -> Result<Vec<MealWithFood>> {
        let meals = sqlx::query_as::<_, MealWithFood>(
            r#"
            SELECT m.id, m.user_id, m.food_id, m.quantity, m.meal_type, m.meal_date,
                   m.total_calories, m.created_at,
                   f.name AS food_name, f.calories AS food_calories,
                   f.protein_g AS food_protein_g, f.carbs_g AS food_carbs_g,
                   f.fat_g AS food_fat_g, f.serving_size AS food_serving_size,
                   f.created_at AS food_created_at
            FROM meals m
            JOIN foods f ON f.id = m.food_id
            ORDER BY m.created_at DESC, m.id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(meals)
    }

    /// List a user's meals, most recently logged first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<MealWithFood>> {
        let meals = sqlx::query_as::<_, MealWithFood>(
            r#"
            SELECT m.id, m.user_id, m.food_id, m.quantity, m.meal_type, m.meal_date,
                   m.total_calories, m.created_at,
                   f.name AS food_name, f.calories AS food_calories,
                   f.protein_g AS food_protein_g, f.carbs_g AS food_carbs_g,
                   f.fat_g AS food_fat_g, f.serving_size AS food_serving_size,
                   f.created_at AS food_created_at
            FROM meals m
            JOIN foods f ON f.id = m.food_id
            WHERE m.user_id = $1
            ORDER BY m.created_at DESC, m.id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(meals)
    }

    /// List a user's meals on a specific date, most recently logged first
    pub async fn list_by_user_and_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<MealWithFood>> {
        let meals = sqlx::query_as::<_, MealWithFood>(
            r#"
            SELECT m.id, m.user_id, m.food_id, m.quantity, m.meal_type, m.meal_date,
                   m.total_calories, m.created_at,
                   f.name AS food_name, f.calories AS food_calories,
                   f.protein_g AS food_protein_g, f.carbs_g AS food_carbs_g,
                   f.fat_g AS food_fat_g, f.serving_size AS food_serving_size,
                   f.created_at AS food_created_at
            FROM meals m
            JOIN foods f ON f.id = m.food_id
            WHERE m.user_id = $1 AND m.meal_date = $2
            ORDER BY m.created_at DESC, m.id ASC
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_all(pool)
        .await?;

        Ok(meals)
    }

    /// List a user's meals of one meal type, most recently logged first
    pub async fn list_by_user_and_meal_type(
        pool: &PgPool,
        user_id: Uuid,
        meal_type: MealType,
    ) -> Result<Vec<MealWithFood>> {
        let meals = sqlx::query_as::<_, MealWithFood>(
            r#"
            SELECT m.id, m.user_id, m.food_id, m.quantity, m.meal_type, m.meal_date,
                   m.total_calories, m.created_at,
                   f.name AS food_name, f.calories AS food_calories,
                   f.protein_g AS food_protein_g, f.carbs_g AS food_carbs_g,
                   f.fat_g AS food_fat_g, f.serving_size AS food_serving_size,
                   f.created_at AS food_created_at
            FROM meals m
            JOIN foods f ON f.id = m.food_id
            WHERE m.user_id = $1 AND m.meal_type = $2
            ORDER BY m.created_at DESC, m.id ASC
            "#,
        )
        .bind(user_id)
        .bind(meal_type)
        .fetch_all(pool)
        .await?;

        Ok(meals)
    }

    /// List a user's meals in an inclusive date range, newest date first
    pub async fn list_by_user_in_date_range(
        pool: &PgPool,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<MealWithFood>> {
        let meals = sqlx::query_as::<_, MealWithFood>(
            r#"
            SELECT m.id, m.user_id, m.food_id, m.quantity, m.meal_type, m.meal_date,
                   m.total_calories, m.created_at,
                   f.name AS food_name, f.calories AS food_calories,
                   f.protein_g AS food_protein_g, f.carbs_g AS food_carbs_g,
                   f.fat_g AS food_fat_g, f.serving_size AS food_serving_size,
                   f.created_at AS food_created_at
            FROM meals m
            JOIN foods f ON f.id = m.food_id
            WHERE m.user_id = $1 AND m.meal_date BETWEEN $2 AND $3
            ORDER BY m.meal_date DESC, m.created_at DESC, m.id ASC
            "#,
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await?;

        Ok(meals)
    }

    /// Partially update a meal
    ///
    /// `total_calories` is written unconditionally because it is derived
    /// from the (possibly new) quantity and food; a recomputed None must
    /// clear a stale value.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateMeal,
        total_calories: Option<Decimal>,
    ) -> Result<Option<MealRecord>> {
        let meal = sqlx::query_as::<_, MealRecord>(
            r#"
            UPDATE meals SET
                food_id = COALESCE($2, food_id),
                quantity = COALESCE($3, quantity),
                meal_type = COALESCE($4, meal_type),
                meal_date = COALESCE($5, meal_date),
                total_calories = $6
            WHERE id = $1
            RETURNING id, user_id, food_id, quantity, meal_type, meal_date,
                      total_calories, created_at
            "#,
        )
        .bind(id)
        .bind(updates.food_id)
        .bind(updates.quantity)
        .bind(updates.meal_type)
        .bind(updates.meal_date)
        .bind(total_calories)
        .fetch_optional(pool)
        .await?;

        Ok(meal)
    }

    /// Delete a meal
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM meals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
