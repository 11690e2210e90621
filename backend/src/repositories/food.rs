//! Food repository - database operations for the food catalog
//!
//! Nutrient columns are per one serving and nullable; an unknown nutrient
//! stays NULL rather than being recorded as zero.

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Food record from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FoodRecord {
    pub id: Uuid,
    pub name: String,
    pub calories: Option<Decimal>,
    pub protein_g: Option<Decimal>,
    pub carbs_g: Option<Decimal>,
    pub fat_g: Option<Decimal>,
    pub serving_size: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new food
#[derive(Debug, Clone)]
pub struct CreateFood {
    pub name: String,
    pub calories: Option<Decimal>,
    pub protein_g: Option<Decimal>,
    pub carbs_g: Option<Decimal>,
    pub fat_g: Option<Decimal>,
    pub serving_size: Option<String>,
}

/// Input for partially updating a food
#[derive(Debug, Clone, Default)]
pub struct UpdateFood {
    pub name: Option<String>,
    pub calories: Option<Decimal>,
    pub protein_g: Option<Decimal>,
    pub carbs_g: Option<Decimal>,
    pub fat_g: Option<Decimal>,
    pub serving_size: Option<String>,
}

/// Food repository
pub struct FoodRepository;

impl FoodRepository {
    /// Create a new food
    pub async fn create(pool: &PgPool, input: CreateFood) -> Result<FoodRecord> {
        let food = sqlx::query_as::<_, FoodRecord>(
            r#"
            INSERT INTO foods (name, calories, protein_g, carbs_g, fat_g, serving_size)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, calories, protein_g, carbs_g, fat_g, serving_size, created_at
            "#,
        )
        .bind(&input.name)
        .bind(input.calories)
        .bind(input.protein_g)
        .bind(input.carbs_g)
        .bind(input.fat_g)
        .bind(&input.serving_size)
        .fetch_one(pool)
        .await?;

        Ok(food)
    }

    /// List all foods ordered by name
    pub async fn list_ordered_by_name(pool: &PgPool) -> Result<Vec<FoodRecord>> {
        let foods = sqlx::query_as::<_, FoodRecord>(
            r#"
            SELECT id, name, calories, protein_g, carbs_g, fat_g, serving_size, created_at
            FROM foods
            ORDER BY name ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(foods)
    }

    /// Find food by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<FoodRecord>> {
        let food = sqlx::query_as::<_, FoodRecord>(
            r#"
            SELECT id, name, calories, protein_g, carbs_g, fat_g, serving_size, created_at
            FROM foods
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(food)
    }

    /// Case-insensitive substring search on the food name
    pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<FoodRecord>> {
        let foods = sqlx::query_as::<_, FoodRecord>(
            r#"
            SELECT id, name, calories, protein_g, carbs_g, fat_g, serving_size, created_at
            FROM foods
            WHERE LOWER(name) LIKE LOWER($1)
            ORDER BY name ASC
            "#,
        )
        .bind(format!("%{}%", query))
        .fetch_all(pool)
        .await?;

        Ok(foods)
    }

    /// Partially update a food
    pub async fn update(pool: &PgPool, id: Uuid, updates: UpdateFood) -> Result<Option<FoodRecord>> {
        let food = sqlx::query_as::<_, FoodRecord>(
            r#"
            UPDATE foods SET
                name = COALESCE($2, name),
                calories = COALESCE($3, calories),
                protein_g = COALESCE($4, protein_g),
                carbs_g = COALESCE($5, carbs_g),
                fat_g = COALESCE($6, fat_g),
                serving_size = COALESCE($7, serving_size)
            WHERE id = $1
            RETURNING id, name, calories, protein_g, carbs_g, fat_g, serving_size, created_at
            "#,
        )
        .bind(id)
        .bind(updates.name)
        .bind(updates.calories)
        .bind(updates.protein_g)
        .bind(updates.carbs_g)
        .bind(updates.fat_g)
        .bind(updates.serving_size)
        .fetch_optional(pool)
        .await?;

        Ok(food)
    }

    /// Delete a food
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM foods WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
