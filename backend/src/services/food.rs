//! Food service - catalog of foods and their per-serving nutrients

use crate::error::ApiError;
use crate::repositories::{CreateFood, FoodRecord, FoodRepository, UpdateFood};
use sqlx::PgPool;
use uuid::Uuid;

/// Food service
pub struct FoodService;

impl FoodService {
    /// List all foods ordered by name
    pub async fn list(pool: &PgPool) -> Result<Vec<FoodRecord>, ApiError> {
        let foods = FoodRepository::list_ordered_by_name(pool)
            .await
            .map_err(ApiError::Internal)?;
        Ok(foods)
    }

    /// Get a food by ID
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<FoodRecord, ApiError> {
        let food = FoodRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Food not found".to_string()))?;

        Ok(food)
    }

    /// Create a food
    pub async fn create(pool: &PgPool, input: CreateFood) -> Result<FoodRecord, ApiError> {
        if input.name.trim().is_empty() {
            return Err(ApiError::Validation("Food name cannot be empty".to_string()));
        }

        let food = FoodRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        Ok(food)
    }

    /// Partially update a food
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateFood,
    ) -> Result<FoodRecord, ApiError> {
        if let Some(name) = &updates.name {
            if name.trim().is_empty() {
                return Err(ApiError::Validation("Food name cannot be empty".to_string()));
            }
        }

        let food = FoodRepository::update(pool, id, updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Food not found".to_string()))?;

        Ok(food)
    }

    /// Delete a food
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), ApiError> {
        let deleted = FoodRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Food not found".to_string()));
        }

        Ok(())
    }

    /// Search foods by name substring, case-insensitive
    ///
    /// The empty string is a substring of every name, so an empty query
    /// returns the full catalog ordered by name.
    pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<FoodRecord>, ApiError> {
        let foods = FoodRepository::search(pool, query)
            .await
            .map_err(ApiError::Internal)?;

        Ok(foods)
    }
}
