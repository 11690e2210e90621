//! Workout service - catalog management and visibility queries

use crate::error::ApiError;
use crate::repositories::{
    CreateWorkout, UpdateWorkout, UserRepository, WorkoutRecord, WorkoutRepository,
};
use sqlx::PgPool;
use uuid::Uuid;
use vitalyou_shared::models::{Category, Difficulty, WorkoutOwner};

/// Workout service
pub struct WorkoutService;

impl WorkoutService {
    /// List all workouts
    pub async fn list(pool: &PgPool) -> Result<Vec<WorkoutRecord>, ApiError> {
        let workouts = WorkoutRepository::list(pool)
            .await
            .map_err(ApiError::Internal)?;
        Ok(workouts)
    }

    /// Get a workout by ID
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<WorkoutRecord, ApiError> {
        let workout = WorkoutRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Workout not found".to_string()))?;

        Ok(workout)
    }

    /// Create a workout
    ///
    /// A personal workout requires its owner to exist; a global workout
    /// has no owner at all.
    pub async fn create(pool: &PgPool, input: CreateWorkout) -> Result<WorkoutRecord, ApiError> {
        if input.name.trim().is_empty() {
            return Err(ApiError::Validation("Workout name cannot be empty".to_string()));
        }

        match input.owner {
            WorkoutOwner::Global => {}
            WorkoutOwner::OwnedBy(user_id) => {
                let owner_exists = UserRepository::exists(pool, user_id)
                    .await
                    .map_err(ApiError::Internal)?;
                if !owner_exists {
                    return Err(ApiError::BadRequest("Owning user does not exist".to_string()));
                }
            }
        }

        let workout = WorkoutRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        Ok(workout)
    }

    /// Partially update a workout
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateWorkout,
    ) -> Result<WorkoutRecord, ApiError> {
        if let Some(name) = &updates.name {
            if name.trim().is_empty() {
                return Err(ApiError::Validation("Workout name cannot be empty".to_string()));
            }
        }

        let workout = WorkoutRepository::update(pool, id, updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Workout not found".to_string()))?;

        Ok(workout)
    }

    /// Delete a workout together with its exercises
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), ApiError> {
        let deleted = WorkoutRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Workout not found".to_string()));
        }

        Ok(())
    }

    /// List workouts in a category
    pub async fn list_by_category(
        pool: &PgPool,
        category: Category,
    ) -> Result<Vec<WorkoutRecord>, ApiError> {
        let workouts = WorkoutRepository::list_by_category(pool, category)
            .await
            .map_err(ApiError::Internal)?;
        Ok(workouts)
    }

    /// List workouts of a difficulty
    pub async fn list_by_difficulty(
        pool: &PgPool,
        difficulty: Difficulty,
    ) -> Result<Vec<WorkoutRecord>, ApiError> {
        let workouts = WorkoutRepository::list_by_difficulty(pool, difficulty)
            .await
            .map_err(ApiError::Internal)?;
        Ok(workouts)
    }

    /// List global workouts
    pub async fn list_global(pool: &PgPool) -> Result<Vec<WorkoutRecord>, ApiError> {
        let workouts = WorkoutRepository::list_global(pool)
            .await
            .map_err(ApiError::Internal)?;
        Ok(workouts)
    }

    /// List the workouts a user owns
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<WorkoutRecord>, ApiError> {
        Self::ensure_user_exists(pool, user_id).await?;

        let workouts = WorkoutRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        Ok(workouts)
    }

    /// List the workouts available to a user: global plus their own
    pub async fn list_available_to_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<WorkoutRecord>, ApiError> {
        Self::ensure_user_exists(pool, user_id).await?;

        let workouts = WorkoutRepository::list_available_to_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        Ok(workouts)
    }

    async fn ensure_user_exists(pool: &PgPool, user_id: Uuid) -> Result<(), ApiError> {
        let exists = UserRepository::exists(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        if !exists {
            return Err(ApiError::NotFound("User not found".to_string()));
        }
        Ok(())
    }
}
