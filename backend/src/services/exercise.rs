//! Exercise service - exercises attached to a workout

use crate::error::ApiError;
use crate::repositories::{
    CreateExercise, ExerciseRecord, ExerciseRepository, UpdateExercise, WorkoutRepository,
};
use sqlx::PgPool;
use uuid::Uuid;

/// Exercise service
pub struct ExerciseService;

impl ExerciseService {
    /// List the exercises of a workout
    pub async fn list_for_workout(
        pool: &PgPool,
        workout_id: Uuid,
    ) -> Result<Vec<ExerciseRecord>, ApiError> {
        let exists = WorkoutRepository::exists(pool, workout_id)
            .await
            .map_err(ApiError::Internal)?;
        if !exists {
            return Err(ApiError::NotFound("Workout not found".to_string()));
        }

        let exercises = ExerciseRepository::list_by_workout(pool, workout_id)
            .await
            .map_err(ApiError::Internal)?;
        Ok(exercises)
    }

    /// Add an exercise to a workout
    pub async fn create(pool: &PgPool, input: CreateExercise) -> Result<ExerciseRecord, ApiError> {
        if input.name.trim().is_empty() {
            return Err(ApiError::Validation("Exercise name cannot be empty".to_string()));
        }

        let exists = WorkoutRepository::exists(pool, input.workout_id)
            .await
            .map_err(ApiError::Internal)?;
        if !exists {
            return Err(ApiError::BadRequest("Referenced workout does not exist".to_string()));
        }

        let exercise = ExerciseRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        Ok(exercise)
    }

    /// Get an exercise by ID
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<ExerciseRecord, ApiError> {
        let exercise = ExerciseRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Exercise not found".to_string()))?;

        Ok(exercise)
    }

    /// Partially update an exercise
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateExercise,
    ) -> Result<ExerciseRecord, ApiError> {
        if let Some(name) = &updates.name {
            if name.trim().is_empty() {
                return Err(ApiError::Validation("Exercise name cannot be empty".to_string()));
            }
        }

        let exercise = ExerciseRepository::update(pool, id, updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Exercise not found".to_string()))?;

        Ok(exercise)
    }

    /// Delete an exercise
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), ApiError> {
        let deleted = ExerciseRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Exercise not found".to_string()));
        }

        Ok(())
    }
}
