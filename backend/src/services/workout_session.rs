//! Workout session service - session lifecycle
//!
//! A session is created in progress and stays so until `complete` stamps
//! its finish time.

use crate::error::ApiError;
use crate::repositories::{
    CreateSession, SessionRecord, UpdateSession, UserRepository, WorkoutRepository,
    WorkoutSessionRepository,
};
use sqlx::PgPool;
use uuid::Uuid;

/// Workout session service
pub struct WorkoutSessionService;

impl WorkoutSessionService {
    /// List all sessions
    pub async fn list(pool: &PgPool) -> Result<Vec<SessionRecord>, ApiError> {
        let sessions = WorkoutSessionRepository::list(pool)
            .await
            .map_err(ApiError::Internal)?;
        Ok(sessions)
    }

    /// Get a session by ID
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<SessionRecord, ApiError> {
        let session = WorkoutSessionRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Workout session not found".to_string()))?;

        Ok(session)
    }

    /// Start a new session
    ///
    /// Both referenced entities must exist before anything is written.
    pub async fn create(pool: &PgPool, input: CreateSession) -> Result<SessionRecord, ApiError> {
        let user_exists = UserRepository::exists(pool, input.user_id)
            .await
            .map_err(ApiError::Internal)?;
        if !user_exists {
            return Err(ApiError::BadRequest("Referenced user does not exist".to_string()));
        }

        let workout_exists = WorkoutRepository::exists(pool, input.workout_id)
            .await
            .map_err(ApiError::Internal)?;
        if !workout_exists {
            return Err(ApiError::BadRequest("Referenced workout does not exist".to_string()));
        }

        let session = WorkoutSessionRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        Ok(session)
    }

    /// Partially update a session
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateSession,
    ) -> Result<SessionRecord, ApiError> {
        let session = WorkoutSessionRepository::update(pool, id, updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Workout session not found".to_string()))?;

        Ok(session)
    }

    /// Delete a session
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), ApiError> {
        let deleted = WorkoutSessionRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Workout session not found".to_string()));
        }

        Ok(())
    }

    /// List a user's sessions, most recently started first
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<SessionRecord>, ApiError> {
        let sessions = WorkoutSessionRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        Ok(sessions)
    }

    /// List the sessions that reference a workout
    pub async fn list_by_workout(
        pool: &PgPool,
        workout_id: Uuid,
    ) -> Result<Vec<SessionRecord>, ApiError> {
        let sessions = WorkoutSessionRepository::list_by_workout(pool, workout_id)
            .await
            .map_err(ApiError::Internal)?;
        Ok(sessions)
    }

    /// Mark a session complete
    ///
    /// Stamps `finished_at` with the current time and changes nothing else.
    pub async fn complete(pool: &PgPool, id: Uuid) -> Result<SessionRecord, ApiError> {
        let session = WorkoutSessionRepository::complete(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Workout session not found".to_string()))?;

        Ok(session)
    }
}
