//! Workout session repository - database operations for training sessions
//!
//! A session without a `finished_at` timestamp is still in progress.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Workout session record from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SessionRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub workout_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
    pub notes: Option<String>,
}

impl SessionRecord {
    /// True while the session has not been completed
    pub fn is_in_progress(&self) -> bool {
        self.finished_at.is_none()
    }
}

/// Input for creating a new session
///
/// `started_at` falls back to the database clock when None.
#[derive(Debug, Clone)]
pub struct CreateSession {
    pub user_id: Uuid,
    pub workout_id: Uuid,
    pub started_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
    pub notes: Option<String>,
}

/// Input for partially updating a session
#[derive(Debug, Clone, Default)]
pub struct UpdateSession {
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
    pub notes: Option<String>,
}

/// Workout session repository
pub struct WorkoutSessionRepository;

impl WorkoutSessionRepository {
    /// Create a new session
    pub async fn create(pool: &PgPool, input: CreateSession) -> Result<SessionRecord> {
        let session = sqlx::query_as::<_, SessionRecord>(
            r#"
            INSERT INTO workout_sessions
                (user_id, workout_id, started_at, duration_minutes, calories_burned, notes)
            VALUES ($1, $2, COALESCE($3, NOW()), $4, $5, $6)
            RETURNING id, user_id, workout_id, started_at, finished_at,
                      duration_minutes, calories_burned, notes
            "#,
        )
        .bind(input.user_id)
        .bind(input.workout_id)
        .bind(input.started_at)
        .bind(input.duration_minutes)
        .bind(input.calories_burned)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;

        Ok(session)
    }

    /// List all sessions
    pub async fn list(pool: &PgPool) -> Result<Vec<SessionRecord>> {
        let sessions = sqlx::query_as::<_, SessionRecord>(
            r#"
            SELECT id, user_id, workout_id, started_at, finished_at,
                   duration_minutes, calories_burned, notes
            FROM workout_sessions
            ORDER BY started_at DESC, id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(sessions)
    }

    /// Find session by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<SessionRecord>> {
        let session = sqlx::query_as::<_, SessionRecord>(
            r#"
            SELECT id, user_id, workout_id, started_at, finished_at,
                   duration_minutes, calories_burned, notes
            FROM workout_sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(session)
    }

    /// List a user's sessions, most recently started first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<SessionRecord>> {
        let sessions = sqlx::query_as::<_, SessionRecord>(
            r#"
            SELECT id, user_id, workout_id, started_at, finished_at,
                   duration_minutes, calories_burned, notes
            FROM workout_sessions
            WHERE user_id = $1
            ORDER BY started_at DESC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(sessions)
    }

    /// List all sessions that reference a workout
    pub async fn list_by_workout(pool: &PgPool, workout_id: Uuid) -> Result<Vec<SessionRecord>> {
        let sessions = sqlx::query_as::<_, SessionRecord>(
            r#"
            SELECT id, user_id, workout_id, started_at, finished_at,
                   duration_minutes, calories_burned, notes
            FROM workout_sessions
            WHERE workout_id = $1
            ORDER BY started_at DESC, id ASC
            "#,
        )
        .bind(workout_id)
        .fetch_all(pool)
        .await?;

        Ok(sessions)
    }

    /// Partially update a session
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateSession,
    ) -> Result<Option<SessionRecord>> {
        let session = sqlx::query_as::<_, SessionRecord>(
            r#"
            UPDATE workout_sessions SET
                started_at = COALESCE($2, started_at),
                finished_at = COALESCE($3, finished_at),
                duration_minutes = COALESCE($4, duration_minutes),
                calories_burned = COALESCE($5, calories_burned),
                notes = COALESCE($6, notes)
            WHERE id = $1
            RETURNING id, user_id, workout_id, started_at, finished_at,
                      duration_minutes, calories_burned, notes
            "#,
        )
        .bind(id)
        .bind(updates.started_at)
        .bind(updates.finished_at)
        .bind(updates.duration_minutes)
        .bind(updates.calories_burned)
        .bind(updates.notes)
        .fetch_optional(pool)
        .await?;

        Ok(session)
    }

    /// Mark a session complete, leaving every other field untouched
    pub async fn complete(pool: &PgPool, id: Uuid) -> Result<Option<SessionRecord>> {
        let session = sqlx::query_as::<_, SessionRecord>(
            r#"
            UPDATE workout_sessions SET finished_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, workout_id, started_at, finished_at,
                      duration_minutes, calories_burned, notes
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(session)
    }

    /// Delete a session
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM workout_sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_without_finish_is_in_progress() {
        let session = SessionRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            workout_id: Uuid::new_v4(),
            started_at: Utc::now(),
            finished_at: None,
            duration_minutes: None,
            calories_burned: None,
            notes: None,
        };
        assert!(session.is_in_progress());

        let finished = SessionRecord {
            finished_at: Some(Utc::now()),
            ..session
        };
        assert!(!finished.is_in_progress());
    }
}
