//! Workout repository - database operations for workouts
//!
//! A workout row with a NULL `user_id` is global. The visibility queries
//! (`list_global`, `list_by_user`, `list_available_to_user`) are explicit
//! methods, one per documented predicate.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use vitalyou_shared::models::{Category, Difficulty, WorkoutOwner};

/// Workout record from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<Category>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl WorkoutRecord {
    /// The owner of this workout
    pub fn owner(&self) -> WorkoutOwner {
        WorkoutOwner::from_column(self.user_id)
    }
}

/// Input for creating a new workout
#[derive(Debug, Clone)]
pub struct CreateWorkout {
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<Category>,
    pub owner: WorkoutOwner,
}

/// Input for partially updating a workout
///
/// Ownership is fixed at creation and cannot be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkout {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<Category>,
}

/// Workout repository
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Create a new workout
    pub async fn create(pool: &PgPool, input: CreateWorkout) -> Result<WorkoutRecord> {
        let workout = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            INSERT INTO workouts (name, description, duration_minutes, difficulty, category, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, description, duration_minutes, difficulty, category,
                      user_id, created_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.duration_minutes)
        .bind(input.difficulty)
        .bind(input.category)
        .bind(input.owner.as_column())
        .fetch_one(pool)
        .await?;

        Ok(workout)
    }

    /// List all workouts
    pub async fn list(pool: &PgPool) -> Result<Vec<WorkoutRecord>> {
        let workouts = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, name, description, duration_minutes, difficulty, category,
                   user_id, created_at
            FROM workouts
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(workouts)
    }

    /// Find workout by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<WorkoutRecord>> {
        let workout = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, name, description, duration_minutes, difficulty, category,
                   user_id, created_at
            FROM workouts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(workout)
    }

    /// Check if a workout exists
    pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM workouts WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(result)
    }

    /// List workouts with an exact category match
    pub async fn list_by_category(pool: &PgPool, category: Category) -> Result<Vec<WorkoutRecord>> {
        let workouts = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, name, description, duration_minutes, difficulty, category,
                   user_id, created_at
            FROM workouts
            WHERE category = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(category)
        .fetch_all(pool)
        .await?;

        Ok(workouts)
    }

    /// List workouts with an exact difficulty match
    pub async fn list_by_difficulty(
        pool: &PgPool,
        difficulty: Difficulty,
    ) -> Result<Vec<WorkoutRecord>> {
        let workouts = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, name, description, duration_minutes, difficulty, category,
                   user_id, created_at
            FROM workouts
            WHERE difficulty = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(difficulty)
        .fetch_all(pool)
        .await?;

        Ok(workouts)
    }

    /// List global workouts (no owner)
    pub async fn list_global(pool: &PgPool) -> Result<Vec<WorkoutRecord>> {
        let workouts = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, name, description, duration_minutes, difficulty, category,
                   user_id, created_at
            FROM workouts
            WHERE user_id IS NULL
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(workouts)
    }

    /// List workouts owned by a specific user
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<WorkoutRecord>> {
        let workouts = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, name, description, duration_minutes, difficulty, category,
                   user_id, created_at
            FROM workouts
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(workouts)
    }

    /// List workouts available to a user: global plus the user's own
    pub async fn list_available_to_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<WorkoutRecord>> {
        let workouts = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, name, description, duration_minutes, difficulty, category,
                   user_id, created_at
            FROM workouts
            WHERE user_id IS NULL OR user_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(workouts)
    }

    /// Partially update a workout
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateWorkout,
    ) -> Result<Option<WorkoutRecord>> {
        let workout = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            UPDATE workouts SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                duration_minutes = COALESCE($4, duration_minutes),
                difficulty = COALESCE($5, difficulty),
                category = COALESCE($6, category)
            WHERE id = $1
            RETURNING id, name, description, duration_minutes, difficulty, category,
                      user_id, created_at
            "#,
        )
        .bind(id)
        .bind(updates.name)
        .bind(updates.description)
        .bind(updates.duration_minutes)
        .bind(updates.difficulty)
        .bind(updates.category)
        .fetch_optional(pool)
        .await?;

        Ok(workout)
    }

    /// Delete a workout; its exercises are removed by the schema cascade
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
