//! Exercise repository - database operations for workout exercises

use anyhow::Result;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Exercise record from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseRecord {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<Decimal>,
}

/// Input for creating a new exercise
#[derive(Debug, Clone)]
pub struct CreateExercise {
    pub workout_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<Decimal>,
}

/// Input for partially updating an exercise
#[derive(Debug, Clone, Default)]
pub struct UpdateExercise {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<Decimal>,
}

/// Exercise repository
pub struct ExerciseRepository;

impl ExerciseRepository {
    /// Create a new exercise attached to a workout
    pub async fn create(pool: &PgPool, input: CreateExercise) -> Result<ExerciseRecord> {
        let exercise = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            INSERT INTO exercises (workout_id, name, description, sets, reps, duration_seconds, weight)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, workout_id, name, description, sets, reps, duration_seconds, weight
            "#,
        )
        .bind(input.workout_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.sets)
        .bind(input.reps)
        .bind(input.duration_seconds)
        .bind(input.weight)
        .fetch_one(pool)
        .await?;

        Ok(exercise)
    }

    /// Find exercise by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ExerciseRecord>> {
        let exercise = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, workout_id, name, description, sets, reps, duration_seconds, weight
            FROM exercises
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(exercise)
    }

    /// List all exercises belonging to a workout
    pub async fn list_by_workout(pool: &PgPool, workout_id: Uuid) -> Result<Vec<ExerciseRecord>> {
        let exercises = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, workout_id, name, description, sets, reps, duration_seconds, weight
            FROM exercises
            WHERE workout_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(workout_id)
        .fetch_all(pool)
        .await?;

        Ok(exercises)
    }

    /// Partially update an exercise
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateExercise,
    ) -> Result<Option<ExerciseRecord>> {
        let exercise = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            UPDATE exercises SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                sets = COALESCE($4, sets),
                reps = COALESCE($5, reps),
                duration_seconds = COALESCE($6, duration_seconds),
                weight = COALESCE($7, weight)
            WHERE id = $1
            RETURNING id, workout_id, name, description, sets, reps, duration_seconds, weight
            "#,
        )
        .bind(id)
        .bind(updates.name)
        .bind(updates.description)
        .bind(updates.sets)
        .bind(updates.reps)
        .bind(updates.duration_seconds)
        .bind(updates.weight)
        .fetch_optional(pool)
        .await?;

        Ok(exercise)
    }

    /// Delete an exercise
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
