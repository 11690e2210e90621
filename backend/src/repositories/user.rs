//! User repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub password: Option<String>,
    pub age: Option<i32>,
    pub weight: Option<Decimal>,
    pub height: Option<Decimal>,
    pub fitness_goal: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub name: Option<String>,
    pub password: Option<String>,
    pub age: Option<i32>,
    pub weight: Option<Decimal>,
    pub height: Option<Decimal>,
    pub fitness_goal: Option<String>,
}

/// Input for partially updating a user
///
/// A `None` field leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub age: Option<i32>,
    pub weight: Option<Decimal>,
    pub height: Option<Decimal>,
    pub fitness_goal: Option<String>,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(pool: &PgPool, input: CreateUser) -> Result<UserRecord> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, name, password, age, weight, height, fitness_goal)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, email, name, password, age, weight, height, fitness_goal, created_at
            "#,
        )
        .bind(&input.email)
        .bind(&input.name)
        .bind(&input.password)
        .bind(input.age)
        .bind(input.weight)
        .bind(input.height)
        .bind(&input.fitness_goal)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// List all users
    pub async fn list(pool: &PgPool) -> Result<Vec<UserRecord>> {
        let users = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, name, password, age, weight, height, fitness_goal, created_at
            FROM users
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, name, password, age, weight, height, fitness_goal, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Find user by email
    ///
    /// Email is not unique in the store; when several accounts share one,
    /// the earliest registration wins.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, name, password, age, weight, height, fitness_goal, created_at
            FROM users
            WHERE email = $1
            ORDER BY created_at ASC, id ASC
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Check if a user exists
    pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }

    /// Partially update a user
    ///
    /// Returns None when no user with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateUser,
    ) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users SET
                email = COALESCE($2, email),
                name = COALESCE($3, name),
                password = COALESCE($4, password),
                age = COALESCE($5, age),
                weight = COALESCE($6, weight),
                height = COALESCE($7, height),
                fitness_goal = COALESCE($8, fitness_goal)
            WHERE id = $1
            RETURNING id, email, name, password, age, weight, height, fitness_goal, created_at
            "#,
        )
        .bind(id)
        .bind(updates.email)
        .bind(updates.name)
        .bind(updates.password)
        .bind(updates.age)
        .bind(updates.weight)
        .bind(updates.height)
        .bind(updates.fitness_goal)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Delete a user
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
