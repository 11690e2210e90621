//! User service - account management and email login
//!
//! There is no credential verification in this system: login resolves the
//! account by email and the password field is stored exactly as received.

use crate::error::ApiError;
use crate::repositories::{CreateUser, UpdateUser, UserRecord, UserRepository};
use sqlx::PgPool;
use uuid::Uuid;
use validator::ValidateEmail;

/// User service
pub struct UserService;

impl UserService {
    /// List all users
    pub async fn list(pool: &PgPool) -> Result<Vec<UserRecord>, ApiError> {
        let users = UserRepository::list(pool).await.map_err(ApiError::Internal)?;
        Ok(users)
    }

    /// Get a user by ID
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<UserRecord, ApiError> {
        let user = UserRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(user)
    }

    /// Create a new user
    ///
    /// Nothing beyond presence is enforced; registering an email twice
    /// creates two accounts.
    pub async fn create(pool: &PgPool, input: CreateUser) -> Result<UserRecord, ApiError> {
        if !input.email.validate_email() {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }

        let user = UserRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        Ok(user)
    }

    /// Partially update a user
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateUser,
    ) -> Result<UserRecord, ApiError> {
        if let Some(email) = &updates.email {
            if !email.validate_email() {
                return Err(ApiError::Validation("Invalid email format".to_string()));
            }
        }

        let user = UserRepository::update(pool, id, updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(user)
    }

    /// Delete a user
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), ApiError> {
        let deleted = UserRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("User not found".to_string()));
        }

        Ok(())
    }

    /// Look up the account for a login request
    pub async fn login(pool: &PgPool, email: &str) -> Result<UserRecord, ApiError> {
        let user = UserRepository::find_by_email(pool, email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(user)
    }
}
