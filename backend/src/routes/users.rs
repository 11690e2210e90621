//! User API routes

use crate::error::ApiError;
use crate::repositories::{CreateUser, UpdateUser, UserRecord};
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;
use vitalyou_shared::types::{CreateUserRequest, LoginRequest, UpdateUserRequest, UserResponse};

use super::{dec_to_f64, f64_to_dec};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

fn to_response(user: UserRecord) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        email: user.email,
        name: user.name,
        age: user.age,
        weight: user.weight.map(dec_to_f64),
        height: user.height.map(dec_to_f64),
        fitness_goal: user.fitness_goal,
        created_at: user.created_at,
    }
}

/// GET /api/v1/users - List all users
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserService::list(state.db()).await?;
    Ok(Json(users.into_iter().map(to_response).collect()))
}

/// GET /api/v1/users/:id - Get a user
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid user ID".to_string()))?;

    let user = UserService::get(state.db(), user_id).await?;
    Ok(Json(to_response(user)))
}

/// POST /api/v1/users - Create a user
async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let input = CreateUser {
        email: req.email,
        name: req.name,
        password: req.password,
        age: req.age,
        weight: req.weight.map(f64_to_dec),
        height: req.height.map(f64_to_dec),
        fitness_goal: req.fitness_goal,
    };

    let user = UserService::create(state.db(), input).await?;
    Ok(Json(to_response(user)))
}

/// POST /api/v1/users/register - Register a user
///
/// Same contract as plain creation; kept as its own path for clients that
/// speak the original API.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let input = CreateUser {
        email: req.email,
        name: req.name,
        password: req.password,
        age: req.age,
        weight: req.weight.map(f64_to_dec),
        height: req.height.map(f64_to_dec),
        fitness_goal: req.fitness_goal,
    };

    let user = UserService::create(state.db(), input).await?;
    Ok(Json(to_response(user)))
}

/// PUT /api/v1/users/:id - Partially update a user
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid user ID".to_string()))?;

    let updates = UpdateUser {
        email: req.email,
        name: req.name,
        password: req.password,
        age: req.age,
        weight: req.weight.map(f64_to_dec),
        height: req.height.map(f64_to_dec),
        fitness_goal: req.fitness_goal,
    };

    let user = UserService::update(state.db(), user_id, updates).await?;
    Ok(Json(to_response(user)))
}

/// DELETE /api/v1/users/:id - Delete a user
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<()>, ApiError> {
    let user_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid user ID".to_string()))?;

    UserService::delete(state.db(), user_id).await?;
    Ok(Json(()))
}

/// POST /api/v1/users/login - Look up the account for an email
///
/// The password travels with the request but is not checked; a missing
/// account is a plain not-found.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserService::login(state.db(), &req.email).await?;
    Ok(Json(to_response(user)))
}
