//! Workout session API routes

use crate::error::ApiError;
use crate::repositories::{CreateSession, SessionRecord, UpdateSession};
use crate::services::WorkoutSessionService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use uuid::Uuid;
use vitalyou_shared::types::{CreateSessionRequest, SessionResponse, UpdateSessionRequest};
use vitalyou_shared::validation;

/// Create workout session routes
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sessions).post(create_session))
        .route("/user/:user_id", get(sessions_by_user))
        .route("/workout/:workout_id", get(sessions_by_workout))
        .route(
            "/:id",
            get(get_session).put(update_session).delete(delete_session),
        )
        .route("/:id/complete", put(complete_session))
}

fn to_response(session: SessionRecord) -> SessionResponse {
    let in_progress = session.is_in_progress();
    SessionResponse {
        id: session.id.to_string(),
        user_id: session.user_id.to_string(),
        workout_id: session.workout_id.to_string(),
        started_at: session.started_at,
        finished_at: session.finished_at,
        in_progress,
        duration_minutes: session.duration_minutes,
        calories_burned: session.calories_burned,
        notes: session.notes,
    }
}

/// GET /api/v1/workout-sessions - List all sessions
async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionResponse>>, ApiError> {
    let sessions = WorkoutSessionService::list(state.db()).await?;
    Ok(Json(sessions.into_iter().map(to_response).collect()))
}

/// GET /api/v1/workout-sessions/:id - Get a session
async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid session ID".to_string()))?;

    let session = WorkoutSessionService::get(state.db(), session_id).await?;
    Ok(Json(to_response(session)))
}

/// POST /api/v1/workout-sessions - Start a session
async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let user_id = Uuid::parse_str(&req.user_id)
        .map_err(|_| ApiError::Validation("Invalid user ID".to_string()))?;
    let workout_id = Uuid::parse_str(&req.workout_id)
        .map_err(|_| ApiError::Validation("Invalid workout ID".to_string()))?;
    if let Some(minutes) = req.duration_minutes {
        validation::validate_duration_minutes(minutes).map_err(ApiError::Validation)?;
    }

    let input = CreateSession {
        user_id,
        workout_id,
        started_at: req.started_at,
        duration_minutes: req.duration_minutes,
        calories_burned: req.calories_burned,
        notes: req.notes,
    };

    let session = WorkoutSessionService::create(state.db(), input).await?;
    Ok(Json(to_response(session)))
}

/// PUT /api/v1/workout-sessions/:id - Partially update a session
async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateSessionRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid session ID".to_string()))?;
    if let Some(minutes) = req.duration_minutes {
        validation::validate_duration_minutes(minutes).map_err(ApiError::Validation)?;
    }

    let updates = UpdateSession {
        started_at: req.started_at,
        finished_at: req.finished_at,
        duration_minutes: req.duration_minutes,
        calories_burned: req.calories_burned,
        notes: req.notes,
    };

    let session = WorkoutSessionService::update(state.db(), session_id, updates).await?;
    Ok(Json(to_response(session)))
}

/// DELETE /api/v1/workout-sessions/:id - Delete a session
async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<()>, ApiError> {
    let session_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid session ID".to_string()))?;

    WorkoutSessionService::delete(state.db(), session_id).await?;
    Ok(Json(()))
}

/// GET /api/v1/workout-sessions/user/:user_id - A user's sessions
async fn sessions_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<SessionResponse>>, ApiError> {
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|_| ApiError::Validation("Invalid user ID".to_string()))?;

    let sessions = WorkoutSessionService::list_by_user(state.db(), user_id).await?;
    Ok(Json(sessions.into_iter().map(to_response).collect()))
}

/// GET /api/v1/workout-sessions/workout/:workout_id - Sessions of a workout
async fn sessions_by_workout(
    State(state): State<AppState>,
    Path(workout_id): Path<String>,
) -> Result<Json<Vec<SessionResponse>>, ApiError> {
    let workout_id = Uuid::parse_str(&workout_id)
        .map_err(|_| ApiError::Validation("Invalid workout ID".to_string()))?;

    let sessions = WorkoutSessionService::list_by_workout(state.db(), workout_id).await?;
    Ok(Json(sessions.into_iter().map(to_response).collect()))
}

/// PUT /api/v1/workout-sessions/:id/complete - Mark a session complete
async fn complete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid session ID".to_string()))?;

    let session = WorkoutSessionService::complete(state.db(), session_id).await?;
    Ok(Json(to_response(session)))
}
