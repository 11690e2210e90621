//! Exercise API routes
//!
//! Exercises are created and listed through their workout
//! (`/workouts/:id/exercises`); this module serves the by-id operations.

use crate::error::ApiError;
use crate::repositories::{ExerciseRecord, UpdateExercise};
use crate::services::ExerciseService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;
use vitalyou_shared::types::{ExerciseResponse, UpdateExerciseRequest};

use super::{dec_to_f64, f64_to_dec};

/// Create exercise routes
pub fn exercise_routes() -> Router<AppState> {
    Router::new().route(
        "/:id",
        get(get_exercise).put(update_exercise).delete(delete_exercise),
    )
}

pub(super) fn to_response(exercise: ExerciseRecord) -> ExerciseResponse {
    ExerciseResponse {
        id: exercise.id.to_string(),
        workout_id: exercise.workout_id.to_string(),
        name: exercise.name,
        description: exercise.description,
        sets: exercise.sets,
        reps: exercise.reps,
        duration_seconds: exercise.duration_seconds,
        weight: exercise.weight.map(dec_to_f64),
    }
}

/// GET /api/v1/exercises/:id - Get an exercise
async fn get_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let exercise_id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::Validation("Invalid exercise ID".to_string()))?;

    let exercise = ExerciseService::get(state.db(), exercise_id).await?;
    Ok(Json(to_response(exercise)))
}

/// PUT /api/v1/exercises/:id - Partially update an exercise
async fn update_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateExerciseRequest>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let exercise_id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::Validation("Invalid exercise ID".to_string()))?;

    let updates = UpdateExercise {
        name: req.name,
        description: req.description,
        sets: req.sets,
        reps: req.reps,
        duration_seconds: req.duration_seconds,
        weight: req.weight.map(f64_to_dec),
    };

    let exercise = ExerciseService::update(state.db(), exercise_id, updates).await?;
    Ok(Json(to_response(exercise)))
}

/// DELETE /api/v1/exercises/:id - Delete an exercise
async fn delete_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<()>, ApiError> {
    let exercise_id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::Validation("Invalid exercise ID".to_string()))?;

    ExerciseService::delete(state.db(), exercise_id).await?;
    Ok(Json(()))
}
