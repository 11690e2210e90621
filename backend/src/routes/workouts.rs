//! Workout API routes
//!
//! Includes the visibility views (global, per-user, available-to-user) and
//! the exercises nested under a workout.

use crate::error::ApiError;
use crate::repositories::{CreateExercise, CreateWorkout, UpdateWorkout, WorkoutRecord};
use crate::services::{ExerciseService, WorkoutService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::str::FromStr;
use uuid::Uuid;
use vitalyou_shared::models::{Category, Difficulty, WorkoutOwner};
use vitalyou_shared::types::{
    CreateExerciseRequest, CreateWorkoutRequest, ExerciseResponse, UpdateWorkoutRequest,
    WorkoutResponse,
};
use vitalyou_shared::validation;

use super::{exercises, f64_to_dec};

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route("/global", get(global_workouts))
        .route("/category/:category", get(workouts_by_category))
        .route("/difficulty/:difficulty", get(workouts_by_difficulty))
        .route("/user/:user_id", get(user_workouts))
        .route("/available/:user_id", get(available_workouts))
        .route(
            "/:id",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
        .route(
            "/:id/exercises",
            get(list_workout_exercises).post(create_workout_exercise),
        )
}

fn to_response(workout: WorkoutRecord) -> WorkoutResponse {
    WorkoutResponse {
        id: workout.id.to_string(),
        name: workout.name.clone(),
        description: workout.description.clone(),
        duration_minutes: workout.duration_minutes,
        difficulty: workout.difficulty,
        category: workout.category,
        owner: workout.owner(),
        created_at: workout.created_at,
    }
}

/// Parse a path token into an enum filter; unknown tokens mean no match
fn parse_token<T: FromStr>(token: &str) -> Option<T> {
    token.parse().ok()
}

/// GET /api/v1/workouts - List all workouts
async fn list_workouts(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkoutResponse>>, ApiError> {
    let workouts = WorkoutService::list(state.db()).await?;
    Ok(Json(workouts.into_iter().map(to_response).collect()))
}

/// GET /api/v1/workouts/:id - Get a workout
async fn get_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WorkoutResponse>, ApiError> {
    let workout_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid workout ID".to_string()))?;

    let workout = WorkoutService::get(state.db(), workout_id).await?;
    Ok(Json(to_response(workout)))
}

/// POST /api/v1/workouts - Create a workout
async fn create_workout(
    State(state): State<AppState>,
    Json(req): Json<CreateWorkoutRequest>,
) -> Result<Json<WorkoutResponse>, ApiError> {
    let owner = match req.user_id {
        Some(id) => {
            let user_id = Uuid::parse_str(&id)
                .map_err(|_| ApiError::Validation("Invalid user ID".to_string()))?;
            WorkoutOwner::OwnedBy(user_id)
        }
        None => WorkoutOwner::Global,
    };

    if let Some(minutes) = req.duration_minutes {
        validation::validate_duration_minutes(minutes).map_err(ApiError::Validation)?;
    }

    let input = CreateWorkout {
        name: req.name,
        description: req.description,
        duration_minutes: req.duration_minutes,
        difficulty: req.difficulty,
        category: req.category,
        owner,
    };

    let workout = WorkoutService::create(state.db(), input).await?;
    Ok(Json(to_response(workout)))
}

/// PUT /api/v1/workouts/:id - Partially update a workout
async fn update_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateWorkoutRequest>,
) -> Result<Json<WorkoutResponse>, ApiError> {
    let workout_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid workout ID".to_string()))?;

    if let Some(minutes) = req.duration_minutes {
        validation::validate_duration_minutes(minutes).map_err(ApiError::Validation)?;
    }

    let updates = UpdateWorkout {
        name: req.name,
        description: req.description,
        duration_minutes: req.duration_minutes,
        difficulty: req.difficulty,
        category: req.category,
    };

    let workout = WorkoutService::update(state.db(), workout_id, updates).await?;
    Ok(Json(to_response(workout)))
}

/// DELETE /api/v1/workouts/:id - Delete a workout and its exercises
async fn delete_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<()>, ApiError> {
    let workout_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid workout ID".to_string()))?;

    WorkoutService::delete(state.db(), workout_id).await?;
    Ok(Json(()))
}

/// GET /api/v1/workouts/category/:category - Filter by category
///
/// An unrecognized category token yields an empty list, not an error.
async fn workouts_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<WorkoutResponse>>, ApiError> {
    let Some(category) = parse_token::<Category>(&category) else {
        return Ok(Json(Vec::new()));
    };

    let workouts = WorkoutService::list_by_category(state.db(), category).await?;
    Ok(Json(workouts.into_iter().map(to_response).collect()))
}

/// GET /api/v1/workouts/difficulty/:difficulty - Filter by difficulty
///
/// An unrecognized difficulty token yields an empty list, not an error.
async fn workouts_by_difficulty(
    State(state): State<AppState>,
    Path(difficulty): Path<String>,
) -> Result<Json<Vec<WorkoutResponse>>, ApiError> {
    let Some(difficulty) = parse_token::<Difficulty>(&difficulty) else {
        return Ok(Json(Vec::new()));
    };

    let workouts = WorkoutService::list_by_difficulty(state.db(), difficulty).await?;
    Ok(Json(workouts.into_iter().map(to_response).collect()))
}

/// GET /api/v1/workouts/global - Workouts visible to everyone
async fn global_workouts(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkoutResponse>>, ApiError> {
    let workouts = WorkoutService::list_global(state.db()).await?;
    Ok(Json(workouts.into_iter().map(to_response).collect()))
}

/// GET /api/v1/workouts/user/:user_id - Workouts a user owns
async fn user_workouts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<WorkoutResponse>>, ApiError> {
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|_| ApiError::Validation("Invalid user ID".to_string()))?;

    let workouts = WorkoutService::list_by_user(state.db(), user_id).await?;
    Ok(Json(workouts.into_iter().map(to_response).collect()))
}

/// GET /api/v1/workouts/available/:user_id - Global plus the user's own
async fn available_workouts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<WorkoutResponse>>, ApiError> {
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|_| ApiError::Validation("Invalid user ID".to_string()))?;

    let workouts = WorkoutService::list_available_to_user(state.db(), user_id).await?;
    Ok(Json(workouts.into_iter().map(to_response).collect()))
}

/// GET /api/v1/workouts/:id/exercises - List a workout's exercises
async fn list_workout_exercises(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ExerciseResponse>>, ApiError> {
    let workout_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid workout ID".to_string()))?;

    let exercises = ExerciseService::list_for_workout(state.db(), workout_id).await?;
    Ok(Json(
        exercises.into_iter().map(exercises::to_response).collect(),
    ))
}

/// POST /api/v1/workouts/:id/exercises - Add an exercise to a workout
async fn create_workout_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CreateExerciseRequest>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let workout_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid workout ID".to_string()))?;

    let input = CreateExercise {
        workout_id,
        name: req.name,
        description: req.description,
        sets: req.sets,
        reps: req.reps,
        duration_seconds: req.duration_seconds,
        weight: req.weight.map(f64_to_dec),
    };

    let exercise = ExerciseService::create(state.db(), input).await?;
    Ok(Json(exercises::to_response(exercise)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_filter_tokens_parse_to_none() {
        assert!(parse_token::<Category>("yoga").is_none());
        assert!(parse_token::<Difficulty>("expert").is_none());
    }

    #[test]
    fn known_filter_tokens_parse_to_filters() {
        assert_eq!(parse_token::<Category>("hiit"), Some(Category::Hiit));
        assert_eq!(
            parse_token::<Difficulty>("BEGINNER"),
            Some(Difficulty::Beginner)
        );
    }
}
