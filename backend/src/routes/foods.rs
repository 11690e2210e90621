//! Food API routes

use crate::error::ApiError;
use crate::repositories::{CreateFood, FoodRecord, UpdateFood};
use crate::services::FoodService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;
use vitalyou_shared::types::{CreateFoodRequest, FoodResponse, FoodSearchQuery, UpdateFoodRequest};
use vitalyou_shared::validation;

use super::{dec_to_f64, f64_to_dec};

/// Create food routes
pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_foods).post(create_food))
        .route("/search", get(search_foods))
        .route("/:id", get(get_food).put(update_food).delete(delete_food))
}

pub(super) fn to_response(food: FoodRecord) -> FoodResponse {
    FoodResponse {
        id: food.id.to_string(),
        name: food.name,
        calories: food.calories.map(dec_to_f64),
        protein_g: food.protein_g.map(dec_to_f64),
        carbs_g: food.carbs_g.map(dec_to_f64),
        fat_g: food.fat_g.map(dec_to_f64),
        serving_size: food.serving_size,
        created_at: food.created_at,
    }
}

/// GET /api/v1/foods - List all foods ordered by name
async fn list_foods(State(state): State<AppState>) -> Result<Json<Vec<FoodResponse>>, ApiError> {
    let foods = FoodService::list(state.db()).await?;
    Ok(Json(foods.into_iter().map(to_response).collect()))
}

/// GET /api/v1/foods/:id - Get a food
async fn get_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FoodResponse>, ApiError> {
    let food_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid food ID".to_string()))?;

    let food = FoodService::get(state.db(), food_id).await?;
    Ok(Json(to_response(food)))
}

/// POST /api/v1/foods - Create a food
async fn create_food(
    State(state): State<AppState>,
    Json(req): Json<CreateFoodRequest>,
) -> Result<Json<FoodResponse>, ApiError> {
    if let Some(calories) = req.calories {
        validation::validate_calories(calories).map_err(ApiError::Validation)?;
    }

    let input = CreateFood {
        name: req.name,
        calories: req.calories.map(f64_to_dec),
        protein_g: req.protein_g.map(f64_to_dec),
        carbs_g: req.carbs_g.map(f64_to_dec),
        fat_g: req.fat_g.map(f64_to_dec),
        serving_size: req.serving_size,
    };

    let food = FoodService::create(state.db(), input).await?;
    Ok(Json(to_response(food)))
}

/// PUT /api/v1/foods/:id - Partially update a food
async fn update_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateFoodRequest>,
) -> Result<Json<FoodResponse>, ApiError> {
    let food_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid food ID".to_string()))?;
    if let Some(calories) = req.calories {
        validation::validate_calories(calories).map_err(ApiError::Validation)?;
    }

    let updates = UpdateFood {
        name: req.name,
        calories: req.calories.map(f64_to_dec),
        protein_g: req.protein_g.map(f64_to_dec),
        carbs_g: req.carbs_g.map(f64_to_dec),
        fat_g: req.fat_g.map(f64_to_dec),
        serving_size: req.serving_size,
    };

    let food = FoodService::update(state.db(), food_id, updates).await?;
    Ok(Json(to_response(food)))
}

/// DELETE /api/v1/foods/:id - Delete a food
async fn delete_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<()>, ApiError> {
    let food_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid food ID".to_string()))?;

    FoodService::delete(state.db(), food_id).await?;
    Ok(Json(()))
}

/// GET /api/v1/foods/search?q= - Search foods by name
async fn search_foods(
    State(state): State<AppState>,
    Query(query): Query<FoodSearchQuery>,
) -> Result<Json<Vec<FoodResponse>>, ApiError> {
    let foods = FoodService::search(state.db(), &query.q).await?;
    Ok(Json(foods.into_iter().map(to_response).collect()))
}
