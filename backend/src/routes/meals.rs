//! Meal API routes
//!
//! Meal payloads embed the referenced food so clients get the per-serving
//! nutrients without a second request.

use crate::error::ApiError;
use crate::repositories::{MealWithFood, UpdateMeal};
use crate::services::MealService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use uuid::Uuid;
use vitalyou_shared::models::MealType;
use vitalyou_shared::types::{
    CreateMealRequest, DailyNutritionResponse, DateRangeQuery, FoodResponse, MealResponse,
    UpdateMealRequest,
};
use vitalyou_shared::validation;

use super::{dec_to_f64, f64_to_dec};

/// Create meal routes
pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_meals).post(create_meal))
        .route("/user/:user_id", get(meals_by_user))
        .route("/user/:user_id/date/:date", get(meals_by_user_and_date))
        .route("/user/:user_id/type/:meal_type", get(meals_by_user_and_type))
        .route("/user/:user_id/range", get(meals_by_user_in_range))
        .route("/nutrition/daily/:user_id/:date", get(daily_nutrition))
        .route("/:id", get(get_meal).put(update_meal).delete(delete_meal))
}

fn to_response(meal: MealWithFood) -> MealResponse {
    MealResponse {
        id: meal.id.to_string(),
        user_id: meal.user_id.to_string(),
        food: FoodResponse {
            id: meal.food_id.to_string(),
            name: meal.food_name,
            calories: meal.food_calories.map(dec_to_f64),
            protein_g: meal.food_protein_g.map(dec_to_f64),
            carbs_g: meal.food_carbs_g.map(dec_to_f64),
            fat_g: meal.food_fat_g.map(dec_to_f64),
            serving_size: meal.food_serving_size,
            created_at: meal.food_created_at,
        },
        quantity: dec_to_f64(meal.quantity),
        meal_type: meal.meal_type,
        date: meal.meal_date,
        total_calories: meal.total_calories.map(dec_to_f64),
        created_at: meal.created_at,
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    raw.parse::<NaiveDate>()
        .map_err(|_| ApiError::Validation("Invalid date, expected YYYY-MM-DD".to_string()))
}

/// GET /api/v1/meals - List all meals
async fn list_meals(State(state): State<AppState>) -> Result<Json<Vec<MealResponse>>, ApiError> {
    let meals = MealService::list(state.db()).await?;
    Ok(Json(meals.into_iter().map(to_response).collect()))
}

/// GET /api/v1/meals/:id - Get a meal
async fn get_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MealResponse>, ApiError> {
    let meal_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid meal ID".to_string()))?;

    let meal = MealService::get(state.db(), meal_id).await?;
    Ok(Json(to_response(meal)))
}

/// POST /api/v1/meals - Log a meal
///
/// Requires the referenced user and food to exist; a missing reference is
/// rejected before anything is written.
async fn create_meal(
    State(state): State<AppState>,
    Json(req): Json<CreateMealRequest>,
) -> Result<Json<MealResponse>, ApiError> {
    let user_id = Uuid::parse_str(&req.user_id)
        .map_err(|_| ApiError::Validation("Invalid user ID".to_string()))?;
    let food_id = Uuid::parse_str(&req.food_id)
        .map_err(|_| ApiError::Validation("Invalid food ID".to_string()))?;
    validation::validate_quantity(req.quantity).map_err(ApiError::Validation)?;

    let meal = MealService::create(
        state.db(),
        user_id,
        food_id,
        f64_to_dec(req.quantity),
        req.meal_type,
        req.date,
    )
    .await?;

    Ok(Json(to_response(meal)))
}

/// PUT /api/v1/meals/:id - Partially update a meal
async fn update_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateMealRequest>,
) -> Result<Json<MealResponse>, ApiError> {
    let meal_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid meal ID".to_string()))?;

    let food_id = req
        .food_id
        .map(|id| Uuid::parse_str(&id))
        .transpose()
        .map_err(|_| ApiError::Validation("Invalid food ID".to_string()))?;
    if let Some(quantity) = req.quantity {
        validation::validate_quantity(quantity).map_err(ApiError::Validation)?;
    }

    let updates = UpdateMeal {
        food_id,
        quantity: req.quantity.map(f64_to_dec),
        meal_type: req.meal_type,
        meal_date: req.date,
    };

    let meal = MealService::update(state.db(), meal_id, updates).await?;
    Ok(Json(to_response(meal)))
}

/// DELETE /api/v1/meals/:id - Delete a meal
async fn delete_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<()>, ApiError> {
    let meal_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid meal ID".to_string()))?;

    MealService::delete(state.db(), meal_id).await?;
    Ok(Json(()))
}

/// GET /api/v1/meals/user/:user_id - A user's meals, newest first
async fn meals_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<MealResponse>>, ApiError> {
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|_| ApiError::Validation("Invalid user ID".to_string()))?;

    let meals = MealService::list_by_user(state.db(), user_id).await?;
    Ok(Json(meals.into_iter().map(to_response).collect()))
}

/// GET /api/v1/meals/user/:user_id/date/:date - A user's meals on a date
async fn meals_by_user_and_date(
    State(state): State<AppState>,
    Path((user_id, date)): Path<(String, String)>,
) -> Result<Json<Vec<MealResponse>>, ApiError> {
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|_| ApiError::Validation("Invalid user ID".to_string()))?;
    let date = parse_date(&date)?;

    let meals = MealService::list_by_user_and_date(state.db(), user_id, date).await?;
    Ok(Json(meals.into_iter().map(to_response).collect()))
}

/// GET /api/v1/meals/user/:user_id/type/:meal_type - Filter by meal type
///
/// Unlike the workout category filter, an invalid meal type token is an
/// error here.
async fn meals_by_user_and_type(
    State(state): State<AppState>,
    Path((user_id, meal_type)): Path<(String, String)>,
) -> Result<Json<Vec<MealResponse>>, ApiError> {
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|_| ApiError::Validation("Invalid user ID".to_string()))?;
    let meal_type = meal_type
        .parse::<MealType>()
        .map_err(ApiError::Validation)?;

    let meals = MealService::list_by_user_and_meal_type(state.db(), user_id, meal_type).await?;
    Ok(Json(meals.into_iter().map(to_response).collect()))
}

/// GET /api/v1/meals/user/:user_id/range?from=&to= - Inclusive date range
async fn meals_by_user_in_range(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(range): Query<DateRangeQuery>,
) -> Result<Json<Vec<MealResponse>>, ApiError> {
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|_| ApiError::Validation("Invalid user ID".to_string()))?;

    let meals =
        MealService::list_by_user_in_date_range(state.db(), user_id, range.from, range.to).await?;
    Ok(Json(meals.into_iter().map(to_response).collect()))
}

/// GET /api/v1/meals/nutrition/daily/:user_id/:date - Daily totals
async fn daily_nutrition(
    State(state): State<AppState>,
    Path((user_id, date)): Path<(String, String)>,
) -> Result<Json<DailyNutritionResponse>, ApiError> {
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|_| ApiError::Validation("Invalid user ID".to_string()))?;
    let date = parse_date(&date)?;

    let summary = MealService::daily_summary(state.db(), user_id, date).await?;

    Ok(Json(DailyNutritionResponse {
        date: summary.date,
        total_calories: dec_to_f64(summary.total_calories),
        total_protein_g: dec_to_f64(summary.total_protein_g),
        total_carbs_g: dec_to_f64(summary.total_carbs_g),
        total_fat_g: dec_to_f64(summary.total_fat_g),
        meals_count: summary.meals_count,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_parsing_accepts_iso_dates() {
        assert_eq!(
            parse_date("2024-06-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
    }

    #[test]
    fn date_parsing_rejects_garbage() {
        assert!(parse_date("15/06/2024").is_err());
        assert!(parse_date("not-a-date").is_err());
    }
}
