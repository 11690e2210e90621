//! Meal service - meal logging and the derived calorie total
//!
//! The derived `total_calories` is recomputed here at the two mutation
//! points: meal creation, and any update that touches the quantity or the
//! food reference. The computation itself lives in
//! [`crate::services::nutrition`].

use crate::error::ApiError;
use crate::repositories::{
    CreateMeal, FoodRecord, FoodRepository, MealRecord, MealRepository, MealWithFood, UpdateMeal,
    UserRepository,
};
use crate::services::nutrition::{self, DailyNutrition};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use vitalyou_shared::models::MealType;

/// Meal service
pub struct MealService;

impl MealService {
    /// List all meals with their foods
    pub async fn list(pool: &PgPool) -> Result<Vec<MealWithFood>, ApiError> {
        let meals = MealRepository::list_with_food(pool)
            .await
            .map_err(ApiError::Internal)?;
        Ok(meals)
    }

    /// Get a meal by ID with its food
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<MealWithFood, ApiError> {
        let meal = MealRepository::find_with_food(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Meal not found".to_string()))?;

        Ok(meal)
    }

    /// Log a meal
    ///
    /// Both the user and the food must exist before anything is written;
    /// a missing reference is a bad request, never a partial creation.
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        food_id: Uuid,
        quantity: Decimal,
        meal_type: MealType,
        meal_date: NaiveDate,
    ) -> Result<MealWithFood, ApiError> {
        let user_exists = UserRepository::exists(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        if !user_exists {
            return Err(ApiError::BadRequest("Referenced user does not exist".to_string()));
        }

        let food = FoodRepository::find_by_id(pool, food_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::BadRequest("Referenced food does not exist".to_string()))?;

        let total_calories = nutrition::meal_total_calories(food.calories, quantity);

        let meal = MealRepository::create(
            pool,
            CreateMeal {
                user_id,
                food_id,
                quantity,
                meal_type,
                meal_date,
                total_calories,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(join_meal_and_food(meal, food))
    }

    /// Partially update a meal
    ///
    /// The calorie total is recomputed from the effective food and
    /// quantity, whether or not either actually changed.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateMeal,
    ) -> Result<MealWithFood, ApiError> {
        let current = MealRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Meal not found".to_string()))?;

        // Resolve the food the meal will reference after the update
        let food_id = updates.food_id.unwrap_or(current.food_id);
        let food = FoodRepository::find_by_id(pool, food_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::BadRequest("Referenced food does not exist".to_string()))?;

        let quantity = updates.quantity.unwrap_or(current.quantity);
        let total_calories = nutrition::meal_total_calories(food.calories, quantity);

        let meal = MealRepository::update(pool, id, updates, total_calories)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Meal not found".to_string()))?;

        Ok(join_meal_and_food(meal, food))
    }

    /// Delete a meal
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), ApiError> {
        let deleted = MealRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Meal not found".to_string()));
        }

        Ok(())
    }

    /// List a user's meals, most recently logged first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<MealWithFood>, ApiError> {
        Self::ensure_user_exists(pool, user_id).await?;

        let meals = MealRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        Ok(meals)
    }

    /// List a user's meals on one date
    pub async fn list_by_user_and_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<MealWithFood>, ApiError> {
        Self::ensure_user_exists(pool, user_id).await?;

        let meals = MealRepository::list_by_user_and_date(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?;
        Ok(meals)
    }

    /// List a user's meals of one meal type
    pub async fn list_by_user_and_meal_type(
        pool: &PgPool,
        user_id: Uuid,
        meal_type: MealType,
    ) -> Result<Vec<MealWithFood>, ApiError> {
        Self::ensure_user_exists(pool, user_id).await?;

        let meals = MealRepository::list_by_user_and_meal_type(pool, user_id, meal_type)
            .await
            .map_err(ApiError::Internal)?;
        Ok(meals)
    }

    /// List a user's meals in an inclusive date range
    pub async fn list_by_user_in_date_range(
        pool: &PgPool,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<MealWithFood>, ApiError> {
        Self::ensure_user_exists(pool, user_id).await?;

        let meals = MealRepository::list_by_user_in_date_range(pool, user_id, from, to)
            .await
            .map_err(ApiError::Internal)?;
        Ok(meals)
    }

    /// Daily nutrition summary for one user and date
    pub async fn daily_summary(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<DailyNutrition, ApiError> {
        Self::ensure_user_exists(pool, user_id).await?;

        let meals = MealRepository::list_by_user_and_date(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?;

        Ok(nutrition::daily_nutrition(date, &meals))
    }

    async fn ensure_user_exists(pool: &PgPool, user_id: Uuid) -> Result<(), ApiError> {
        let exists = UserRepository::exists(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        if !exists {
            return Err(ApiError::NotFound("User not found".to_string()));
        }
        Ok(())
    }
}

/// Combine a meal record with its food record
///
/// Used after create/update where both records are already in hand, saving
/// the re-read a joined select would cost.
fn join_meal_and_food(meal: MealRecord, food: FoodRecord) -> MealWithFood {
    MealWithFood {
        id: meal.id,
        user_id: meal.user_id,
        food_id: meal.food_id,
        quantity: meal.quantity,
        meal_type: meal.meal_type,
        meal_date: meal.meal_date,
        total_calories: meal.total_calories,
        created_at: meal.created_at,
        food_name: food.name,
        food_calories: food.calories,
        food_protein_g: food.protein_g,
        food_carbs_g: food.carbs_g,
        food_fat_g: food.fat_g,
        food_serving_size: food.serving_size,
        food_created_at: food.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use vitalyou_shared::models::MealType;

    #[test]
    fn join_carries_derived_total_and_food_fields() {
        let food = FoodRecord {
            id: Uuid::new_v4(),
            name: "Chicken breast".to_string(),
            calories: Some(Decimal::new(165, 0)),
            protein_g: Some(Decimal::new(31, 0)),
            carbs_g: None,
            fat_g: Some(Decimal::new(36, 1)),
            serving_size: Some("100g".to_string()),
            created_at: Utc::now(),
        };
        let meal = MealRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            food_id: food.id,
            quantity: Decimal::new(20, 1),
            meal_type: MealType::Dinner,
            meal_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            total_calories: Some(Decimal::new(330, 0)),
            created_at: Utc::now(),
        };

        let joined = join_meal_and_food(meal.clone(), food.clone());
        assert_eq!(joined.id, meal.id);
        assert_eq!(joined.total_calories, Some(Decimal::new(330, 0)));
        assert_eq!(joined.food_name, "Chicken breast");
        assert_eq!(joined.food_carbs_g, None);
        assert_eq!(joined.food_protein_g, Some(Decimal::new(31, 0)));
    }
}
