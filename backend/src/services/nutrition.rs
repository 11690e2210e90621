//! Nutrition calculations
//!
//! Pure functions for the derived meal fields and the daily aggregation.
//! Both are invoked explicitly by the meal service at its mutation points;
//! nothing recomputes behind the caller's back.

use crate::repositories::MealWithFood;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Total calories for one meal
///
/// Returns `calories_per_serving * quantity` when the food's calorie value
/// is known. An unknown calorie value yields None; absence of data is not
/// the same as zero calories.
pub fn meal_total_calories(
    calories_per_serving: Option<Decimal>,
    quantity: Decimal,
) -> Option<Decimal> {
    calories_per_serving.map(|calories| calories * quantity)
}

/// Daily nutrition totals for one user and date
#[derive(Debug, Clone, PartialEq)]
pub struct DailyNutrition {
    pub date: NaiveDate,
    pub total_calories: Decimal,
    pub total_protein_g: Decimal,
    pub total_carbs_g: Decimal,
    pub total_fat_g: Decimal,
    pub meals_count: usize,
}

/// Aggregate nutrition totals over one day's meals
///
/// Each addend contributes only when its underlying value is present, and
/// the presence checks are per field: a food with known protein but
/// unknown carbs still contributes its protein. Missing values therefore
/// contribute nothing to the sums, which callers observe as zero.
pub fn daily_nutrition(date: NaiveDate, meals: &[MealWithFood]) -> DailyNutrition {
    let mut total_calories = Decimal::ZERO;
    let mut total_protein_g = Decimal::ZERO;
    let mut total_carbs_g = Decimal::ZERO;
    let mut total_fat_g = Decimal::ZERO;

    for meal in meals {
        if let Some(total) = meal.total_calories {
            total_calories += total;
        }
        if let Some(protein) = meal.food_protein_g {
            total_protein_g += protein * meal.quantity;
        }
        if let Some(carbs) = meal.food_carbs_g {
            total_carbs_g += carbs * meal.quantity;
        }
        if let Some(fat) = meal.food_fat_g {
            total_fat_g += fat * meal.quantity;
        }
    }

    DailyNutrition {
        date,
        total_calories,
        total_protein_g,
        total_carbs_g,
        total_fat_g,
        meals_count: meals.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;
    use vitalyou_shared::models::MealType;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// Helper to build a meal row with the given nutrition values
    fn meal_with(
        quantity: Decimal,
        calories: Option<Decimal>,
        protein: Option<Decimal>,
        carbs: Option<Decimal>,
        fat: Option<Decimal>,
    ) -> MealWithFood {
        MealWithFood {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            food_id: Uuid::new_v4(),
            quantity,
            meal_type: MealType::Lunch,
            meal_date: test_date(),
            total_calories: meal_total_calories(calories, quantity),
            created_at: Utc::now(),
            food_name: "Test Food".to_string(),
            food_calories: calories,
            food_protein_g: protein,
            food_carbs_g: carbs,
            food_fat_g: fat,
            food_serving_size: Some("100g".to_string()),
            food_created_at: Utc::now(),
        }
    }

    #[test]
    fn total_calories_multiplies_by_quantity() {
        // 165 kcal per serving, two servings
        let total = meal_total_calories(Some(Decimal::new(165, 0)), Decimal::new(20, 1));
        assert_eq!(total, Some(Decimal::new(330, 0)));
    }

    #[test]
    fn total_calories_is_unset_when_calories_unknown() {
        assert_eq!(meal_total_calories(None, Decimal::new(20, 1)), None);
    }

    #[test]
    fn total_calories_handles_fractional_quantity() {
        let total = meal_total_calories(Some(Decimal::new(200, 0)), Decimal::new(5, 1));
        assert_eq!(total, Some(Decimal::new(100, 0)));
    }

    #[test]
    fn daily_nutrition_of_empty_day_is_zero() {
        let summary = daily_nutrition(test_date(), &[]);
        assert_eq!(summary.total_calories, Decimal::ZERO);
        assert_eq!(summary.total_protein_g, Decimal::ZERO);
        assert_eq!(summary.total_carbs_g, Decimal::ZERO);
        assert_eq!(summary.total_fat_g, Decimal::ZERO);
        assert_eq!(summary.meals_count, 0);
        assert_eq!(summary.date, test_date());
    }

    #[test]
    fn daily_nutrition_sums_one_meal() {
        // 165 kcal, 31g protein, 0g carbs, 3.6g fat per serving, two servings
        let meals = vec![meal_with(
            Decimal::new(20, 1),
            Some(Decimal::new(165, 0)),
            Some(Decimal::new(31, 0)),
            Some(Decimal::ZERO),
            Some(Decimal::new(36, 1)),
        )];
        let summary = daily_nutrition(test_date(), &meals);
        assert_eq!(summary.total_calories, Decimal::new(330, 0));
        assert_eq!(summary.total_protein_g, Decimal::new(62, 0));
        assert_eq!(summary.total_carbs_g, Decimal::ZERO);
        assert_eq!(summary.total_fat_g, Decimal::new(72, 1));
        assert_eq!(summary.meals_count, 1);
    }

    #[test]
    fn daily_nutrition_skips_each_missing_field_independently() {
        // Protein known, carbs and fat unknown
        let partial = meal_with(
            Decimal::ONE,
            None,
            Some(Decimal::new(10, 0)),
            None,
            None,
        );
        // All fields known
        let full = meal_with(
            Decimal::ONE,
            Some(Decimal::new(100, 0)),
            Some(Decimal::new(5, 0)),
            Some(Decimal::new(20, 0)),
            Some(Decimal::new(2, 0)),
        );
        let summary = daily_nutrition(test_date(), &[partial, full]);

        // The unknown calorie value contributes nothing, not zero-by-error
        assert_eq!(summary.total_calories, Decimal::new(100, 0));
        assert_eq!(summary.total_protein_g, Decimal::new(15, 0));
        assert_eq!(summary.total_carbs_g, Decimal::new(20, 0));
        assert_eq!(summary.total_fat_g, Decimal::new(2, 0));
        assert_eq!(summary.meals_count, 2);
    }

    #[test]
    fn daily_nutrition_counts_meals_with_no_data() {
        let meals = vec![meal_with(Decimal::ONE, None, None, None, None)];
        let summary = daily_nutrition(test_date(), &meals);
        assert_eq!(summary.meals_count, 1);
        assert_eq!(summary.total_calories, Decimal::ZERO);
    }
}
