//! Core domain types for the VitalYou application
//!
//! Enum tokens are stored lowercase in the database and on the wire.
//! Parsing is case-insensitive so path segments like `/category/HIIT`
//! resolve to the same variant as a JSON `"hiit"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Workout Enums
// ============================================================================

/// Workout difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "workout_difficulty", rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(format!("Unknown difficulty: {}", s)),
        }
    }
}

/// Workout category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "workout_category", rename_all = "lowercase")]
pub enum Category {
    Strength,
    Cardio,
    Flexibility,
    Hiit,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Strength => "strength",
            Category::Cardio => "cardio",
            Category::Flexibility => "flexibility",
            Category::Hiit => "hiit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" => Ok(Category::Strength),
            "cardio" => Ok(Category::Cardio),
            "flexibility" => Ok(Category::Flexibility),
            "hiit" => Ok(Category::Hiit),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

// ============================================================================
// Workout Ownership
// ============================================================================

/// Who a workout belongs to
///
/// A workout without an owner is "global" and visible to every user.
/// Modeled as a sum type rather than a bare `Option<Uuid>` so visibility
/// rules are exhaustive matches instead of null checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "user_id")]
pub enum WorkoutOwner {
    Global,
    OwnedBy(Uuid),
}

impl WorkoutOwner {
    /// Map the nullable `user_id` column to an owner
    pub fn from_column(user_id: Option<Uuid>) -> Self {
        match user_id {
            None => WorkoutOwner::Global,
            Some(id) => WorkoutOwner::OwnedBy(id),
        }
    }

    /// Map the owner back to the nullable `user_id` column
    pub fn as_column(self) -> Option<Uuid> {
        match self {
            WorkoutOwner::Global => None,
            WorkoutOwner::OwnedBy(id) => Some(id),
        }
    }

    pub fn is_global(self) -> bool {
        matches!(self, WorkoutOwner::Global)
    }
}

impl Default for WorkoutOwner {
    fn default() -> Self {
        WorkoutOwner::Global
    }
}

// ============================================================================
// Meal Enums
// ============================================================================

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "meal_type", rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            _ => Err(format!("Unknown meal type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("beginner", Difficulty::Beginner)]
    #[case("INTERMEDIATE", Difficulty::Intermediate)]
    #[case("Advanced", Difficulty::Advanced)]
    fn difficulty_parses_case_insensitively(#[case] token: &str, #[case] expected: Difficulty) {
        assert_eq!(token.parse::<Difficulty>().unwrap(), expected);
    }

    #[rstest]
    #[case("strength", Category::Strength)]
    #[case("CARDIO", Category::Cardio)]
    #[case("Flexibility", Category::Flexibility)]
    #[case("HIIT", Category::Hiit)]
    fn category_parses_case_insensitively(#[case] token: &str, #[case] expected: Category) {
        assert_eq!(token.parse::<Category>().unwrap(), expected);
    }

    #[rstest]
    #[case("yoga")]
    #[case("")]
    #[case("strength ")]
    fn unknown_category_tokens_are_rejected(#[case] token: &str) {
        assert!(token.parse::<Category>().is_err());
    }

    #[rstest]
    #[case("breakfast", MealType::Breakfast)]
    #[case("LUNCH", MealType::Lunch)]
    #[case("Dinner", MealType::Dinner)]
    #[case("snack", MealType::Snack)]
    fn meal_type_parses_case_insensitively(#[case] token: &str, #[case] expected: MealType) {
        assert_eq!(token.parse::<MealType>().unwrap(), expected);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for c in [
            Category::Strength,
            Category::Cardio,
            Category::Flexibility,
            Category::Hiit,
        ] {
            assert_eq!(c.to_string().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn owner_maps_to_and_from_nullable_column() {
        let id = Uuid::new_v4();
        assert_eq!(WorkoutOwner::from_column(None), WorkoutOwner::Global);
        assert_eq!(WorkoutOwner::from_column(Some(id)), WorkoutOwner::OwnedBy(id));
        assert_eq!(WorkoutOwner::Global.as_column(), None);
        assert_eq!(WorkoutOwner::OwnedBy(id).as_column(), Some(id));
        assert!(WorkoutOwner::Global.is_global());
        assert!(!WorkoutOwner::OwnedBy(id).is_global());
    }

    #[test]
    fn owner_serializes_with_kind_tag() {
        let global = serde_json::to_value(WorkoutOwner::Global).unwrap();
        assert_eq!(global["kind"], "global");

        let id = Uuid::new_v4();
        let owned = serde_json::to_value(WorkoutOwner::OwnedBy(id)).unwrap();
        assert_eq!(owned["kind"], "owned_by");
        assert_eq!(owned["user_id"], id.to_string());
    }
}
