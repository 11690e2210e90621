//! Database repositories
//!
//! Provides the data access layer. Each entity has a record struct, input
//! structs for creation and partial update, and a repository with explicit
//! query methods. Partial updates use COALESCE so absent fields never
//! overwrite stored values.

pub mod exercise;
pub mod food;
pub mod meal;
pub mod user;
pub mod workout;
pub mod workout_session;

pub use exercise::{CreateExercise, ExerciseRecord, ExerciseRepository, UpdateExercise};
pub use food::{CreateFood, FoodRecord, FoodRepository, UpdateFood};
pub use meal::{CreateMeal, MealRecord, MealRepository, MealWithFood, UpdateMeal};
pub use user::{CreateUser, UpdateUser, UserRecord, UserRepository};
pub use workout::{CreateWorkout, UpdateWorkout, WorkoutRecord, WorkoutRepository};
pub use workout_session::{
    CreateSession, SessionRecord, UpdateSession, WorkoutSessionRepository,
};
