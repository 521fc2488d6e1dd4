mod exercise;
mod food;
mod plan;
mod profile;

pub use exercise::ExerciseItem;
pub use food::FoodItem;
pub use plan::PlanDay;
pub use profile::{compute_bmi, Gender, HealthGoal, UserProfile};
