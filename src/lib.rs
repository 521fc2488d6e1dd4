pub mod chat;
pub mod cli;
pub mod datasets;
pub mod error;
pub mod interface;
pub mod models;
pub mod recommend;
pub mod records;

pub use error::{NutriError, Result};
pub use models::{ExerciseItem, FoodItem, PlanDay, UserProfile};
