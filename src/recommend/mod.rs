pub mod constants;
pub mod engine;

pub use constants::*;
pub use engine::{generate_plan, recommend_exercise, recommend_meal};
