/// One day of a generated plan.
///
/// Plans are produced fresh per request and never persisted.
#[derive(Debug, Clone)]
pub struct PlanDay {
    /// 1-based day number.
    pub day_index: u32,

    /// Formatted meal recommendation, or the no-meal sentinel.
    pub meal_recommendation: String,

    /// Formatted exercise recommendation, or the no-exercise sentinel.
    pub exercise_recommendation: String,
}

impl PlanDay {
    pub fn new(day_index: u32, meal_recommendation: String, exercise_recommendation: String) -> Self {
        Self {
            day_index,
            meal_recommendation,
            exercise_recommendation,
        }
    }
}
