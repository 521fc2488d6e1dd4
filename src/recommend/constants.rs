/// Calorie ceiling for the lose-weight meal filter.
pub const LOSE_MAX_CALORIES: f64 = 500.0;

/// Total-fat ceiling for the lose-weight meal filter.
pub const LOSE_MAX_TOTAL_FAT: f64 = 20.0;

/// Protein floor for the lose-weight meal filter.
pub const LOSE_MIN_PROTEIN: f64 = 10.0;

/// Calorie floor for the gain-weight meal filter.
pub const GAIN_MIN_CALORIES: f64 = 300.0;

/// Calorie ceiling for the maintain-weight meal filter.
pub const MAINTAIN_MAX_CALORIES: f64 = 600.0;

/// Total-fat ceiling for the maintain-weight meal filter.
pub const MAINTAIN_MAX_TOTAL_FAT: f64 = 25.0;

/// Protein floor for the maintain-weight meal filter.
pub const MAINTAIN_MIN_PROTEIN: f64 = 10.0;

/// BMI at or above which the lose-weight goal narrows exercise choice.
pub const OVERWEIGHT_BMI: f64 = 25.0;

/// Equipment-type substring used to narrow exercise choice.
pub const STRETCH_KEYWORD: &str = "stretch";

/// Returned when no meal passes the goal filter.
pub const NO_MEAL_FOUND: &str = "No suitable meal found.";

/// Returned when no exercise passes the goal/BMI filter.
pub const NO_EXERCISE_FOUND: &str = "No suitable exercise found.";
