use rand::seq::SliceRandom;
use rand::Rng;

use crate::datasets::Datasets;
use crate::models::{ExerciseItem, FoodItem, HealthGoal, PlanDay, UserProfile};
use crate::recommend::constants::*;

/// Whether a food passes the filter for the given goal.
///
/// Unrecognized goals pass everything.
fn meal_matches(food: &FoodItem, goal: Option<HealthGoal>) -> bool {
    match goal {
        Some(HealthGoal::LoseWeight) => {
            food.calories <= LOSE_MAX_CALORIES
                && food.total_fat <= LOSE_MAX_TOTAL_FAT
                && food.protein >= LOSE_MIN_PROTEIN
        }
        Some(HealthGoal::GainWeight) => food.calories >= GAIN_MIN_CALORIES,
        Some(HealthGoal::MaintainWeight) => {
            food.calories <= MAINTAIN_MAX_CALORIES
                && food.total_fat <= MAINTAIN_MAX_TOTAL_FAT
                && food.protein >= MAINTAIN_MIN_PROTEIN
        }
        None => true,
    }
}

/// Recommend one meal for the goal.
///
/// Filters the food table by the goal's thresholds (goal matching is
/// case-insensitive) and picks uniformly at random from what remains.
/// An empty result is not an error; the sentinel string is returned.
pub fn recommend_meal(foods: &[FoodItem], goal: &str, rng: &mut impl Rng) -> String {
    let parsed = HealthGoal::parse(goal);
    let candidates: Vec<&FoodItem> = foods.iter().filter(|f| meal_matches(f, parsed)).collect();

    match candidates.choose(rng) {
        Some(food) => format!("Meal: {}", food.name),
        None => NO_MEAL_FOUND.to_string(),
    }
}

/// Recommend one exercise for the goal and BMI.
///
/// The candidate set is the whole table unless the goal is lose weight
/// and BMI is at least `OVERWEIGHT_BMI`, in which case it narrows to
/// items whose equipment type mentions stretching. Items without an
/// equipment type are excluded by the narrowing, not matched.
///
/// The recommended value is the equipment-type field of the picked row,
/// not its exercise name.
pub fn recommend_exercise(
    exercises: &[ExerciseItem],
    goal: &str,
    bmi: f64,
    rng: &mut impl Rng,
) -> String {
    let narrow = HealthGoal::parse(goal) == Some(HealthGoal::LoseWeight) && bmi >= OVERWEIGHT_BMI;

    let candidates: Vec<&ExerciseItem> = exercises
        .iter()
        .filter(|e| !narrow || e.equipment_contains(STRETCH_KEYWORD))
        .collect();

    match candidates.choose(rng) {
        Some(exercise) => format!(
            "Exercise: {}",
            exercise.equipment_type.as_deref().unwrap_or("")
        ),
        None => NO_EXERCISE_FOUND.to_string(),
    }
}

/// Generate a plan of `plan_days` days for the profile.
///
/// Each day is an independent pair of draws, so the same meal or
/// exercise can repeat on consecutive days. Zero days yields an empty
/// plan.
pub fn generate_plan(datasets: &Datasets, profile: &UserProfile, rng: &mut impl Rng) -> Vec<PlanDay> {
    (1..=profile.plan_days)
        .map(|day| {
            let meal = recommend_meal(&datasets.foods, &profile.health_goal, rng);
            let exercise =
                recommend_exercise(&datasets.exercises, &profile.health_goal, profile.bmi, rng);
            PlanDay::new(day, meal, exercise)
        })
        .collect()
}
