use dialoguer::{Input, Select};
use strsim::jaro_winkler;

use crate::error::{NutriError, Result};
use crate::models::{FoodItem, Gender, HealthGoal, UserProfile};

/// Prompt for the user's name.
pub fn prompt_name() -> Result<String> {
    let input: String = Input::new().with_prompt("Name").interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for age. Must be at least 1.
pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new().with_prompt("Age").interact_text()?;

    let age: u32 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid age".to_string()))?;

    if age == 0 {
        return Err(NutriError::InvalidInput("Age must be at least 1".to_string()));
    }

    Ok(age)
}

/// Prompt for gender.
pub fn prompt_gender() -> Result<Gender> {
    let options = [Gender::Male, Gender::Female, Gender::Other];
    let labels: Vec<String> = options.iter().map(|g| g.to_string()).collect();

    let selection = Select::new()
        .with_prompt("Gender")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options[selection])
}

/// Prompt for height in centimeters. Must not be negative.
pub fn prompt_height_cm() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Height (in cm)")
        .default("0".to_string())
        .interact_text()?;

    let height: f64 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid height".to_string()))?;

    if height < 0.0 {
        return Err(NutriError::InvalidInput(
            "Height cannot be negative".to_string(),
        ));
    }

    Ok(height)
}

/// Prompt for weight in kilograms. Must not be negative.
pub fn prompt_weight_kg() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Weight (in kg)")
        .default("0".to_string())
        .interact_text()?;

    let weight: f64 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid weight".to_string()))?;

    if weight < 0.0 {
        return Err(NutriError::InvalidInput(
            "Weight cannot be negative".to_string(),
        ));
    }

    Ok(weight)
}

/// Prompt for the desired health goal.
pub fn prompt_health_goal() -> Result<String> {
    let goals = [
        HealthGoal::LoseWeight,
        HealthGoal::GainWeight,
        HealthGoal::MaintainWeight,
    ];
    let labels: Vec<&str> = goals.iter().map(|g| g.label()).collect();

    let selection = Select::new()
        .with_prompt("Desired Health Goal")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(labels[selection].to_string())
}

/// Prompt for the plan length in days. Must be at least 1.
pub fn prompt_plan_days() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("For how many days do you want a plan?")
        .default("7".to_string())
        .interact_text()?;

    let days: u32 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid number of days".to_string()))?;

    if days == 0 {
        return Err(NutriError::InvalidInput(
            "Plan must cover at least 1 day".to_string(),
        ));
    }

    Ok(days)
}

/// Collect the full submission form and build a profile with derived BMI.
pub fn collect_user_profile() -> Result<UserProfile> {
    let name = prompt_name()?;
    let age = prompt_age()?;
    let gender = prompt_gender()?;
    let height_cm = prompt_height_cm()?;
    let weight_kg = prompt_weight_kg()?;
    let health_goal = prompt_health_goal()?;
    let plan_days = prompt_plan_days()?;

    Ok(UserProfile::new(
        name, age, gender, height_cm, weight_kg, health_goal, plan_days,
    ))
}

/// Prompt for the next chat message. Empty input is allowed and means
/// "nothing to send".
pub fn prompt_chat_message() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("You")
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Match a query against food names: exact (case-insensitive) first,
/// then fuzzy candidates above a similarity cutoff, best first.
pub fn match_food_names<'a>(foods: &'a [FoodItem], query: &str) -> Vec<&'a FoodItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    if let Some(exact) = foods.iter().find(|f| f.key() == query) {
        return vec![exact];
    }

    let mut candidates: Vec<(&FoodItem, f64)> = foods
        .iter()
        .map(|f| (f, jaro_winkler(&f.key(), &query)))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    candidates.into_iter().take(5).map(|(f, _)| f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(name: &str) -> FoodItem {
        FoodItem {
            name: name.to_string(),
            calories: 100.0,
            total_fat: 1.0,
            protein: 5.0,
            carbohydrates: None,
            sugars: None,
        }
    }

    #[test]
    fn test_exact_match_wins() {
        let foods = vec![food("Grilled Chicken"), food("Grilled Cheese")];
        let matches = match_food_names(&foods, "grilled chicken");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Grilled Chicken");
    }

    #[test]
    fn test_fuzzy_match_catches_typos() {
        let foods = vec![food("Grilled Chicken"), food("Oatmeal")];
        let matches = match_food_names(&foods, "griled chiken");
        assert!(!matches.is_empty());
        assert_eq!(matches[0].name, "Grilled Chicken");
    }

    #[test]
    fn test_no_match_for_unrelated_query() {
        let foods = vec![food("Oatmeal")];
        assert!(match_food_names(&foods, "xyzzyplugh").is_empty());
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let foods = vec![food("Oatmeal")];
        assert!(match_food_names(&foods, "   ").is_empty());
    }
}
