use crate::chat::{ChatLine, Sender};
use crate::models::{FoodItem, PlanDay, UserProfile};

/// Display the calculated BMI.
pub fn display_bmi(bmi: f64) {
    println!("Calculated BMI: {bmi}");
}

/// Display a generated plan, one day per block.
pub fn display_plan(plan: &[PlanDay]) {
    if plan.is_empty() {
        println!("No plan generated (zero days requested).");
        return;
    }

    println!();
    println!("=== Your Personalized Plan ({} days) ===", plan.len());
    println!();

    for day in plan {
        println!("Day {}:", day.day_index);
        println!("  - {}", day.meal_recommendation);
        println!("  - {}", day.exercise_recommendation);
    }

    println!();
}

/// Display stored records, one line each.
pub fn display_records<'a>(records: impl Iterator<Item = (&'a String, &'a UserProfile)>) {
    let mut count = 0;

    println!();
    println!("=== Saved Records ===");
    println!();

    for (id, profile) in records {
        println!(
            "{:>4}. {} ({} {}, {}) - goal: {}, BMI {:.2}, {} day plan",
            id,
            profile.name,
            profile.age,
            if profile.age == 1 { "year" } else { "years" },
            profile.gender,
            profile.health_goal,
            profile.bmi,
            profile.plan_days
        );
        count += 1;
    }

    if count == 0 {
        println!("(no records)");
    }
    println!();
}

/// Display the nutrition columns of matched foods.
pub fn display_food_details(foods: &[&FoodItem]) {
    println!();
    println!("=== Matching Foods ({}) ===", foods.len());
    println!();

    for food in foods {
        let mut extras = Vec::new();
        if let Some(carbs) = food.carbohydrates {
            extras.push(format!("carbs {carbs}g"));
        }
        if let Some(sugars) = food.sugars {
            extras.push(format!("sugars {sugars}g"));
        }
        let extras_str = if extras.is_empty() {
            String::new()
        } else {
            format!(", {}", extras.join(", "))
        };

        println!(
            "  {} - {} cal, fat {}g, protein {}g{}",
            food.name, food.calories, food.total_fat, food.protein, extras_str
        );
    }

    println!();
}

/// Display one chat line with its sender tag.
pub fn display_chat_line(line: &ChatLine) {
    match line.sender {
        Sender::User => println!("You: {}", line.message),
        Sender::Bot => println!("Nutrunist AI: {}", line.message),
    }
}
