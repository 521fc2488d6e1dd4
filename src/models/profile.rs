use serde::{Deserialize, Serialize};

/// Gender options offered by the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

/// Health goals the recommendation filters understand.
///
/// Goal strings outside these three are valid input; they simply select
/// no filter downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthGoal {
    LoseWeight,
    GainWeight,
    MaintainWeight,
}

impl HealthGoal {
    /// Parse a goal string, case-insensitively. Unrecognized input is `None`.
    pub fn parse(goal: &str) -> Option<HealthGoal> {
        match goal.to_lowercase().as_str() {
            "lose weight" => Some(HealthGoal::LoseWeight),
            "gain weight" => Some(HealthGoal::GainWeight),
            "maintain weight" => Some(HealthGoal::MaintainWeight),
            _ => None,
        }
    }

    /// The canonical form-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            HealthGoal::LoseWeight => "lose weight",
            HealthGoal::GainWeight => "gain weight",
            HealthGoal::MaintainWeight => "maintain weight",
        }
    }
}

/// A submitted user profile with its derived BMI.
///
/// Field names follow the persisted record document. Profiles are
/// created once per submission and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Age")]
    pub age: u32,

    #[serde(rename = "Gender")]
    pub gender: Gender,

    #[serde(rename = "Height_cm")]
    pub height_cm: f64,

    #[serde(rename = "Weight_kg")]
    pub weight_kg: f64,

    #[serde(rename = "BMI")]
    pub bmi: f64,

    #[serde(rename = "Health_Goal")]
    pub health_goal: String,

    #[serde(rename = "Plan_Days")]
    pub plan_days: u32,
}

impl UserProfile {
    /// Build a profile from form input, deriving BMI from height and weight.
    pub fn new(
        name: String,
        age: u32,
        gender: Gender,
        height_cm: f64,
        weight_kg: f64,
        health_goal: String,
        plan_days: u32,
    ) -> Self {
        let bmi = compute_bmi(height_cm, weight_kg);
        Self {
            name,
            age,
            gender,
            height_cm,
            weight_kg,
            bmi,
            health_goal,
            plan_days,
        }
    }
}

/// BMI from height in centimeters and weight in kilograms, rounded to
/// two decimal places. Zero when height is not positive.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    (bmi * 100.0).round() / 100.0
}
