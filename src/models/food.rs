use serde::{Deserialize, Serialize};

/// A food item from the nutrition dataset.
///
/// Field names follow the CSV headers. Optional columns may be absent
/// from the file entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "Food Name")]
    pub name: String,

    #[serde(rename = "Calories")]
    pub calories: f64,

    #[serde(rename = "Total Fat")]
    pub total_fat: f64,

    #[serde(rename = "Protein")]
    pub protein: f64,

    #[serde(rename = "Carbohydrates", default)]
    pub carbohydrates: Option<f64>,

    #[serde(rename = "Sugars", default)]
    pub sugars: Option<f64>,
}

impl FoodItem {
    /// Basic validation: non-negative nutrition values.
    pub fn is_valid(&self) -> bool {
        self.calories >= 0.0 && self.total_fat >= 0.0 && self.protein >= 0.0
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> FoodItem {
        FoodItem {
            name: "Grilled Chicken".to_string(),
            calories: 320.0,
            total_fat: 8.0,
            protein: 42.0,
            carbohydrates: Some(2.0),
            sugars: None,
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_food().is_valid());

        let mut invalid = sample_food();
        invalid.calories = -1.0;
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_key_lowercases() {
        assert_eq!(sample_food().key(), "grilled chicken");
    }
}
