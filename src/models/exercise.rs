use serde::{Deserialize, Serialize};

/// An exercise from the exercise dataset.
///
/// Empty cells deserialize to `None`; the recommendation output uses the
/// equipment-type column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseItem {
    #[serde(rename = "Exercise Name", default)]
    pub name: Option<String>,

    #[serde(rename = "Equipment Type", default)]
    pub equipment_type: Option<String>,

    #[serde(rename = "Muscle Group", default)]
    pub muscle_group: Option<String>,
}

impl ExerciseItem {
    /// Whether the equipment-type field contains `needle`, case-insensitive.
    ///
    /// A missing equipment type never matches.
    pub fn equipment_contains(&self, needle: &str) -> bool {
        self.equipment_type
            .as_deref()
            .is_some_and(|e| e.to_lowercase().contains(&needle.to_lowercase()))
    }
}
