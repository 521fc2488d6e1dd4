use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;

use crate::error::{NutriError, Result};
use crate::models::{ExerciseItem, FoodItem};

/// Load a tabular dataset from a CSV file.
///
/// Header names are trimmed of surrounding whitespace before field
/// matching, so a file with ` Food Name ` headers still deserializes.
/// A missing or unparsable file is a `DataLoad` error.
pub fn load_table<T, P>(path: P) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .from_path(path)
        .map_err(|e| NutriError::DataLoad(format!("{}: {}", path.display(), e)))?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: T =
            record.map_err(|e| NutriError::DataLoad(format!("{}: {}", path.display(), e)))?;
        rows.push(row);
    }
    Ok(rows)
}

/// The two in-memory tables the recommendation engine reads.
///
/// Loaded once at startup and treated as read-only for the rest of the
/// run; the source files are assumed not to change underneath us.
pub struct Datasets {
    pub foods: Vec<FoodItem>,
    pub exercises: Vec<ExerciseItem>,
}

impl Datasets {
    pub fn load<P: AsRef<Path>>(food_path: P, exercise_path: P) -> Result<Self> {
        Ok(Self {
            foods: load_table(food_path)?,
            exercises: load_table(exercise_path)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_foods_trims_headers() {
        let csv = " Food Name , Calories , Total Fat , Protein \n\
                    Oatmeal,150,3,5\n\
                    Grilled Chicken,320,8,42\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let foods: Vec<FoodItem> = load_table(file.path()).unwrap();
        assert_eq!(foods.len(), 2);
        assert_eq!(foods[0].name, "Oatmeal");
        assert_eq!(foods[1].protein, 42.0);
        assert!(foods[0].carbohydrates.is_none());
    }

    #[test]
    fn test_load_exercises_empty_cell_is_none() {
        let csv = "Exercise Name,Equipment Type\n\
                   Hamstring Stretch,Stretching Mat\n\
                   Jumping Jacks,\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let exercises: Vec<ExerciseItem> = load_table(file.path()).unwrap();
        assert_eq!(exercises.len(), 2);
        assert_eq!(exercises[0].equipment_type.as_deref(), Some("Stretching Mat"));
        assert!(exercises[1].equipment_type.is_none());
    }

    #[test]
    fn test_missing_file_is_data_load_error() {
        let result: Result<Vec<FoodItem>> = load_table("no_such_file.csv");
        assert!(matches!(result, Err(NutriError::DataLoad(_))));
    }

    #[test]
    fn test_malformed_row_is_data_load_error() {
        let csv = "Food Name,Calories,Total Fat,Protein\n\
                   Oatmeal,not_a_number,3,5\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let result: Result<Vec<FoodItem>> = load_table(file.path());
        assert!(matches!(result, Err(NutriError::DataLoad(_))));
    }
}
