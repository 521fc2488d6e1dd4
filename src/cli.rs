use clap::{Parser, Subcommand};

/// Nutrunist — a nutrition assistant CLI that builds goal-based meal and exercise plans.
#[derive(Parser, Debug)]
#[command(name = "nutrunist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food dataset CSV.
    #[arg(long, default_value = "cleaned_food_data_refined.csv")]
    pub foods: String,

    /// Path to the exercise dataset CSV.
    #[arg(long, default_value = "cleaned_exercise_data_refined.csv")]
    pub exercises: String,

    /// Path to the user records JSON file.
    #[arg(short, long, default_value = "records.json")]
    pub records: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Collect user details and generate a personalized plan.
    Plan,

    /// List previously submitted user records.
    Records,

    /// Look up a food by name and show its nutrition.
    Lookup {
        /// Food name to search for (fuzzy matched).
        query: String,
    },

    /// Chat with the Nutrunist assistant.
    Chat,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}
