use clap::Parser;
use rand::thread_rng;

use nutrunist_rs::chat::{ChatClient, ChatSession};
use nutrunist_rs::cli::{Cli, Command};
use nutrunist_rs::datasets::{load_table, Datasets};
use nutrunist_rs::error::Result;
use nutrunist_rs::interface::{
    collect_user_profile, display_bmi, display_chat_line, display_food_details, display_plan,
    display_records, match_food_names, prompt_chat_message,
};
use nutrunist_rs::models::FoodItem;
use nutrunist_rs::recommend::generate_plan;
use nutrunist_rs::records::RecordManager;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(&cli.foods, &cli.exercises, &cli.records),
        Command::Records => cmd_records(&cli.records),
        Command::Lookup { query } => cmd_lookup(&cli.foods, &query),
        Command::Chat => cmd_chat(),
    }
}

/// Collect user details, save the record, and show a generated plan.
fn cmd_plan(food_path: &str, exercise_path: &str, records_path: &str) -> Result<()> {
    // No recommendations are possible without the datasets; a load
    // failure is fatal and surfaces through main's error path.
    let datasets = Datasets::load(food_path, exercise_path)?;
    println!(
        "Loaded {} foods and {} exercises",
        datasets.foods.len(),
        datasets.exercises.len()
    );

    let mut manager = RecordManager::open(records_path)?;

    println!();
    println!("Welcome to Nutrunist AI! Please enter your details below:");
    let profile = collect_user_profile()?;

    display_bmi(profile.bmi);

    let id = manager.append(profile.clone())?;
    println!("User data saved as record {id}.");

    let plan = generate_plan(&datasets, &profile, &mut thread_rng());
    display_plan(&plan);

    Ok(())
}

/// List previously submitted records.
fn cmd_records(records_path: &str) -> Result<()> {
    let manager = RecordManager::open(records_path)?;
    display_records(manager.records());
    Ok(())
}

/// Look up foods by name and show their nutrition.
fn cmd_lookup(food_path: &str, query: &str) -> Result<()> {
    let foods: Vec<FoodItem> = load_table(food_path)?;

    let matches = match_food_names(&foods, query);
    if matches.is_empty() {
        println!("No matching food found for '{query}'");
        return Ok(());
    }

    display_food_details(&matches);
    Ok(())
}

/// Interactive chat with the external assistant.
fn cmd_chat() -> Result<()> {
    let client = ChatClient::from_env()?;
    let mut session = ChatSession::new();

    println!("Live Chat with Nutrunist AI (type 'exit' or 'end' to finish)");
    println!();

    while session.chat_active {
        let input = prompt_chat_message()?;
        if input.trim().is_empty() {
            continue;
        }

        // Termination tokens are handled locally and never sent.
        if ChatSession::is_exit_command(&input) {
            session.end();
            if let Some(line) = session.chat_history.last() {
                display_chat_line(line);
            }
            continue;
        }

        session.push_user(&input);

        // Any API failure becomes a displayed message; the loop goes on.
        let reply = match client.send(&session.conversation_context) {
            Ok(reply) => reply,
            Err(e) => format!("Error: {}", e),
        };

        session.push_assistant(&reply);
        if let Some(line) = session.chat_history.last() {
            display_chat_line(line);
        }
    }

    Ok(())
}
