// ABOUTME: meal-score CLI - scores logged meals and derives daily targets from the command line
// ABOUTME: Reads JSON from a file or stdin and writes JSON results to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Score one meal (or a JSON array of meals)
//! echo '{"goal":"Lose Weight","mealType":"Lunch","dailyCalorieTarget":1800,
//!        "dailyProteinTarget":120,"mealCalories":540,"mealProteinG":40,
//!        "mealFatG":15,"mealCarbsG":60}' | meal-score score --pretty
//!
//! # Score a logged serving, resolving daily targets from the profile
//! meal-score log --input entry.json
//!
//! # Derive daily targets from a profile
//! meal-score targets --weight-kg 80 --height-cm 180 --age 30 --gender male \
//!     --activity "Moderately Active" --goal "Lose Weight"
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use mealscore::errors::{AppResult, ErrorResponse};
use mealscore::logging::LoggingConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "meal-score",
    about = "Meal effectiveness scoring",
    long_about = "Scores how well a meal fits daily calorie and protein targets and a nutrition goal."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Score meal nutrient samples
    Score {
        /// JSON file with one sample or an array of samples (stdin when omitted)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Score a logged serving, resolving daily targets first
    Log {
        /// JSON file with a meal log entry (stdin when omitted)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Derive daily calorie and macro targets from a profile
    Targets {
        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Gender (male or female)
        #[arg(long)]
        gender: Option<String>,

        /// Activity level, e.g. "Moderately Active"
        #[arg(long, default_value = "Sedentary")]
        activity: String,

        /// Nutrition goal, e.g. "Lose Weight"
        #[arg(long)]
        goal: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn run(cli: Cli) -> AppResult<()> {
    match cli.command {
        Command::Score { input, pretty } => commands::score::run(input.as_deref(), pretty),
        Command::Log { input, pretty } => commands::log::run(input.as_deref(), pretty),
        Command::Targets {
            weight_kg,
            height_cm,
            age,
            gender,
            activity,
            goal,
            pretty,
        } => commands::targets::run(
            &commands::targets::TargetsArgs {
                weight_kg,
                height_cm,
                age,
                gender,
                activity,
                goal,
            },
            pretty,
        ),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }
    debug!("meal-score starting");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let exit_code = error.code.exit_code();
            let response = ErrorResponse::from(error);
            match serde_json::to_string(&response) {
                Ok(body) => eprintln!("{body}"),
                Err(_) => eprintln!("{}", response.error.message),
            }
            ExitCode::from(u8::try_from(exit_code).unwrap_or(1))
        }
    }
}
