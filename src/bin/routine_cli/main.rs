// ABOUTME: routine-cli - command-line front end for the routine planner client
// ABOUTME: Fetches and renders the current workout, groups local payloads, submits questionnaires
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors
//!
//! Usage:
//! ```bash
//! # Fetch the signed-in user's workout (token from ROUTINE_ACCESS_TOKEN)
//! routine-cli fetch --day tuesday
//!
//! # Print the grouped view model as JSON
//! routine-cli fetch --json
//!
//! # Group a saved workout response without touching the network
//! routine-cli group --file workout.json
//!
//! # Submit the preference questionnaire
//! routine-cli submit-questionnaire --frequency weekly --goal "muscle gain" \
//!     --location home --experience beginner --space 6 --equipment --duration 45
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use routine_planner::logging::LoggingConfig;
use routine_planner::models::{ExperienceLevel, FitnessGoal, Frequency, WorkoutLocation};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "routine-cli",
    about = "Routine Planner client",
    long_about = "Fetch, group, and display workout routines, and submit the preference questionnaire."
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
    /// Fetch the current workout for the signed-in user
    Fetch {
        /// Day tab to show (exact key, else an unambiguous case-insensitive match), defaults to the first day
        #[arg(long)]
        day: Option<String>,

        /// Print the view model as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Build the view model from a local workout response file
    Group {
        /// Path to a raw workout JSON body, with or without the `message` envelope
        #[arg(long)]
        file: PathBuf,

        /// Day tab to show (exact key, else an unambiguous case-insensitive match), defaults to the first day
        #[arg(long)]
        day: Option<String>,

        /// Print the view model as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Submit the preference questionnaire
    SubmitQuestionnaire {
        /// daily, weekly, biweekly or occasionally
        #[arg(long)]
        frequency: Frequency,

        /// "weight loss", "muscle gain", "staying fit" or endurance
        #[arg(long)]
        goal: FitnessGoal,

        /// home, gym or outdoors
        #[arg(long)]
        location: WorkoutLocation,

        /// beginner, intermediate or advanced
        #[arg(long)]
        experience: ExperienceLevel,

        /// Available space from 0 to 10
        #[arg(long, default_value = "5")]
        space: u8,

        /// Equipment is available
        #[arg(long)]
        equipment: bool,

        /// Session length in minutes
        #[arg(long, default_value = "30")]
        duration: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    match cli.command {
        Command::Fetch { day, json } => commands::workout::fetch(day.as_deref(), json).await,
        Command::Group { file, day, json } => {
            commands::workout::group(&file, day.as_deref(), json)
        }
        Command::SubmitQuestionnaire {
            frequency,
            goal,
            location,
            experience,
            space,
            equipment,
            duration,
        } => {
            let answers = commands::questionnaire::Answers {
                frequency,
                goal,
                location,
                experience,
                space,
                equipment,
                duration,
            };
            commands::questionnaire::submit(answers).await
        }
    }
}
