// ABOUTME: Terminal front-end for metabolic targets and generated plans
// ABOUTME: Prints metabolic data, nutrition plans, or workout plans as JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `fitplan` command line interface.
//!
//! Usage:
//! ```bash
//! # Offline metabolic calculation
//! cargo run --bin fitplan -- metabolic --age 30 --gender male --weight 80 --height 180
//!
//! # Nutrition plan (requires API_KEY)
//! cargo run --bin fitplan -- nutrition --goal-weight 72 --restrictions "sem lactose"
//!
//! # Workout plan
//! cargo run --bin fitplan -- workout --goal Hipertrofia --level advanced --frequency 5
//! ```
//!
//! Defaults mirror the web form. Logs go to stderr; `-v` raises the level to debug.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fitplan::config::GeneratorConfig;
use fitplan::intelligence::calculate_metabolic_data;
use fitplan::llm::{GeminiProvider, PlanGenerator};
use fitplan::logging::LoggingConfig;
use fitplan::models::{
    ActivityLevel, Gender, TrainingLevel, TrainingLocation, UserProfile, WorkoutProfile,
};
use fitplan::services::{ApplyOutcome, PlanSession, SubmissionError};
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fitplan",
    about = "Metabolic targets and AI-generated nutrition and workout plans",
    version
)]
struct Cli {
    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate TMB, GETD, daily target, and macros without calling the generator
    Metabolic(NutritionArgs),
    /// Generate a nutrition plan
    Nutrition(NutritionArgs),
    /// Generate a workout plan
    Workout(WorkoutArgs),
    /// Check that the generator accepts the configured credential
    Health,
}

#[derive(Args)]
struct NutritionArgs {
    /// Age in years
    #[arg(long, default_value_t = 25)]
    age: u32,
    /// male | female (Masculino | Feminino accepted)
    #[arg(long, default_value = "female")]
    gender: Gender,
    /// Current weight in kg
    #[arg(long, default_value_t = 70.0)]
    weight: f64,
    /// Height in cm
    #[arg(long, default_value_t = 165.0)]
    height: f64,
    /// sedentary | light | moderate | intense
    #[arg(long, default_value = "moderate")]
    activity: ActivityLevel,
    /// Target weight in kg
    #[arg(long, default_value_t = 60.0)]
    goal_weight: f64,
    /// Dietary restrictions
    #[arg(long, default_value = "")]
    restrictions: String,
}

impl From<NutritionArgs> for UserProfile {
    fn from(args: NutritionArgs) -> Self {
        Self {
            age: args.age,
            gender: args.gender,
            weight: args.weight,
            height: args.height,
            activity_level: args.activity,
            goal_weight: args.goal_weight,
            restrictions: args.restrictions,
        }
    }
}

#[derive(Args)]
struct WorkoutArgs {
    /// Training goal (Hipertrofia, Emagrecimento, Resistência, Condicionamento)
    #[arg(long, default_value = "Hipertrofia")]
    goal: String,
    /// beginner | intermediate | advanced
    #[arg(long, default_value = "intermediate")]
    level: TrainingLevel,
    /// Sessions per week (1-7)
    #[arg(long, default_value_t = 4)]
    frequency: u8,
    /// gym | home
    #[arg(long, default_value = "gym")]
    location: TrainingLocation,
    /// Injuries or restrictions
    #[arg(long, default_value = "")]
    restrictions: String,
}

impl From<WorkoutArgs> for WorkoutProfile {
    fn from(args: WorkoutArgs) -> Self {
        Self {
            goal: args.goal,
            level: args.level,
            frequency: args.frequency,
            location: args.location,
            restrictions: args.restrictions,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    match cli.command {
        Command::Metabolic(args) => {
            let profile = UserProfile::from(args);
            profile.validate()?;
            print_json(&calculate_metabolic_data(&profile))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Nutrition(args) => {
            let profile = UserProfile::from(args);
            let session = build_session()?;
            report(session.submit_nutrition(&profile).await)
        }
        Command::Workout(args) => {
            let profile = WorkoutProfile::from(args);
            let session = build_session()?;
            report(session.submit_workout(&profile).await)
        }
        Command::Health => {
            let generator = GeminiProvider::from_env()?;
            let healthy = generator.health_check().await?;
            info!(generator = generator.name(), healthy, "Health check finished");
            print_json(&serde_json::json!({
                "generator": generator.name(),
                "model": generator.model(),
                "healthy": healthy,
            }))?;
            Ok(if healthy {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn build_session() -> Result<PlanSession> {
    let config = GeneratorConfig::from_env().context("generator configuration")?;
    let timeout = config.request_timeout;
    let generator = GeminiProvider::new(config)?;
    Ok(PlanSession::new(Arc::new(generator), timeout))
}

fn report(outcome: Result<ApplyOutcome, SubmissionError>) -> Result<ExitCode> {
    match outcome {
        Ok(ApplyOutcome::Applied(resolved)) => {
            print_json(&resolved)?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(ApplyOutcome::Superseded { .. }) => Ok(ExitCode::SUCCESS),
        Err(error) => {
            // Detail has been logged by the session
            eprintln!("{}", error.user_message);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
