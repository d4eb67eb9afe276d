// ABOUTME: Core data models for profiles, metabolic targets, and generated plans
// ABOUTME: Shared by the calculator, request builder, normalizer, and session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Field names serialize in camelCase so the JSON shape matches what the
//! dashboard and the plan schemas use.

mod metabolic;
mod plan;
mod profile;

pub use metabolic::{FloorAdjustment, MacroEnergy, Macros, MetabolicData};
pub use plan::{Exercise, Meal, NutritionPlan, Plan, PlanKind, WorkoutDay, WorkoutPlan};
pub use profile::{
    ActivityLevel, Gender, TrainingLevel, TrainingLocation, UserProfile, WorkoutProfile,
};
