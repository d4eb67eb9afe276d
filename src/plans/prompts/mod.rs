// ABOUTME: Plan prompts loaded at compile time and rendered from typed profiles
// ABOUTME: Nutritionist and personal trainer personas paired with their output schemas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Prompts
//!
//! Persona and instruction text lives in markdown files next to this module.
//! The `{profile}` placeholder is replaced by a bullet list rendered from the
//! submitted profile.

use super::schema::{nutrition_plan_schema, workout_plan_schema};
use super::PlanRequest;
use crate::constants::plan_defaults::NO_RESTRICTIONS;
use crate::models::{MetabolicData, PlanKind, UserProfile, WorkoutProfile};

/// Nutritionist persona and instructions
pub const NUTRITIONIST_PROMPT: &str = include_str!("nutritionist.md");

/// Personal trainer persona and instructions
pub const PERSONAL_TRAINER_PROMPT: &str = include_str!("personal_trainer.md");

/// Placeholder replaced by the rendered profile
const PROFILE_PLACEHOLDER: &str = "{profile}";

/// Build the nutrition plan request
///
/// Targets come from `metabolic`, so the model plans around the locally
/// computed figures rather than its own estimate.
#[must_use]
pub fn build_nutrition_request(profile: &UserProfile, metabolic: &MetabolicData) -> PlanRequest {
    let lines = [
        format!("- Idade: {} anos", profile.age),
        format!("- Sexo: {}", profile.gender),
        format!("- Peso Atual: {}kg", format_number(profile.weight)),
        format!("- Meta: {}kg", format_number(profile.goal_weight)),
        format!("- Restrições: {}", restrictions_or_none(&profile.restrictions)),
        format!("- Calorias Alvo: {} kcal", metabolic.target_kcal),
        format!(
            "- Macros Alvo: Proteína {}g, Carboidratos {}g, Gorduras {}g",
            metabolic.macros.protein, metabolic.macros.carbs, metabolic.macros.fat
        ),
    ];

    PlanRequest {
        kind: PlanKind::Nutrition,
        prompt: render(NUTRITIONIST_PROMPT, &lines),
        schema: nutrition_plan_schema(),
    }
}

/// Build the workout plan request
#[must_use]
pub fn build_workout_request(profile: &WorkoutProfile) -> PlanRequest {
    let lines = [
        format!("- Objetivo: {}", profile.goal.trim()),
        format!("- Nível: {}", profile.level),
        format!("- Frequência: {} dias por semana", profile.frequency),
        format!("- Local: {}", profile.location),
        format!(
            "- Restrições/Lesões: {}",
            restrictions_or_none(&profile.restrictions)
        ),
    ];

    PlanRequest {
        kind: PlanKind::Workout,
        prompt: render(PERSONAL_TRAINER_PROMPT, &lines),
        schema: workout_plan_schema(),
    }
}

fn render(template: &str, profile_lines: &[String]) -> String {
    template
        .trim_end()
        .replace(PROFILE_PLACEHOLDER, &profile_lines.join("\n"))
}

fn restrictions_or_none(restrictions: &str) -> &str {
    let trimmed = restrictions.trim();
    if trimmed.is_empty() {
        NO_RESTRICTIONS
    } else {
        trimmed
    }
}

/// Whole numbers print without a decimal part ("70", not "70.0")
fn format_number(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
