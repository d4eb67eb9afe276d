// ABOUTME: Parses raw generator text into typed nutrition and workout plans
// ABOUTME: Classifies empty, malformed, and off-schema output and applies field defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Normalizer
//!
//! Generator output is untrusted. Normalization runs in three stages:
//!
//! 1. blank text is [`PlanError::EmptyResponse`]
//! 2. text that is not JSON (after removing one surrounding markdown fence) is
//!    [`PlanError::MalformedJson`]
//! 3. JSON that is not an object, misses a required field, has a field of the
//!    wrong type, or has an empty `mealPlan`/`routine` is
//!    [`PlanError::SchemaMismatch`]
//!
//! Nutrition plans always carry the locally computed [`MetabolicData`]; any
//! figures the model echoes back are ignored.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::constants::plan_defaults::DEFAULT_REST;
use crate::errors::PlanError;
use crate::models::{Exercise, Meal, MetabolicData, NutritionPlan, WorkoutDay, WorkoutPlan};

// ============================================================================
// Wire Types
// ============================================================================

/// Generated part of a nutrition plan
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NutritionPayload {
    meal_plan: Vec<Meal>,
    extra_tips: Vec<String>,
    disclaimer: String,
}

/// Generated workout plan before defaults are applied
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkoutPayload {
    routine: Vec<WorkoutDayPayload>,
    general_tips: Vec<String>,
    disclaimer: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkoutDayPayload {
    day_name: String,
    focus: String,
    exercises: Vec<ExercisePayload>,
}

#[derive(Debug, Deserialize)]
struct ExercisePayload {
    name: String,
    sets: String,
    reps: String,
    #[serde(default)]
    rest: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

impl From<ExercisePayload> for Exercise {
    fn from(payload: ExercisePayload) -> Self {
        Self {
            name: payload.name,
            sets: payload.sets,
            reps: payload.reps,
            rest: non_blank(payload.rest).unwrap_or_else(|| DEFAULT_REST.to_owned()),
            notes: non_blank(payload.notes),
        }
    }
}

impl From<WorkoutDayPayload> for WorkoutDay {
    fn from(payload: WorkoutDayPayload) -> Self {
        Self {
            day_name: payload.day_name,
            focus: payload.focus,
            exercises: payload.exercises.into_iter().map(Exercise::from).collect(),
        }
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Normalize raw generator text into a nutrition plan
///
/// # Errors
///
/// Returns [`PlanError`] when the text is empty, not JSON, or off-schema.
pub fn normalize_nutrition(raw: &str, metabolic: &MetabolicData) -> Result<NutritionPlan, PlanError> {
    let payload: NutritionPayload = parse_payload(raw)?;

    if payload.meal_plan.is_empty() {
        return Err(PlanError::schema_mismatch("mealPlan must contain at least one meal"));
    }

    debug!(
        meals = payload.meal_plan.len(),
        tips = payload.extra_tips.len(),
        "Normalized nutrition plan"
    );

    Ok(NutritionPlan {
        metabolic_summary: *metabolic,
        daily_goals: metabolic.daily_goals(),
        meal_plan: payload.meal_plan,
        extra_tips: payload.extra_tips,
        disclaimer: payload.disclaimer,
    })
}

/// Normalize raw generator text into a workout plan
///
/// # Errors
///
/// Returns [`PlanError`] when the text is empty, not JSON, or off-schema.
pub fn normalize_workout(raw: &str) -> Result<WorkoutPlan, PlanError> {
    let payload: WorkoutPayload = parse_payload(raw)?;

    if payload.routine.is_empty() {
        return Err(PlanError::schema_mismatch("routine must contain at least one day"));
    }

    let plan = WorkoutPlan {
        routine: payload.routine.into_iter().map(WorkoutDay::from).collect(),
        general_tips: payload.general_tips,
        disclaimer: payload.disclaimer,
    };

    debug!(
        days = plan.routine.len(),
        exercises = plan.routine.iter().map(|d| d.exercises.len()).sum::<usize>(),
        "Normalized workout plan"
    );

    Ok(plan)
}

fn parse_payload<T: DeserializeOwned>(raw: &str) -> Result<T, PlanError> {
    let text = strip_code_fence(raw.trim());
    if text.is_empty() {
        return Err(PlanError::EmptyResponse);
    }

    let value: Value =
        serde_json::from_str(text).map_err(|e| PlanError::malformed(e.to_string()))?;

    if !value.is_object() {
        return Err(PlanError::schema_mismatch(format!(
            "expected a JSON object, got {}",
            json_type_name(&value)
        )));
    }

    serde_json::from_value(value).map_err(|e| PlanError::schema_mismatch(e.to_string()))
}

/// Remove one surrounding markdown code fence such as "```json ... ```"
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string ("json") on the opening line
    let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("{}"), "{}");
        assert_eq!(strip_code_fence("```json\n```"), "");
    }

    #[test]
    fn test_non_object_is_schema_mismatch() {
        let err = normalize_workout("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, PlanError::SchemaMismatch { .. }));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let exercise = Exercise::from(ExercisePayload {
            name: "Agachamento".into(),
            sets: "4".into(),
            reps: "8-10".into(),
            rest: Some("  ".into()),
            notes: Some(String::new()),
        });
        assert_eq!(exercise.rest, "60s");
        assert_eq!(exercise.notes, None);
    }
}
