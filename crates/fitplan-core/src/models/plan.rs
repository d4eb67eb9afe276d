// ABOUTME: Nutrition and workout plan structures rendered by the dashboard
// ABOUTME: Only one plan of either kind is retained at a time by the session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::MetabolicData;
use crate::constants::messages;

/// Which kind of plan a request produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    /// Meal plan with metabolic targets
    Nutrition,
    /// Weekly training routine
    Workout,
}

impl PlanKind {
    /// Stable identifier used in logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nutrition => "nutrition",
            Self::Workout => "workout",
        }
    }

    /// User-facing message when generation fails
    #[must_use]
    pub const fn failure_message(&self) -> &'static str {
        match self {
            Self::Nutrition => messages::NUTRITION_FAILURE,
            Self::Workout => messages::WORKOUT_FAILURE,
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single meal in the daily menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// When to eat, e.g. "07:00"
    pub time: String,
    /// Meal name, e.g. "Café da manhã"
    pub name: String,
    /// Foods and portions
    pub items: Vec<String>,
}

/// Nutrition plan: local metabolic targets plus the generated menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPlan {
    /// Locally computed targets; never taken from generator output
    pub metabolic_summary: MetabolicData,
    /// "{kcal} kcal | P: {p}g | C: {c}g | G: {f}g"
    pub daily_goals: String,
    /// Ordered meals
    pub meal_plan: Vec<Meal>,
    /// Additional advice
    pub extra_tips: Vec<String>,
    /// Medical disclaimer
    pub disclaimer: String,
}

/// One exercise prescription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Sets, may be a range such as "3-4"
    pub sets: String,
    /// Repetitions, may be a range such as "8-12"
    pub reps: String,
    /// Rest interval, "60s" when the model omits it
    pub rest: String,
    /// Execution notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One training day of the routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    /// e.g. "Dia 1"
    pub day_name: String,
    /// Muscle groups or theme of the day
    pub focus: String,
    /// Ordered exercises
    pub exercises: Vec<Exercise>,
}

/// Workout plan as generated; the model is the sole source of exercise data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Ordered training days
    pub routine: Vec<WorkoutDay>,
    /// General advice
    pub general_tips: Vec<String>,
    /// Medical disclaimer
    pub disclaimer: String,
}

/// Either kind of plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "plan", rename_all = "snake_case")]
pub enum Plan {
    /// Nutrition plan
    Nutrition(NutritionPlan),
    /// Workout plan
    Workout(WorkoutPlan),
}

impl Plan {
    /// Kind of this plan
    #[must_use]
    pub const fn kind(&self) -> PlanKind {
        match self {
            Self::Nutrition(_) => PlanKind::Nutrition,
            Self::Workout(_) => PlanKind::Workout,
        }
    }

    /// Nutrition plan, if this is one
    #[must_use]
    pub const fn as_nutrition(&self) -> Option<&NutritionPlan> {
        match self {
            Self::Nutrition(plan) => Some(plan),
            Self::Workout(_) => None,
        }
    }

    /// Workout plan, if this is one
    #[must_use]
    pub const fn as_workout(&self) -> Option<&WorkoutPlan> {
        match self {
            Self::Workout(plan) => Some(plan),
            Self::Nutrition(_) => None,
        }
    }
}

impl From<NutritionPlan> for Plan {
    fn from(plan: NutritionPlan) -> Self {
        Self::Nutrition(plan)
    }
}

impl From<WorkoutPlan> for Plan {
    fn from(plan: WorkoutPlan) -> Self {
        Self::Workout(plan)
    }
}
