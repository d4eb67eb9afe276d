// ABOUTME: Structured output schemas for nutrition and workout plans
// ABOUTME: Uses the OpenAPI subset type names (OBJECT, ARRAY, STRING) understood by Gemini
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::{json, Value};

/// Schema for the generated part of a nutrition plan
///
/// `mealPlan`, `extraTips` and `disclaimer` are required; every meal requires
/// `time`, `name` and `items`.
#[must_use]
pub fn nutrition_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "mealPlan": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "time": { "type": "STRING" },
                        "name": { "type": "STRING" },
                        "items": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": ["time", "name", "items"]
                }
            },
            "extraTips": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "disclaimer": { "type": "STRING" }
        },
        "required": ["mealPlan", "extraTips", "disclaimer"]
    })
}

/// Schema for a workout plan
///
/// Exercises require `name`, `sets` and `reps`; `rest` and `notes` are optional.
#[must_use]
pub fn workout_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "routine": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "dayName": { "type": "STRING" },
                        "focus": { "type": "STRING" },
                        "exercises": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": { "type": "STRING" },
                                    "sets": { "type": "STRING" },
                                    "reps": { "type": "STRING" },
                                    "rest": { "type": "STRING" },
                                    "notes": { "type": "STRING" }
                                },
                                "required": ["name", "sets", "reps"]
                            }
                        }
                    },
                    "required": ["dayName", "focus", "exercises"]
                }
            },
            "generalTips": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "disclaimer": { "type": "STRING" }
        },
        "required": ["routine", "generalTips", "disclaimer"]
    })
}
