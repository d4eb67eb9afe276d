// ABOUTME: Plan request/response contract with the remote generator
// ABOUTME: Builds prompt plus schema requests and normalizes raw output into typed plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plans
//!
//! - [`prompts`] renders a profile into a [`PlanRequest`]
//! - [`schema`] holds the structured output schemas sent with each request
//! - [`normalizer`] turns raw generator text into a typed plan

pub mod normalizer;
pub mod prompts;
pub mod schema;

pub use normalizer::{normalize_nutrition, normalize_workout};
pub use prompts::{build_nutrition_request, build_workout_request};
pub use schema::{nutrition_plan_schema, workout_plan_schema};

use serde::Serialize;
use serde_json::Value;

use crate::models::PlanKind;

/// A fully rendered generation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRequest {
    /// Which plan this request produces
    pub kind: PlanKind,
    /// Natural-language instruction (Portuguese)
    pub prompt: String,
    /// Output schema in the provider's OpenAPI subset
    pub schema: Value,
}
