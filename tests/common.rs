// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, profile fixtures, canned plan JSON, and a scripted generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitplan`

use std::collections::VecDeque;
use std::sync::{Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use fitplan::errors::{AppError, AppResult, ErrorCode};
use fitplan::llm::{GeneratorCapabilities, PlanGenerator};
use fitplan::models::{
    ActivityLevel, Gender, TrainingLevel, TrainingLocation, UserProfile, WorkoutProfile,
};
use serde_json::{json, Value};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

// ============================================================================
// Profile Fixtures
// ============================================================================

/// Form defaults: 25 y, female, 70 kg, 165 cm, moderate, goal 60 kg
pub fn default_nutrition_profile() -> UserProfile {
    UserProfile {
        age: 25,
        gender: Gender::Female,
        weight: 70.0,
        height: 165.0,
        activity_level: ActivityLevel::Moderate,
        goal_weight: 60.0,
        restrictions: String::new(),
    }
}

pub fn nutrition_profile(
    gender: Gender,
    age: u32,
    weight: f64,
    height: f64,
    activity_level: ActivityLevel,
) -> UserProfile {
    UserProfile {
        age,
        gender,
        weight,
        height,
        activity_level,
        goal_weight: weight,
        restrictions: String::new(),
    }
}

/// Form defaults: Hipertrofia, intermediate, 4 days, gym
pub fn default_workout_profile() -> WorkoutProfile {
    WorkoutProfile {
        goal: "Hipertrofia".into(),
        level: TrainingLevel::Intermediate,
        frequency: 4,
        location: TrainingLocation::Gym,
        restrictions: String::new(),
    }
}

// ============================================================================
// Canned Generator Output
// ============================================================================

pub fn nutrition_plan_value() -> Value {
    json!({
        "mealPlan": [
            {
                "time": "07:00",
                "name": "Café da manhã",
                "items": ["2 ovos mexidos", "1 fatia de pão integral", "1 banana"]
            },
            {
                "time": "12:30",
                "name": "Almoço",
                "items": ["150g de frango grelhado", "4 colheres de arroz", "Salada verde"]
            }
        ],
        "extraTips": ["Beba 2L de água por dia"],
        "disclaimer": "Consulte um nutricionista."
    })
}

pub fn nutrition_plan_json() -> String {
    nutrition_plan_value().to_string()
}

pub fn workout_plan_value() -> Value {
    json!({
        "routine": [
            {
                "dayName": "Dia 1",
                "focus": "Peito e tríceps",
                "exercises": [
                    { "name": "Supino reto", "sets": "4", "reps": "8-10", "rest": "90s" },
                    { "name": "Tríceps corda", "sets": "3", "reps": "12", "notes": "Cotovelos fixos" }
                ]
            },
            {
                "dayName": "Dia 2",
                "focus": "Costas e bíceps",
                "exercises": [
                    { "name": "Remada curvada", "sets": "3-4", "reps": "10", "rest": "60s" }
                ]
            }
        ],
        "generalTips": ["Aqueça antes de treinar"],
        "disclaimer": "Consulte um profissional de educação física."
    })
}

pub fn workout_plan_json() -> String {
    workout_plan_value().to_string()
}

// ============================================================================
// Scripted Generator
// ============================================================================

/// One scripted answer: wait `delay`, then return `result`
pub struct ScriptedReply {
    pub delay: Duration,
    pub result: Result<String, (ErrorCode, String)>,
}

impl ScriptedReply {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(text.into()),
        }
    }

    pub fn err(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err((code, message.into())),
        }
    }

    #[must_use]
    pub const fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Generator fake that answers calls in order from a script
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<ScriptedReply>>,
    prompts: Mutex<Vec<String>>,
    schemas: Mutex<Vec<Value>>,
    capabilities: GeneratorCapabilities,
}

impl ScriptedGenerator {
    pub fn new(replies: impl IntoIterator<Item = ScriptedReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
            schemas: Mutex::new(Vec::new()),
            capabilities: GeneratorCapabilities::structured_output(),
        }
    }

    #[must_use]
    pub fn with_capabilities(mut self, capabilities: GeneratorCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Schemas received so far, in call order
    pub fn schemas(&self) -> Vec<Value> {
        self.schemas.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl PlanGenerator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn capabilities(&self) -> GeneratorCapabilities {
        self.capabilities
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn generate(&self, prompt: &str, schema: &Value) -> AppResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        self.schemas.lock().unwrap().push(schema.clone());
        let reply = self.replies.lock().unwrap().pop_front();

        let Some(reply) = reply else {
            return Err(AppError::internal("scripted generator has no reply left"));
        };

        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply
            .result
            .map_err(|(code, message)| AppError::new(code, message))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
