// ABOUTME: Plan generator abstraction for remote structured-output models
// ABOUTME: Defines the contract a generator implements and its capability flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Generator Interface
//!
//! A generator receives a natural-language prompt plus an output schema and
//! returns raw text that is expected, but not guaranteed, to be JSON matching
//! the schema. Parsing and validation belong to the plan normalizer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fitplan::llm::{GeminiProvider, PlanGenerator};
//! use fitplan::errors::AppError;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let generator = GeminiProvider::from_env()?;
//!     let schema = json!({ "type": "OBJECT", "properties": {} });
//!     let raw = generator.generate("Responda em JSON.", &schema).await?;
//!     println!("{raw}");
//!     Ok(())
//! }
//! ```

mod gemini;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppResult;

// ============================================================================
// Capability Flags
// ============================================================================

bitflags::bitflags! {
    /// Generator capability flags
    ///
    /// The session checks these before submitting so that a generator unable
    /// to enforce the schema is noticed in the logs.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct GeneratorCapabilities: u8 {
        /// Generator can be asked for `application/json` output
        const JSON_MODE = 0b0000_0001;
        /// Generator enforces a response schema server side
        const RESPONSE_SCHEMA = 0b0000_0010;
        /// Generator accepts a separate system instruction
        const SYSTEM_INSTRUCTIONS = 0b0000_0100;
    }
}

impl GeneratorCapabilities {
    /// Capabilities of a plain text model with no output constraints
    #[must_use]
    pub const fn text_only() -> Self {
        Self::empty()
    }

    /// Capabilities of a model with native structured output
    #[must_use]
    pub const fn structured_output() -> Self {
        Self::JSON_MODE
            .union(Self::RESPONSE_SCHEMA)
            .union(Self::SYSTEM_INSTRUCTIONS)
    }

    /// Check if JSON mode is supported
    #[must_use]
    pub const fn supports_json_mode(&self) -> bool {
        self.contains(Self::JSON_MODE)
    }

    /// Check if a response schema is enforced
    #[must_use]
    pub const fn supports_response_schema(&self) -> bool {
        self.contains(Self::RESPONSE_SCHEMA)
    }
}

// ============================================================================
// Generator Trait
// ============================================================================

/// Remote structured plan generator
///
/// Each call to [`PlanGenerator::generate`] performs exactly one outbound
/// request. Implementations do not retry.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Unique generator identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Generator capabilities
    fn capabilities(&self) -> GeneratorCapabilities;

    /// Model used for generation
    fn model(&self) -> &str;

    /// Send a prompt and output schema, returning the raw model text
    ///
    /// An empty string means the model produced no text.
    async fn generate(&self, prompt: &str, schema: &Value) -> AppResult<String>;

    /// Check if the generator is reachable and the credential is valid
    async fn health_check(&self) -> AppResult<bool>;
}
