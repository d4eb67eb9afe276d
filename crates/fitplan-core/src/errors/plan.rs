// ABOUTME: Errors raised while turning generator output into typed plans
// ABOUTME: Distinguishes empty output, non-JSON text, and JSON with the wrong shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Failures of the plan normalizer.
///
/// Converted into [`AppError`] at the submission boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Generator returned no text (absent, empty, or whitespace only)
    #[error("generator returned an empty response")]
    EmptyResponse,

    /// Text returned but not parseable as JSON
    #[error("generator returned malformed JSON: {reason}")]
    MalformedJson {
        /// Parser diagnostic
        reason: String,
    },

    /// Parsed JSON lacks mandatory fields or has the wrong structure
    #[error("generated plan does not match schema: {reason}")]
    SchemaMismatch {
        /// What was missing or mistyped
        reason: String,
    },
}

impl PlanError {
    /// Create a malformed JSON error
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedJson {
            reason: reason.into(),
        }
    }

    /// Create a schema mismatch error
    #[must_use]
    pub fn schema_mismatch(reason: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            reason: reason.into(),
        }
    }

    /// Error code this failure maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyResponse => ErrorCode::EmptyResponse,
            Self::MalformedJson { .. } => ErrorCode::MalformedJson,
            Self::SchemaMismatch { .. } => ErrorCode::SchemaMismatch,
        }
    }
}

impl From<PlanError> for AppError {
    fn from(error: PlanError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}
