// ABOUTME: Unified error handling with error codes, categories, and context
// ABOUTME: AppError is the single error type crossing module boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Defines the standard error type, error codes, and error categories used across
//! the workspace. Domain-specific errors (such as [`PlanError`]) convert into
//! [`AppError`] so the submission boundary only deals with one type.

mod plan;

pub use plan::PlanError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// A required field is missing
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A numeric field is outside the accepted domain
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // External Services (5000-5999)
    /// The generator answered with an error
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// The generator could not be reached
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,
    /// The generator rejected the credential
    #[serde(rename = "EXTERNAL_AUTH_FAILED")]
    ExternalAuthFailed = 5002,
    /// The generator rate limited the request
    #[serde(rename = "EXTERNAL_RATE_LIMITED")]
    ExternalRateLimited = 5003,
    /// The generator did not answer within the configured timeout
    #[serde(rename = "EXTERNAL_TIMEOUT")]
    ExternalTimeout = 5004,

    // Generated content (7000-7999)
    /// The generator returned no text
    #[serde(rename = "EMPTY_RESPONSE")]
    EmptyResponse = 7000,
    /// The generator returned text that is not JSON
    #[serde(rename = "MALFORMED_JSON")]
    MalformedJson = 7001,
    /// The generator returned JSON that does not match the plan schema
    #[serde(rename = "SCHEMA_MISMATCH")]
    SchemaMismatch = 7002,

    // Configuration (6000-6999)
    /// Required configuration is missing
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
    /// Configuration value is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

/// Coarse failure classes a submission can end in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Profile fields missing or out of domain
    Validation,
    /// Network or provider failure reaching the generator
    Transport,
    /// The generator did not answer in time
    Timeout,
    /// The generator returned no text
    EmptyResponse,
    /// The generator returned non-JSON text
    MalformedJson,
    /// The generator returned JSON with the wrong shape
    SchemaMismatch,
    /// Startup configuration problem
    Configuration,
    /// Anything else
    Internal,
}

impl ErrorCode {
    /// Failure class of this code
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField | Self::ValueOutOfRange => {
                ErrorCategory::Validation
            }
            Self::ExternalServiceError
            | Self::ExternalServiceUnavailable
            | Self::ExternalAuthFailed
            | Self::ExternalRateLimited => ErrorCategory::Transport,
            Self::ExternalTimeout => ErrorCategory::Timeout,
            Self::EmptyResponse => ErrorCategory::EmptyResponse,
            Self::MalformedJson => ErrorCategory::MalformedJson,
            Self::SchemaMismatch => ErrorCategory::SchemaMismatch,
            Self::ConfigMissing | Self::ConfigInvalid => ErrorCategory::Configuration,
            Self::InternalError => ErrorCategory::Internal,
        }
    }

    /// Get a description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::MissingRequiredField => "A required field is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ExternalServiceError => "The plan generator encountered an error",
            Self::ExternalServiceUnavailable => "The plan generator is currently unavailable",
            Self::ExternalAuthFailed => "Authentication with the plan generator failed",
            Self::ExternalRateLimited => "The plan generator rate limit was exceeded",
            Self::ExternalTimeout => "The plan generator did not respond in time",
            Self::EmptyResponse => "The plan generator returned an empty response",
            Self::MalformedJson => "The plan generator returned malformed JSON",
            Self::SchemaMismatch => "The generated plan does not match the expected structure",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Request ID for tracing
    pub request_id: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            request_id: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message (diagnostic, not shown to end users)
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a request ID to the error context
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.context.request_id = Some(request_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Failure class of this error
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.code.category()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Value outside the accepted domain
    #[must_use]
    pub fn out_of_range(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message.into())
            .with_details(serde_json::json!({ "field": field }))
    }

    /// Required field missing
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Field '{field}' is required"),
        )
        .with_details(serde_json::json!({ "field": field }))
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Missing configuration
    #[must_use]
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// Invalid configuration
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Transport failure talking to an external service
    #[must_use]
    pub fn transport(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service answered with an error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service exceeded the configured timeout
    #[must_use]
    pub fn timeout(service: impl Into<String>, timeout: Duration) -> Self {
        let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        Self::new(
            ErrorCode::ExternalTimeout,
            format!("{} did not respond within {timeout_ms}ms", service.into()),
        )
        .with_details(serde_json::json!({ "timeout_ms": timeout_ms }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_categories() {
        assert_eq!(
            ErrorCode::ValueOutOfRange.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            ErrorCode::ExternalRateLimited.category(),
            ErrorCategory::Transport
        );
        assert_eq!(ErrorCode::ExternalTimeout.category(), ErrorCategory::Timeout);
        assert_eq!(
            ErrorCode::SchemaMismatch.category(),
            ErrorCategory::SchemaMismatch
        );
    }

    #[test]
    fn test_app_error_creation() {
        let error = AppError::out_of_range("age", "Age must be between 10 and 120")
            .with_request_id("req-123");

        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.context.request_id.as_deref(), Some("req-123"));
        assert_eq!(error.context.details["field"], "age");
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::timeout("gemini", Duration::from_secs(30));
        let rendered = error.to_string();
        assert!(rendered.contains("did not respond in time"));
        assert!(rendered.contains("30000ms"));
    }

    #[test]
    fn test_sub_second_timeout_keeps_precision() {
        let error = AppError::timeout("gemini", Duration::from_millis(250));
        assert!(error.message.contains("within 250ms"));
        assert_eq!(error.context.details["timeout_ms"], 250);
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::MalformedJson).unwrap();
        assert_eq!(json, "\"MALFORMED_JSON\"");
    }
}
