// ABOUTME: Plan generator configuration read once from environment variables
// ABOUTME: Credential, model, endpoint, request timeout, and sampling temperature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use fitplan_core::errors::{AppError, AppResult};
use tracing::debug;

/// Default model for plan generation
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Base URL for the Gemini API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default bound on a single generation round trip
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Settings for the remote plan generator.
///
/// The credential is read once at construction; there is no rotation.
#[derive(Clone)]
pub struct GeneratorConfig {
    /// API credential
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// API base URL
    pub base_url: String,
    /// Upper bound on a single generation call
    pub request_timeout: Duration,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: Option<f32>,
}

impl GeneratorConfig {
    /// Primary credential variable
    pub const API_KEY_ENV_VAR: &'static str = "API_KEY";
    /// Fallback credential variable
    pub const GEMINI_API_KEY_ENV_VAR: &'static str = "GEMINI_API_KEY";
    /// Model override
    pub const MODEL_ENV_VAR: &'static str = "FITPLAN_LLM_MODEL";
    /// Endpoint override
    pub const BASE_URL_ENV_VAR: &'static str = "FITPLAN_LLM_BASE_URL";
    /// Request timeout in seconds
    pub const TIMEOUT_ENV_VAR: &'static str = "FITPLAN_REQUEST_TIMEOUT_SECS";
    /// Sampling temperature
    pub const TEMPERATURE_ENV_VAR: &'static str = "FITPLAN_LLM_TEMPERATURE";

    /// Create a configuration with defaults for everything but the credential
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            temperature: None,
        }
    }

    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when no credential is set and `ConfigInvalid` when a
    /// numeric variable cannot be parsed or is out of range.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Same as [`GeneratorConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = non_empty(Self::API_KEY_ENV_VAR)
            .or_else(|| non_empty(Self::GEMINI_API_KEY_ENV_VAR))
            .ok_or_else(|| {
                AppError::config_missing(format!(
                    "{} environment variable not set",
                    Self::API_KEY_ENV_VAR
                ))
            })?;

        let mut config = Self::new(api_key);

        if let Some(model) = non_empty(Self::MODEL_ENV_VAR) {
            config.model = model;
        }
        if let Some(base_url) = non_empty(Self::BASE_URL_ENV_VAR) {
            config.base_url = base_url.trim_end_matches('/').to_owned();
        }
        if let Some(raw) = non_empty(Self::TIMEOUT_ENV_VAR) {
            config.request_timeout = Duration::from_secs(parse_timeout_secs(&raw)?);
        }
        if let Some(raw) = non_empty(Self::TEMPERATURE_ENV_VAR) {
            config.temperature = Some(parse_temperature(&raw)?);
        }

        debug!(
            model = %config.model,
            base_url = %config.base_url,
            timeout_secs = config.request_timeout.as_secs(),
            "Generator configuration loaded"
        );

        Ok(config)
    }

    /// Set the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Debug for GeneratorConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("temperature", &self.temperature)
            .finish()
    }
}

fn parse_timeout_secs(raw: &str) -> AppResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(AppError::config_invalid(format!(
            "{} must be a positive integer number of seconds, got '{raw}'",
            GeneratorConfig::TIMEOUT_ENV_VAR
        ))),
    }
}

fn parse_temperature(raw: &str) -> AppResult<f32> {
    match raw.trim().parse::<f32>() {
        Ok(value) if (0.0..=2.0).contains(&value) => Ok(value),
        _ => Err(AppError::config_invalid(format!(
            "{} must be between 0.0 and 2.0, got '{raw}'",
            GeneratorConfig::TEMPERATURE_ENV_VAR
        ))),
    }
}
