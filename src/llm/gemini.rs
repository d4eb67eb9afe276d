// ABOUTME: Google Gemini plan generator using native structured output
// ABOUTME: Sends prompt plus response schema to generateContent and returns the raw JSON text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gemini Provider
//!
//! Implementation of the `PlanGenerator` trait for Google's Gemini models.
//!
//! ## Configuration
//!
//! Set the `API_KEY` (or `GEMINI_API_KEY`) environment variable with your API
//! key from Google AI Studio: <https://aistudio.google.com/app/apikey>.
//! See [`GeneratorConfig`] for the remaining variables.
//!
//! Every request sets `responseMimeType = "application/json"` and passes the
//! plan schema as `responseSchema`, so the model is constrained server side.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use super::{GeneratorCapabilities, PlanGenerator};
use crate::config::GeneratorConfig;
use crate::errors::{AppError, AppResult, ErrorCode};

/// Identifier used in logs and error messages
const PROVIDER_NAME: &str = "gemini";

/// MIME type requested for structured output
const JSON_MIME_TYPE: &str = "application/json";

/// Header carrying the API key; keeps the credential out of URLs
const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig<'a>,
}

/// Content structure for Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

/// Part of content; non-text parts deserialize with `text = None`
#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// Generation configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    candidate_count: u32,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    usage_metadata: Option<UsageMetadata>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

/// Usage metadata from Gemini API response
#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "totalTokenCount")]
    total: Option<u32>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini plan generator
pub struct GeminiProvider {
    config: GeneratorConfig,
    client: Client,
}

impl GeminiProvider {
    /// Create a provider from explicit configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: GeneratorConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Create a provider from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if no credential is set, a variable is invalid, or the
    /// HTTP client cannot be built.
    pub fn from_env() -> AppResult<Self> {
        Self::new(GeneratorConfig::from_env()?)
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build the API URL for a model and method
    fn build_url(&self, method: &str) -> String {
        format!("{}/models/{}:{method}", self.config.base_url, self.config.model)
    }

    /// Build a structured-output request
    fn build_gemini_request<'a>(&self, prompt: &str, schema: &'a Value) -> GeminiRequest<'a> {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_owned()),
                parts: vec![ContentPart {
                    text: Some(prompt.to_owned()),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: schema,
                temperature: self.config.temperature,
                candidate_count: 1,
            },
        }
    }

    /// Concatenate the text parts of the first candidate
    fn extract_text(response: &GeminiResponse) -> String {
        response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    /// Map a reqwest failure to a transport or timeout error
    fn map_transport_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            warn!(
                timeout_ms = u64::try_from(self.config.request_timeout.as_millis())
                    .unwrap_or(u64::MAX),
                "Gemini request timed out"
            );
            return AppError::timeout(PROVIDER_NAME, self.config.request_timeout);
        }
        // Display would otherwise append the request URL
        let error = error.without_url();
        AppError::transport(PROVIDER_NAME, format!("HTTP request failed: {error}"))
    }

    /// Map API error status to appropriate error type
    ///
    /// For rate limit (429) errors, returns a friendly quota message.
    fn map_api_error(status: u16, response_text: &str) -> AppError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        let details = serde_json::json!({ "status": status });
        match status {
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                Self::extract_quota_message(&message),
            )
            .with_details(details),
            401 | 403 => AppError::new(
                ErrorCode::ExternalAuthFailed,
                format!("Gemini rejected the API key ({status}): {message}"),
            )
            .with_details(details),
            _ => AppError::external_service(
                PROVIDER_NAME,
                format!("API error ({status}): {message}"),
            )
            .with_details(details),
        }
    }

    /// Extract a user-friendly quota message from a Gemini error
    fn extract_quota_message(message: &str) -> String {
        // Example: "Please retry in 6.406453963s."
        const RETRY_PREFIX: &str = "Please retry in ";
        if let Some(retry_pos) = message.find(RETRY_PREFIX) {
            let after_prefix = &message[retry_pos + RETRY_PREFIX.len()..];
            if let Some(s_pos) = after_prefix.find('s') {
                if let Ok(seconds) = after_prefix[..s_pos].parse::<f64>() {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let seconds_int = seconds.ceil() as u64;
                    return format!(
                        "AI service quota exceeded. Please try again in {seconds_int} seconds."
                    );
                }
            }
        }
        "AI service quota exceeded. Please wait a moment and try again.".to_owned()
    }
}

#[async_trait]
impl PlanGenerator for GeminiProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn capabilities(&self) -> GeneratorCapabilities {
        GeneratorCapabilities::structured_output()
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    #[instrument(skip(self, prompt, schema), fields(model = %self.config.model, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str, schema: &Value) -> AppResult<String> {
        let url = self.build_url("generateContent");
        let gemini_request = self.build_gemini_request(prompt, schema);

        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini envelope");
                AppError::external_service(
                    PROVIDER_NAME,
                    format!("Failed to parse Gemini response: {e}"),
                )
            })?;

        if let Some(error) = &gemini_response.error {
            return Err(AppError::external_service(
                PROVIDER_NAME,
                format!("API error: {}", error.message),
            ));
        }

        let text = Self::extract_text(&gemini_response);
        let finish_reason = gemini_response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.finish_reason.as_deref());

        debug!(
            text_len = text.len(),
            finish_reason = finish_reason.unwrap_or("unknown"),
            total_tokens = gemini_response.usage_metadata.and_then(|u| u.total),
            "Received Gemini response"
        );

        Ok(text)
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> AppResult<bool> {
        let url = format!("{}/models", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        Ok(response.status().is_success())
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("config", &self.config)
            // Omit `client` field as HTTP clients are not useful to debug
            .finish_non_exhaustive()
    }
}
