// ABOUTME: Tests for configuration loaded from environment variables
// ABOUTME: Generator credential fallback, overrides, invalid values, and logging format selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use fitplan::{
    config::{generator::DEFAULT_MODEL, GeneratorConfig, MetabolicConfig},
    errors::ErrorCode,
    llm::GeminiProvider,
    logging::{LogFormat, LoggingConfig},
};
use serial_test::serial;

const GENERATOR_VARS: [&str; 6] = [
    "API_KEY",
    "GEMINI_API_KEY",
    "FITPLAN_LLM_MODEL",
    "FITPLAN_LLM_BASE_URL",
    "FITPLAN_REQUEST_TIMEOUT_SECS",
    "FITPLAN_LLM_TEMPERATURE",
];

fn clear_generator_env() {
    for var in GENERATOR_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_missing_credential_is_config_missing() {
    clear_generator_env();

    let err = GeneratorConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
    assert!(GeminiProvider::from_env().is_err());
}

#[test]
#[serial]
fn test_defaults_with_primary_key() {
    clear_generator_env();
    env::set_var("API_KEY", "primary");
    env::set_var("GEMINI_API_KEY", "fallback");

    let config = GeneratorConfig::from_env().unwrap();
    assert_eq!(config.api_key, "primary");
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.request_timeout, Duration::from_secs(60));
    assert_eq!(config.temperature, None);

    clear_generator_env();
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_generator_env();
    env::set_var("GEMINI_API_KEY", "fallback");
    env::set_var("FITPLAN_LLM_MODEL", "gemini-2.5-flash");
    env::set_var("FITPLAN_LLM_BASE_URL", "http://localhost:8080/v1beta/");
    env::set_var("FITPLAN_REQUEST_TIMEOUT_SECS", "15");
    env::set_var("FITPLAN_LLM_TEMPERATURE", "0.4");

    let config = GeneratorConfig::from_env().unwrap();
    assert_eq!(config.api_key, "fallback");
    assert_eq!(config.model, "gemini-2.5-flash");
    assert_eq!(config.base_url, "http://localhost:8080/v1beta");
    assert_eq!(config.request_timeout, Duration::from_secs(15));
    assert_eq!(config.temperature, Some(0.4));

    clear_generator_env();
}

#[test]
#[serial]
fn test_invalid_timeout_is_config_invalid() {
    clear_generator_env();
    env::set_var("API_KEY", "key");
    env::set_var("FITPLAN_REQUEST_TIMEOUT_SECS", "soon");

    let err = GeneratorConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    clear_generator_env();
}

#[test]
#[serial]
fn test_debug_never_prints_key() {
    clear_generator_env();
    env::set_var("API_KEY", "super-secret-value");

    let config = GeneratorConfig::from_env().unwrap();
    assert!(!format!("{config:?}").contains("super-secret-value"));

    clear_generator_env();
}

#[test]
#[serial]
fn test_logging_format_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert_eq!(config.environment, "production");

    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
}

#[test]
fn test_default_metabolic_config_is_valid() {
    assert!(MetabolicConfig::default().validate().is_ok());
}
