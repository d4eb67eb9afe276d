// ABOUTME: Main library entry point for the fitplan nutrition and workout planner
// ABOUTME: Metabolic calculation, plan request building, generation, and normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # fitplan
//!
//! Derives daily energy and macro targets from a biometric profile and asks a
//! hosted model for a structured nutrition or workout plan.
//!
//! ## Architecture
//!
//! - **Intelligence**: Mifflin-St Jeor metabolic calculator (pure, infallible)
//! - **Plans**: prompt plus schema request builder and output normalizer
//! - **LLM**: `PlanGenerator` trait and the Gemini implementation
//! - **Services**: `PlanSession`, the submission boundary with request fencing
//! - **Config**: metabolic coefficients and generator settings from the environment
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fitplan::config::GeneratorConfig;
//! use fitplan::llm::GeminiProvider;
//! use fitplan::models::{ActivityLevel, Gender, UserProfile};
//! use fitplan::services::PlanSession;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = GeneratorConfig::from_env()?;
//!     let timeout = config.request_timeout;
//!     let session = PlanSession::new(Arc::new(GeminiProvider::new(config)?), timeout);
//!
//!     let profile = UserProfile {
//!         age: 25,
//!         gender: Gender::Female,
//!         weight: 70.0,
//!         height: 165.0,
//!         activity_level: ActivityLevel::Moderate,
//!         goal_weight: 60.0,
//!         restrictions: String::new(),
//!     };
//!     let outcome = session.submit_nutrition(&profile).await?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

/// Metabolic coefficients and generator configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Metabolic calculator
pub mod intelligence;

/// Plan generator abstraction and providers
pub mod llm;

/// Logging configuration and structured plan events
pub mod logging;

/// Profiles, metabolic data, and plan models
pub mod models;

/// Plan request builder and output normalizer
pub mod plans;

/// Plan submission session
pub mod services;
