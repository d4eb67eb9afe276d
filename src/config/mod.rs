// ABOUTME: Configuration module for metabolic coefficients and plan generator settings
// ABOUTME: Environment-only configuration; no configuration files are read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Metabolic**: coefficients, activity factors, deficit, floors, macro split
//! - **Generator**: credential, model, endpoint, and timeout for the remote model

/// Metabolic calculation configuration
pub mod metabolic;

/// Plan generator configuration loaded from the environment
pub mod generator;

pub use generator::GeneratorConfig;
pub use metabolic::{
    ActivityFactorsConfig, BmrConfig, EnergyTargetConfig, MacroSplitConfig, MetabolicConfig,
};
