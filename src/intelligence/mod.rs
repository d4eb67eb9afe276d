// ABOUTME: Deterministic metabolic intelligence for nutrition planning
// ABOUTME: Exposes the Mifflin-St Jeor based energy and macro target calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// TMB, GETD, deficit, safety floor, and macro split calculation
pub mod metabolic_calculator;

pub use metabolic_calculator::{
    activity_factor, calculate_metabolic_data, calculate_metabolic_data_with_config,
    calculate_tmb, safety_floor,
};
