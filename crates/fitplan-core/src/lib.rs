// ABOUTME: Core types and constants for the fitplan workspace
// ABOUTME: Foundation crate with error handling, domain models, and metabolic constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan Core
//!
//! Foundation crate providing shared types and constants for metabolic target
//! calculation and AI plan generation. This crate is designed to change
//! infrequently so the main crate recompiles on its own.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `PlanError`
//! - **constants**: Metabolic formula constants and plan defaults
//! - **models**: Profiles, metabolic data, and plan structures

/// Unified error handling system with standard error codes
pub mod errors;

/// Metabolic formula constants and plan defaults organized by domain
pub mod constants;

/// Core data models (profiles, metabolic data, nutrition and workout plans)
pub mod models;
