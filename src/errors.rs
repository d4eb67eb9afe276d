// ABOUTME: Error types re-exported from the core crate
// ABOUTME: AppError, ErrorCode, ErrorCategory, and PlanError for crate consumers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use fitplan_core::errors::*;
