// ABOUTME: Application constants re-exported from the core crate
// ABOUTME: Equation coefficients, safety floors, limits, and user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use fitplan_core::constants::*;
