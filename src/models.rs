// ABOUTME: Domain models re-exported from the core crate
// ABOUTME: Profiles, metabolic targets, and generated plan structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use fitplan_core::models::*;
