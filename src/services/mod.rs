// ABOUTME: Domain service layer for plan submission
// ABOUTME: Owns the submission boundary between profiles, the generator, and resident plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Front-ends (the `fitplan` binary, tests, or an embedding UI) talk to a
//! [`PlanSession`]; it validates, calculates, calls the generator, normalizes,
//! and decides whether a result is still current.

/// Submission state machine, request fencing, and the single resident plan
pub mod plan_session;

pub use plan_session::{
    ApplyOutcome, PlanSession, RequestTicket, ResolvedPlan, SubmissionError, SubmissionState,
};
