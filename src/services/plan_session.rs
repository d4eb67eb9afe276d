// ABOUTME: Plan session handling submission, request ordering, and the resident plan
// ABOUTME: Issues per-kind request tokens so only the latest result for a plan kind is applied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Session
//!
//! Every submission is issued a [`RequestTicket`] carrying a token that grows
//! monotonically per plan kind. When the generator answers, the result is
//! applied only if its token is still the latest for that kind; otherwise it is
//! discarded. A session holds at most one plan: applying a nutrition plan drops
//! a held workout plan and vice versa.
//!
//! State lives behind a [`std::sync::Mutex`] that is only locked for
//! bookkeeping, never across the generator call.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──▶ Succeeded | Failed ──(submit or tab switch)──▶ Idle
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::time::{timeout, Instant};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::config::metabolic::MetabolicConfig;
use crate::constants::messages;
use crate::errors::{AppError, AppResult, ErrorCategory};
use crate::intelligence::calculate_metabolic_data_with_config;
use crate::llm::PlanGenerator;
use crate::logging::PlanLogger;
use crate::models::{NutritionPlan, Plan, PlanKind, UserProfile, WorkoutPlan, WorkoutProfile};
use crate::plans::{
    build_nutrition_request, build_workout_request, normalize_nutrition, normalize_workout,
    PlanRequest,
};

// ============================================================================
// Public Types
// ============================================================================

/// Where a plan kind stands in its submission cycle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionState {
    /// Nothing in flight and nothing to report
    #[default]
    Idle,
    /// A request is in flight
    Submitting,
    /// The latest request produced the resident plan
    Succeeded,
    /// The latest request failed
    Failed {
        /// Failure class
        category: ErrorCategory,
        /// Message shown to the user
        message: String,
    },
}

/// Proof of submission, used to decide whether a result is still current
#[derive(Debug, Clone)]
pub struct RequestTicket {
    /// Plan kind requested
    pub kind: PlanKind,
    /// Monotonic per-kind token
    pub token: u64,
    /// Correlation id for logs and errors
    pub request_id: Uuid,
    issued_at: Instant,
}

/// A plan accepted into the session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPlan {
    /// The plan itself
    #[serde(flatten)]
    pub plan: Plan,
    /// Token of the request that produced it
    pub request_token: u64,
    /// Correlation id of the request that produced it
    pub request_id: Uuid,
    /// When the plan was applied
    pub generated_at: DateTime<Utc>,
}

/// What happened to a completed request
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// The result became the resident plan
    Applied(ResolvedPlan),
    /// A newer request for the same kind was issued; the result was discarded
    Superseded {
        /// Token of the discarded request
        token: u64,
        /// Latest token issued for the kind
        latest: u64,
    },
}

impl ApplyOutcome {
    /// The applied plan, if any
    #[must_use]
    pub const fn applied(&self) -> Option<&ResolvedPlan> {
        match self {
            Self::Applied(resolved) => Some(resolved),
            Self::Superseded { .. } => None,
        }
    }
}

/// Failure of the latest submission for a plan kind
///
/// `user_message` is what a front-end shows; `detail` carries the diagnostic
/// error, which has already been logged.
#[derive(Debug, Error)]
#[error("{user_message}")]
pub struct SubmissionError {
    /// Plan kind requested
    pub kind: PlanKind,
    /// Failure class
    pub category: ErrorCategory,
    /// Portuguese message for the user
    pub user_message: String,
    /// Underlying error
    #[source]
    pub detail: AppError,
}

impl SubmissionError {
    fn new(kind: PlanKind, detail: AppError) -> Self {
        let category = detail.category();
        let user_message = if category == ErrorCategory::Validation {
            format!("{}: {}", messages::INVALID_PROFILE_PREFIX, detail.message)
        } else {
            kind.failure_message().to_owned()
        };
        Self {
            kind,
            category,
            user_message,
            detail,
        }
    }
}

// ============================================================================
// Session State
// ============================================================================

#[derive(Debug, Default)]
struct KindState {
    latest_token: u64,
    status: SubmissionState,
}

#[derive(Debug)]
struct SessionState {
    active_tab: PlanKind,
    nutrition: KindState,
    workout: KindState,
    resident: Option<ResolvedPlan>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            active_tab: PlanKind::Nutrition,
            nutrition: KindState::default(),
            workout: KindState::default(),
            resident: None,
        }
    }
}

impl SessionState {
    fn kind_mut(&mut self, kind: PlanKind) -> &mut KindState {
        match kind {
            PlanKind::Nutrition => &mut self.nutrition,
            PlanKind::Workout => &mut self.workout,
        }
    }

    const fn kind(&self, kind: PlanKind) -> &KindState {
        match kind {
            PlanKind::Nutrition => &self.nutrition,
            PlanKind::Workout => &self.workout,
        }
    }
}

// ============================================================================
// Plan Session
// ============================================================================

/// Submission boundary for nutrition and workout plans
pub struct PlanSession {
    generator: Arc<dyn PlanGenerator>,
    request_timeout: Duration,
    metabolic_config: MetabolicConfig,
    state: Mutex<SessionState>,
}

impl PlanSession {
    /// Create a session around a generator with a bound on each generator call
    #[must_use]
    pub fn new(generator: Arc<dyn PlanGenerator>, request_timeout: Duration) -> Self {
        if !generator.capabilities().supports_response_schema() {
            warn!(
                generator = generator.name(),
                "Generator does not enforce a response schema; output is validated locally only"
            );
        }
        Self {
            generator,
            request_timeout,
            metabolic_config: MetabolicConfig::default(),
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Use custom metabolic coefficients
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the configuration fails validation.
    pub fn with_metabolic_config(mut self, config: MetabolicConfig) -> AppResult<Self> {
        config.validate()?;
        self.metabolic_config = config;
        Ok(self)
    }

    /// Submit a nutrition profile and wait for the plan
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError`] when this submission is still the latest and
    /// validation, the generator call, or normalization failed. A superseded
    /// submission never errors; it reports [`ApplyOutcome::Superseded`].
    #[instrument(skip(self, profile), fields(plan.kind = "nutrition"))]
    pub async fn submit_nutrition(
        &self,
        profile: &UserProfile,
    ) -> Result<ApplyOutcome, SubmissionError> {
        let ticket = self.begin(PlanKind::Nutrition);
        let result = self.generate_nutrition(profile).await;
        self.complete(&ticket, result)
    }

    /// Submit a workout profile and wait for the plan
    ///
    /// # Errors
    ///
    /// Same as [`PlanSession::submit_nutrition`].
    #[instrument(skip(self, profile), fields(plan.kind = "workout"))]
    pub async fn submit_workout(
        &self,
        profile: &WorkoutProfile,
    ) -> Result<ApplyOutcome, SubmissionError> {
        let ticket = self.begin(PlanKind::Workout);
        let result = self.generate_workout(profile).await;
        self.complete(&ticket, result)
    }

    /// Issue a new request token for `kind` and mark it as submitting
    #[must_use]
    pub fn begin(&self, kind: PlanKind) -> RequestTicket {
        let token = {
            let mut state = self.lock();
            let entry = state.kind_mut(kind);
            entry.latest_token += 1;
            entry.status = SubmissionState::Submitting;
            entry.latest_token
        };

        PlanLogger::log_submission(kind, token, self.generator.name());

        RequestTicket {
            kind,
            token,
            request_id: Uuid::new_v4(),
            issued_at: Instant::now(),
        }
    }

    /// Apply a finished request if its ticket is still the latest for its kind
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError`] when the ticket is current and `result` is an
    /// error. The error is logged here.
    pub fn complete(
        &self,
        ticket: &RequestTicket,
        result: AppResult<Plan>,
    ) -> Result<ApplyOutcome, SubmissionError> {
        let mut state = self.lock();
        let latest = state.kind(ticket.kind).latest_token;

        if ticket.token != latest {
            drop(state);
            PlanLogger::log_plan_superseded(ticket.kind, ticket.token, latest);
            if let Err(error) = &result {
                debug!(error = %error, "Superseded request had failed");
            }
            return Ok(ApplyOutcome::Superseded {
                token: ticket.token,
                latest,
            });
        }

        match result {
            Ok(plan) if plan.kind() == ticket.kind => {
                let resolved = ResolvedPlan {
                    plan,
                    request_token: ticket.token,
                    request_id: ticket.request_id,
                    generated_at: Utc::now(),
                };
                // Single resident plan: this replaces a held plan of either kind
                state.resident = Some(resolved.clone());
                state.kind_mut(ticket.kind).status = SubmissionState::Succeeded;
                drop(state);

                let elapsed_ms = ticket.issued_at.elapsed().as_millis();
                PlanLogger::log_plan_applied(
                    ticket.kind,
                    ticket.token,
                    u64::try_from(elapsed_ms).unwrap_or(u64::MAX),
                );
                Ok(ApplyOutcome::Applied(resolved))
            }
            Ok(plan) => Self::fail(
                state,
                ticket,
                AppError::internal(format!(
                    "{} result delivered for a {} request",
                    plan.kind(),
                    ticket.kind
                )),
            ),
            Err(error) => Self::fail(state, ticket, error),
        }
    }

    /// Record the active tab; settled states return to idle
    pub fn switch_tab(&self, kind: PlanKind) {
        let mut guard = self.lock();
        let state = &mut *guard;
        state.active_tab = kind;
        for entry in [&mut state.nutrition, &mut state.workout] {
            if entry.status != SubmissionState::Submitting {
                entry.status = SubmissionState::Idle;
            }
        }
    }

    /// Drop the resident plan and discard every in-flight request
    pub fn reset(&self) {
        let mut guard = self.lock();
        let state = &mut *guard;
        state.resident = None;
        for entry in [&mut state.nutrition, &mut state.workout] {
            entry.latest_token += 1;
            entry.status = SubmissionState::Idle;
        }
    }

    /// Tab currently shown
    #[must_use]
    pub fn active_tab(&self) -> PlanKind {
        self.lock().active_tab
    }

    /// Submission state of a plan kind
    #[must_use]
    pub fn state(&self, kind: PlanKind) -> SubmissionState {
        self.lock().kind(kind).status.clone()
    }

    /// Latest token issued for a plan kind (0 before the first submission)
    #[must_use]
    pub fn latest_token(&self, kind: PlanKind) -> u64 {
        self.lock().kind(kind).latest_token
    }

    /// The plan currently held, of either kind
    #[must_use]
    pub fn resident_plan(&self) -> Option<ResolvedPlan> {
        self.lock().resident.clone()
    }

    /// The resident plan if it belongs to the active tab
    #[must_use]
    pub fn visible_plan(&self) -> Option<ResolvedPlan> {
        let state = self.lock();
        state
            .resident
            .as_ref()
            .filter(|resolved| resolved.plan.kind() == state.active_tab)
            .cloned()
    }

    /// The held nutrition plan, if any
    #[must_use]
    pub fn nutrition_plan(&self) -> Option<NutritionPlan> {
        self.lock()
            .resident
            .as_ref()
            .and_then(|resolved| resolved.plan.as_nutrition().cloned())
    }

    /// The held workout plan, if any
    #[must_use]
    pub fn workout_plan(&self) -> Option<WorkoutPlan> {
        self.lock()
            .resident
            .as_ref()
            .and_then(|resolved| resolved.plan.as_workout().cloned())
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        // State is plain bookkeeping; a panic elsewhere cannot leave it torn
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn fail(
        mut state: MutexGuard<'_, SessionState>,
        ticket: &RequestTicket,
        error: AppError,
    ) -> Result<ApplyOutcome, SubmissionError> {
        let error = error.with_request_id(ticket.request_id.to_string());
        let failure = SubmissionError::new(ticket.kind, error);
        state.kind_mut(ticket.kind).status = SubmissionState::Failed {
            category: failure.category,
            message: failure.user_message.clone(),
        };
        drop(state);

        PlanLogger::log_submission_failed(ticket.kind, ticket.token, &failure.detail);
        Err(failure)
    }

    async fn generate_nutrition(&self, profile: &UserProfile) -> AppResult<Plan> {
        profile.validate()?;
        let metabolic = calculate_metabolic_data_with_config(profile, &self.metabolic_config);
        let request = build_nutrition_request(profile, &metabolic);
        let raw = self.call_generator(&request).await?;
        Ok(normalize_nutrition(&raw, &metabolic)?.into())
    }

    async fn generate_workout(&self, profile: &WorkoutProfile) -> AppResult<Plan> {
        profile.validate()?;
        let request = build_workout_request(profile);
        let raw = self.call_generator(&request).await?;
        Ok(normalize_workout(&raw)?.into())
    }

    async fn call_generator(&self, request: &PlanRequest) -> AppResult<String> {
        debug!(
            plan.kind = %request.kind,
            model = self.generator.model(),
            prompt_len = request.prompt.len(),
            "Calling plan generator"
        );

        timeout(
            self.request_timeout,
            self.generator.generate(&request.prompt, &request.schema),
        )
        .await
        .map_err(|_| AppError::timeout(self.generator.name(), self.request_timeout))?
    }
}
