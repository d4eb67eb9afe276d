// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Mifflin-St Jeor coefficients, activity factors, safety floors, and plan defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Mifflin-St Jeor equation coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting
/// energy expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.
pub mod mifflin_st_jeor {
    /// kcal per kg of body weight
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per cm of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age (subtracted)
    pub const AGE_COEF: f64 = -5.0;
    /// Male constant
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female constant
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Activity factor multipliers applied to TMB to obtain GETD
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHT: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const INTENSE: f64 = 1.725;
}

/// Energy target constants
pub mod energy {
    /// Fraction of GETD removed to form the daily target
    pub const DEFICIT_RATIO: f64 = 0.22;
    /// Minimum daily target for women (kcal)
    pub const FEMALE_SAFETY_FLOOR_KCAL: f64 = 1200.0;
    /// Minimum daily target for men (kcal)
    pub const MALE_SAFETY_FLOOR_KCAL: f64 = 1500.0;
}

/// Macronutrient split of the daily target and energy density per gram
pub mod macros {
    /// Share of target kcal from protein
    pub const PROTEIN_SHARE: f64 = 0.30;
    /// Share of target kcal from carbohydrates
    pub const CARBS_SHARE: f64 = 0.40;
    /// Share of target kcal from fat
    pub const FAT_SHARE: f64 = 0.30;
    /// kcal per gram of protein
    pub const PROTEIN_KCAL_PER_GRAM: u32 = 4;
    /// kcal per gram of carbohydrate
    pub const CARBS_KCAL_PER_GRAM: u32 = 4;
    /// kcal per gram of fat
    pub const FAT_KCAL_PER_GRAM: u32 = 9;
}

/// Input domain accepted by profile validation
pub mod limits {
    /// Youngest age accepted (Mifflin-St Jeor validated for ages 10+)
    pub const MIN_AGE: u32 = 10;
    /// Oldest age accepted
    pub const MAX_AGE: u32 = 120;
    /// Heaviest body weight accepted (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Tallest height accepted (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Minimum training sessions per week
    pub const MIN_FREQUENCY: u8 = 1;
    /// Maximum training sessions per week
    pub const MAX_FREQUENCY: u8 = 7;
    /// Longest free-text restriction field accepted (characters)
    pub const MAX_RESTRICTIONS_LEN: usize = 1000;
}

/// Defaults applied when normalizing generated plans
pub mod plan_defaults {
    /// Rest interval used when the model omits one
    pub const DEFAULT_REST: &str = "60s";
    /// Placeholder used in prompts when the user lists no restrictions
    pub const NO_RESTRICTIONS: &str = "Nenhuma";
}

/// User-facing messages (Portuguese, the display language of the dashboard)
pub mod messages {
    /// Shown when a nutrition plan could not be generated
    pub const NUTRITION_FAILURE: &str =
        "Falha ao gerar plano de nutrição. Verifique sua conexão ou chave de API.";
    /// Shown when a workout plan could not be generated
    pub const WORKOUT_FAILURE: &str = "Falha ao gerar plano de treino. Tente novamente.";
    /// Prefix for profile validation failures
    pub const INVALID_PROFILE_PREFIX: &str = "Dados inválidos";
}

/// Service identifiers
pub mod service_names {
    /// Service name used in structured logs
    pub const FITPLAN: &str = "fitplan";
}
