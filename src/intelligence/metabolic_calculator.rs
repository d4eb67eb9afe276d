// ABOUTME: Metabolic target calculation using the Mifflin-St Jeor equation
// ABOUTME: TMB, GETD, fixed deficit, gender safety floor, and 30/40/30 macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metabolic Calculator
//!
//! Pure arithmetic on a pre-validated [`UserProfile`]. The calculation never
//! fails; profile validation happens at the submission boundary.
//!
//! 1. `tmb = 10·weight + 6.25·height − 5·age` then `+5` (male) or `−161` (female)
//! 2. `getd = tmb × activity factor`
//! 3. `deficit = getd × 0.22`, `target = getd − deficit`
//! 4. target below the gender floor is raised to the floor and the deficit recomputed
//! 5. protein 30% ÷ 4, carbs 40% ÷ 4, fat 30% ÷ 9 of the target
//! 6. every output rounded independently
//!
//! # Reference
//!
//! Mifflin, M.D., et al. (1990). A new predictive equation for resting energy
//! expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.
//! <https://doi.org/10.1093/ajcn/51.2.241>

use fitplan_core::models::{
    ActivityLevel, FloorAdjustment, Gender, Macros, MetabolicData, UserProfile,
};
use tracing::{debug, warn};

use crate::config::metabolic::{
    ActivityFactorsConfig, BmrConfig, EnergyTargetConfig, MetabolicConfig,
};

/// Basal metabolic rate (kcal/day), unrounded
#[must_use]
pub fn calculate_tmb(profile: &UserProfile, config: &BmrConfig) -> f64 {
    let gender_constant = match profile.gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    config.msj_weight_coef * profile.weight
        + config.msj_height_coef * profile.height
        + config.msj_age_coef * f64::from(profile.age)
        + gender_constant
}

/// GETD multiplier for an activity level
#[must_use]
pub const fn activity_factor(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Intense => config.intense,
    }
}

/// Minimum daily target (kcal) for a gender
#[must_use]
pub const fn safety_floor(gender: Gender, config: &EnergyTargetConfig) -> f64 {
    match gender {
        Gender::Female => config.female_floor_kcal,
        Gender::Male => config.male_floor_kcal,
    }
}

/// Calculate metabolic targets with the standard coefficients
#[must_use]
pub fn calculate_metabolic_data(profile: &UserProfile) -> MetabolicData {
    calculate_metabolic_data_with_config(profile, &MetabolicConfig::default())
}

/// Calculate metabolic targets with explicit coefficients
#[must_use]
pub fn calculate_metabolic_data_with_config(
    profile: &UserProfile,
    config: &MetabolicConfig,
) -> MetabolicData {
    let tmb = calculate_tmb(profile, &config.bmr);
    let getd = tmb * activity_factor(profile.activity_level, &config.activity_factors);

    let mut deficit_kcal = getd * config.energy_target.deficit_ratio;
    let mut target_kcal = getd - deficit_kcal;
    let mut floor_adjustment = FloorAdjustment::NotApplied;

    let floor = safety_floor(profile.gender, &config.energy_target);
    if target_kcal < floor {
        target_kcal = floor;
        if floor > getd {
            // Floor above expenditure would be a surplus; report zero deficit instead
            deficit_kcal = 0.0;
            floor_adjustment = FloorAdjustment::ExceedsExpenditure;
            warn!(
                getd = getd,
                floor = floor,
                "Safety floor exceeds total daily energy expenditure"
            );
        } else {
            deficit_kcal = getd - target_kcal;
            floor_adjustment = FloorAdjustment::DeficitReduced;
        }
    }

    let split = &config.macro_split;
    let macros = Macros {
        protein: round_kcal(target_kcal * split.protein_share / split.protein_kcal_per_gram),
        carbs: round_kcal(target_kcal * split.carbs_share / split.carbs_kcal_per_gram),
        fat: round_kcal(target_kcal * split.fat_share / split.fat_kcal_per_gram),
    };

    let data = MetabolicData {
        tmb: round_kcal(tmb),
        getd: round_kcal(getd),
        deficit_kcal: round_kcal(deficit_kcal),
        target_kcal: round_kcal(target_kcal),
        macros,
        floor_adjustment,
    };

    debug!(
        tmb = data.tmb,
        getd = data.getd,
        target_kcal = data.target_kcal,
        floor_adjustment = ?data.floor_adjustment,
        "Calculated metabolic data"
    );

    data
}

fn round_kcal(value: f64) -> i32 {
    value.round() as i32
}
