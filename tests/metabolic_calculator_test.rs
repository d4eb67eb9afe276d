// ABOUTME: Algorithm tests for the Mifflin-St Jeor metabolic calculator
// ABOUTME: Covers TMB, activity factors, safety floors, rounding, and macro consistency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Metabolic calculator tests
//!
//! - Mifflin-St Jeor TMB for both genders
//! - GETD for every activity level
//! - Safety floor raising the target and shrinking the deficit
//! - Floor above GETD (zero deficit)
//! - Macro energy consistency across a grid of valid profiles

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitplan::{
    config::metabolic::{BmrConfig, MetabolicConfig},
    intelligence::{calculate_metabolic_data, calculate_metabolic_data_with_config, calculate_tmb},
    models::{ActivityLevel, FloorAdjustment, Gender},
};

mod common;

use common::{default_nutrition_profile, nutrition_profile};

// ============================================================================
// TMB - Mifflin-St Jeor
// ============================================================================

#[test]
fn test_tmb_female_gender_adjustment() {
    // 10 * 70 + 6.25 * 165 - 5 * 25 - 161 = 1445.25
    let data = calculate_metabolic_data(&default_nutrition_profile());
    assert_eq!(data.tmb, 1445);
}

#[test]
fn test_tmb_gender_constants_differ_by_166() {
    let config = BmrConfig::default();
    let female = nutrition_profile(Gender::Female, 40, 80.0, 175.0, ActivityLevel::Light);
    let male = nutrition_profile(Gender::Male, 40, 80.0, 175.0, ActivityLevel::Light);

    let diff = calculate_tmb(&male, &config) - calculate_tmb(&female, &config);
    assert!((diff - 166.0).abs() < f64::EPSILON);
}

// ============================================================================
// Full calculation
// ============================================================================

#[test]
fn test_form_defaults_full_calculation() {
    let data = calculate_metabolic_data(&default_nutrition_profile());

    assert_eq!(data.tmb, 1445);
    assert_eq!(data.getd, 2240);
    assert_eq!(data.deficit_kcal, 493);
    assert_eq!(data.target_kcal, 1747);
    assert_eq!(data.macros.protein, 131);
    assert_eq!(data.macros.carbs, 175);
    assert_eq!(data.macros.fat, 58);
    assert_eq!(data.floor_adjustment, FloorAdjustment::NotApplied);
    assert_eq!(data.daily_goals(), "1747 kcal | P: 131g | C: 175g | G: 58g");
}

#[test]
fn test_male_moderate_rounds_half_up() {
    // tmb 1730, getd 2681.5 -> 2682
    let profile = nutrition_profile(Gender::Male, 30, 75.0, 180.0, ActivityLevel::Moderate);
    let data = calculate_metabolic_data(&profile);

    assert_eq!(data.tmb, 1730);
    assert_eq!(data.getd, 2682);
    assert_eq!(data.deficit_kcal, 590);
    assert_eq!(data.target_kcal, 2092);
    assert_eq!(data.macros.protein, 157);
    assert_eq!(data.macros.carbs, 209);
    assert_eq!(data.macros.fat, 70);
}

#[test]
fn test_activity_factors_table() {
    // tmb 1445.25 for the default profile
    let cases = [
        (ActivityLevel::Sedentary, 1734),
        (ActivityLevel::Light, 1987),
        (ActivityLevel::Moderate, 2240),
        (ActivityLevel::Intense, 2493),
    ];

    for (level, expected_getd) in cases {
        let mut profile = default_nutrition_profile();
        profile.activity_level = level;
        let data = calculate_metabolic_data(&profile);
        assert_eq!(data.getd, expected_getd, "GETD for {level:?}");
    }
}

#[test]
fn test_goal_weight_and_restrictions_do_not_affect_targets() {
    let base = calculate_metabolic_data(&default_nutrition_profile());

    let mut profile = default_nutrition_profile();
    profile.goal_weight = 90.0;
    profile.restrictions = "vegano".into();

    assert_eq!(calculate_metabolic_data(&profile), base);
}

// ============================================================================
// Safety floor
// ============================================================================

#[test]
fn test_female_floor_reduces_deficit() {
    // tmb 1057.75, getd 1269.3, raw target 990.05 < 1200
    let profile = nutrition_profile(Gender::Female, 50, 50.0, 155.0, ActivityLevel::Sedentary);
    let data = calculate_metabolic_data(&profile);

    assert_eq!(data.getd, 1269);
    assert_eq!(data.target_kcal, 1200);
    assert_eq!(data.deficit_kcal, 69);
    assert_eq!(data.target_kcal, data.getd - data.deficit_kcal);
    assert_eq!(data.floor_adjustment, FloorAdjustment::DeficitReduced);
    assert_eq!(data.macros.protein, 90);
    assert_eq!(data.macros.carbs, 120);
    assert_eq!(data.macros.fat, 40);
}

#[test]
fn test_male_floor_reduces_deficit() {
    // tmb 1255, getd 1506, raw target 1174.68 < 1500
    let profile = nutrition_profile(Gender::Male, 70, 60.0, 160.0, ActivityLevel::Sedentary);
    let data = calculate_metabolic_data(&profile);

    assert_eq!(data.getd, 1506);
    assert_eq!(data.target_kcal, 1500);
    assert_eq!(data.deficit_kcal, 6);
    assert_eq!(data.floor_adjustment, FloorAdjustment::DeficitReduced);
}

#[test]
fn test_floor_above_getd_clamps_deficit() {
    // tmb 926.5, getd 1111.8 < 1200 floor
    let profile = nutrition_profile(Gender::Female, 60, 45.0, 150.0, ActivityLevel::Sedentary);
    let data = calculate_metabolic_data(&profile);

    assert_eq!(data.getd, 1112);
    assert_eq!(data.target_kcal, 1200);
    assert_eq!(data.deficit_kcal, 0);
    assert_eq!(data.floor_adjustment, FloorAdjustment::ExceedsExpenditure);
}

#[test]
fn test_custom_config_floor() {
    let mut config = MetabolicConfig::default();
    config.energy_target.female_floor_kcal = 1800.0;

    let data = calculate_metabolic_data_with_config(&default_nutrition_profile(), &config);
    assert_eq!(data.target_kcal, 1800);
    assert_eq!(data.deficit_kcal, 440);
    assert_eq!(data.floor_adjustment, FloorAdjustment::DeficitReduced);
}

// ============================================================================
// Properties over a grid of valid profiles
// ============================================================================

#[test]
fn test_invariants_over_profile_grid() {
    let mut checked = 0;
    for gender in [Gender::Female, Gender::Male] {
        let floor = match gender {
            Gender::Female => 1200,
            Gender::Male => 1500,
        };
        for level in ActivityLevel::ALL {
            for age in (10..=120).step_by(11) {
                for weight in (30..=300).step_by(15) {
                    for height in (100..=250).step_by(10) {
                        let profile = nutrition_profile(
                            gender,
                            age,
                            f64::from(weight),
                            f64::from(height),
                            level,
                        );
                        let data = calculate_metabolic_data(&profile);

                        assert!(data.target_kcal >= floor, "{profile:?} -> {data:?}");
                        assert!(data.deficit_kcal >= 0, "{profile:?} -> {data:?}");

                        if data.floor_adjustment == FloorAdjustment::ExceedsExpenditure {
                            assert_eq!(data.deficit_kcal, 0);
                            assert_eq!(data.target_kcal, floor);
                        } else {
                            assert!(data.target_kcal <= data.getd, "{profile:?} -> {data:?}");
                            // Fields are rounded independently
                            let drift = data.getd - data.deficit_kcal - data.target_kcal;
                            assert!(drift.abs() <= 1, "{profile:?} -> {data:?}");
                        }

                        // 4*0.5 + 4*0.5 + 9*0.5 + 0.5 = 9 kcal worst case
                        let macro_drift = data.macro_energy().total() - data.target_kcal;
                        assert!(macro_drift.abs() <= 9, "{profile:?} -> {data:?}");

                        checked += 1;
                    }
                }
            }
        }
    }
    assert!(checked > 1000);
}
