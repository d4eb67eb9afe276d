// ABOUTME: Metabolic calculation configuration for energy targets and macro split
// ABOUTME: Mifflin-St Jeor coefficients, activity factors, deficit ratio, and safety floors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metabolic Calculation Configuration
//!
//! Defaults reproduce the fixed model: Mifflin-St Jeor TMB, standard activity
//! multipliers, a 22% deficit, 1200/1500 kcal floors, and a 30/40/30 split.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010). Exercise Physiology

use fitplan_core::constants::{activity_factors, energy, macros, mifflin_st_jeor};
use fitplan_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Tolerance used when checking that the macro shares sum to one
const SHARE_SUM_TOLERANCE: f64 = 1e-9;

/// Complete metabolic calculation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetabolicConfig {
    /// TMB equation coefficients
    pub bmr: BmrConfig,
    /// GETD multipliers per activity level
    pub activity_factors: ActivityFactorsConfig,
    /// Deficit and safety floors
    pub energy_target: EnergyTargetConfig,
    /// Macronutrient split of the daily target
    pub macro_split: MacroSplitConfig,
}

/// Mifflin-St Jeor coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for GETD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Intense: 1.725
    pub intense: f64,
}

/// Deficit and minimum daily target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyTargetConfig {
    /// Fraction of GETD removed (0.22)
    pub deficit_ratio: f64,
    /// Female floor (1200 kcal)
    pub female_floor_kcal: f64,
    /// Male floor (1500 kcal)
    pub male_floor_kcal: f64,
}

/// Share of target kcal per macro and energy density
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Protein share (0.30)
    pub protein_share: f64,
    /// Carbohydrate share (0.40)
    pub carbs_share: f64,
    /// Fat share (0.30)
    pub fat_share: f64,
    /// kcal per gram protein (4)
    pub protein_kcal_per_gram: f64,
    /// kcal per gram carbohydrate (4)
    pub carbs_kcal_per_gram: f64,
    /// kcal per gram fat (9)
    pub fat_kcal_per_gram: f64,
}

impl MetabolicConfig {
    /// Validate all sections
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a factor is not positive, the deficit ratio is
    /// outside `[0, 1)`, or the macro shares do not sum to one.
    pub fn validate(&self) -> AppResult<()> {
        self.activity_factors.validate()?;
        self.energy_target.validate()?;
        self.macro_split.validate()
    }
}

impl ActivityFactorsConfig {
    fn validate(&self) -> AppResult<()> {
        let factors = [
            ("sedentary", self.sedentary),
            ("light", self.light),
            ("moderate", self.moderate),
            ("intense", self.intense),
        ];
        for (name, factor) in factors {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(AppError::config_invalid(format!(
                    "{name} activity factor must be positive, got {factor}"
                )));
            }
        }
        Ok(())
    }
}

impl EnergyTargetConfig {
    fn validate(&self) -> AppResult<()> {
        if !(0.0..1.0).contains(&self.deficit_ratio) {
            return Err(AppError::config_invalid(format!(
                "deficit ratio must be in [0, 1), got {}",
                self.deficit_ratio
            )));
        }
        if self.female_floor_kcal <= 0.0 || self.male_floor_kcal <= 0.0 {
            return Err(AppError::config_invalid("safety floors must be positive"));
        }
        Ok(())
    }
}

impl MacroSplitConfig {
    fn validate(&self) -> AppResult<()> {
        let sum = self.protein_share + self.carbs_share + self.fat_share;
        if (sum - 1.0).abs() > SHARE_SUM_TOLERANCE {
            return Err(AppError::config_invalid(format!(
                "macro shares must sum to 1.0, got {sum}"
            )));
        }
        let densities = [
            self.protein_kcal_per_gram,
            self.carbs_kcal_per_gram,
            self.fat_kcal_per_gram,
        ];
        if densities.iter().any(|d| *d <= 0.0) {
            return Err(AppError::config_invalid(
                "kcal per gram must be positive for every macro",
            ));
        }
        Ok(())
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: mifflin_st_jeor::WEIGHT_COEF,
            msj_height_coef: mifflin_st_jeor::HEIGHT_COEF,
            msj_age_coef: mifflin_st_jeor::AGE_COEF,
            msj_male_constant: mifflin_st_jeor::MALE_CONSTANT,
            msj_female_constant: mifflin_st_jeor::FEMALE_CONSTANT,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: activity_factors::SEDENTARY,
            light: activity_factors::LIGHT,
            moderate: activity_factors::MODERATE,
            intense: activity_factors::INTENSE,
        }
    }
}

impl Default for EnergyTargetConfig {
    fn default() -> Self {
        Self {
            deficit_ratio: energy::DEFICIT_RATIO,
            female_floor_kcal: energy::FEMALE_SAFETY_FLOOR_KCAL,
            male_floor_kcal: energy::MALE_SAFETY_FLOOR_KCAL,
        }
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            protein_share: macros::PROTEIN_SHARE,
            carbs_share: macros::CARBS_SHARE,
            fat_share: macros::FAT_SHARE,
            protein_kcal_per_gram: f64::from(macros::PROTEIN_KCAL_PER_GRAM),
            carbs_kcal_per_gram: f64::from(macros::CARBS_KCAL_PER_GRAM),
            fat_kcal_per_gram: f64::from(macros::FAT_KCAL_PER_GRAM),
        }
    }
}
