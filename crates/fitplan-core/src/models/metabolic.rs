// ABOUTME: Metabolic targets derived from a nutrition profile
// ABOUTME: TMB, GETD, deficit, daily target, and macro grams as rounded integers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::macros::{
    CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM,
};

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Macros {
    /// Protein (g)
    pub protein: i32,
    /// Carbohydrates (g)
    pub carbs: i32,
    /// Fat (g)
    pub fat: i32,
}

/// Energy carried by each macro target (kcal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroEnergy {
    /// kcal from protein
    pub protein_kcal: i32,
    /// kcal from carbohydrates
    pub carbs_kcal: i32,
    /// kcal from fat
    pub fat_kcal: i32,
}

impl MacroEnergy {
    /// Sum of all macro energy
    #[must_use]
    pub const fn total(&self) -> i32 {
        self.protein_kcal + self.carbs_kcal + self.fat_kcal
    }
}

/// How the safety floor shaped the daily target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FloorAdjustment {
    /// The standard deficit kept the target above the floor
    #[default]
    NotApplied,
    /// The target was raised to the floor and the deficit shrank
    DeficitReduced,
    /// The floor exceeds GETD itself; target sits at the floor with zero deficit
    ExceedsExpenditure,
}

/// Baseline metabolic figures, never mutated after creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetabolicData {
    /// Basal metabolic rate (kcal/day)
    pub tmb: i32,
    /// Total daily energy expenditure (kcal/day)
    pub getd: i32,
    /// Daily deficit (kcal)
    pub deficit_kcal: i32,
    /// Daily energy goal (kcal)
    pub target_kcal: i32,
    /// Macro targets (g)
    pub macros: Macros,
    /// Safety floor outcome
    #[serde(default)]
    pub floor_adjustment: FloorAdjustment,
}

impl MetabolicData {
    /// Summary line shown above the meal plan
    #[must_use]
    pub fn daily_goals(&self) -> String {
        format!(
            "{} kcal | P: {}g | C: {}g | G: {}g",
            self.target_kcal, self.macros.protein, self.macros.carbs, self.macros.fat
        )
    }

    /// Energy per macro, as charted on the dashboard
    #[must_use]
    pub const fn macro_energy(&self) -> MacroEnergy {
        MacroEnergy {
            protein_kcal: self.macros.protein * PROTEIN_KCAL_PER_GRAM as i32,
            carbs_kcal: self.macros.carbs * CARBS_KCAL_PER_GRAM as i32,
            fat_kcal: self.macros.fat * FAT_KCAL_PER_GRAM as i32,
        }
    }
}
