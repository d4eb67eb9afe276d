// ABOUTME: Nutrition and workout profiles submitted by the user
// ABOUTME: Enumerations accept English identifiers and the Portuguese form labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::limits;
use crate::errors::{AppError, AppResult};

/// Biological sex used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    /// Male (+5 kcal constant, 1500 kcal floor)
    #[serde(alias = "Masculino")]
    Male,
    /// Female (-161 kcal constant, 1200 kcal floor)
    #[serde(alias = "Feminino")]
    Female,
}

impl Gender {
    /// Label shown to the user and used in prompts
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Male => "Masculino",
            Self::Female => "Feminino",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "masculino" => Ok(Self::Male),
            "female" | "f" | "feminino" => Ok(Self::Female),
            other => Err(format!("unknown gender '{other}'")),
        }
    }
}

/// Habitual activity level, mapped to a GETD multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[serde(alias = "Sedentário")]
    Sedentary,
    /// Light exercise 1-3 days/week
    #[serde(alias = "Leve")]
    Light,
    /// Moderate exercise 3-5 days/week
    #[serde(alias = "Moderado")]
    Moderate,
    /// Hard exercise 6-7 days/week
    #[serde(alias = "Intenso")]
    Intense,
}

impl ActivityLevel {
    /// All levels in ascending order
    pub const ALL: [Self; 4] = [Self::Sedentary, Self::Light, Self::Moderate, Self::Intense];

    /// Label shown to the user and used in prompts
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentário",
            Self::Light => "Leve",
            Self::Moderate => "Moderado",
            Self::Intense => "Intenso",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" | "sedentário" | "sedentario" => Ok(Self::Sedentary),
            "light" | "leve" => Ok(Self::Light),
            "moderate" | "moderado" => Ok(Self::Moderate),
            "intense" | "intenso" => Ok(Self::Intense),
            other => Err(format!("unknown activity level '{other}'")),
        }
    }
}

/// Nutrition profile collected from the form.
///
/// Immutable once submitted; consumed by the calculator and the request builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub gender: Gender,
    /// Current weight (kg)
    pub weight: f64,
    /// Height (cm)
    pub height: f64,
    /// Habitual activity level
    pub activity_level: ActivityLevel,
    /// Target weight (kg)
    pub goal_weight: f64,
    /// Dietary restrictions, free text
    #[serde(default)]
    pub restrictions: String,
}

impl UserProfile {
    /// Check every field against the calculation domain
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(&self) -> AppResult<()> {
        if !(limits::MIN_AGE..=limits::MAX_AGE).contains(&self.age) {
            return Err(AppError::out_of_range(
                "age",
                format!(
                    "Age must be between {} and {} years",
                    limits::MIN_AGE,
                    limits::MAX_AGE
                ),
            ));
        }
        validate_positive("weight", self.weight, limits::MAX_WEIGHT_KG)?;
        validate_positive("height", self.height, limits::MAX_HEIGHT_CM)?;
        validate_positive("goalWeight", self.goal_weight, limits::MAX_WEIGHT_KG)?;
        validate_restrictions(&self.restrictions)
    }
}

/// Training experience
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingLevel {
    /// New to training
    #[serde(alias = "ITERATOR", alias = "Iniciante")]
    Beginner,
    /// Some consistent training history
    #[serde(alias = "Intermediário")]
    Intermediate,
    /// Long consistent training history
    #[serde(alias = "Avançado")]
    Advanced,
}

impl TrainingLevel {
    /// Label shown to the user and used in prompts
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Iniciante",
            Self::Intermediate => "Intermediário",
            Self::Advanced => "Avançado",
        }
    }
}

impl fmt::Display for TrainingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TrainingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "iterator" | "iniciante" => Ok(Self::Beginner),
            "intermediate" | "intermediário" | "intermediario" => Ok(Self::Intermediate),
            "advanced" | "avançado" | "avancado" => Ok(Self::Advanced),
            other => Err(format!("unknown training level '{other}'")),
        }
    }
}

/// Where the user trains
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingLocation {
    /// Equipped gym
    #[serde(alias = "Academia")]
    Gym,
    /// At home, limited equipment
    #[serde(alias = "Casa")]
    Home,
}

impl TrainingLocation {
    /// Label shown to the user and used in prompts
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Gym => "Academia",
            Self::Home => "Casa",
        }
    }
}

impl fmt::Display for TrainingLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TrainingLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gym" | "academia" => Ok(Self::Gym),
            "home" | "casa" => Ok(Self::Home),
            other => Err(format!("unknown training location '{other}'")),
        }
    }
}

/// Workout profile collected from the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutProfile {
    /// Training goal, e.g. "Hipertrofia"
    pub goal: String,
    /// Training experience
    pub level: TrainingLevel,
    /// Sessions per week (1-7)
    pub frequency: u8,
    /// Gym or home
    pub location: TrainingLocation,
    /// Injuries or restrictions, free text
    #[serde(default)]
    pub restrictions: String,
}

impl WorkoutProfile {
    /// Check every field against the accepted domain
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(&self) -> AppResult<()> {
        if self.goal.trim().is_empty() {
            return Err(AppError::missing_field("goal"));
        }
        if !(limits::MIN_FREQUENCY..=limits::MAX_FREQUENCY).contains(&self.frequency) {
            return Err(AppError::out_of_range(
                "frequency",
                format!(
                    "Frequency must be between {} and {} sessions per week",
                    limits::MIN_FREQUENCY,
                    limits::MAX_FREQUENCY
                ),
            ));
        }
        validate_restrictions(&self.restrictions)
    }
}

fn validate_positive(field: &str, value: f64, max: f64) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 || value > max {
        return Err(AppError::out_of_range(
            field,
            format!("{field} must be greater than 0 and at most {max}"),
        ));
    }
    Ok(())
}

fn validate_restrictions(restrictions: &str) -> AppResult<()> {
    if restrictions.chars().count() > limits::MAX_RESTRICTIONS_LEN {
        return Err(AppError::out_of_range(
            "restrictions",
            format!(
                "Restrictions must be at most {} characters",
                limits::MAX_RESTRICTIONS_LEN
            ),
        ));
    }
    Ok(())
}
