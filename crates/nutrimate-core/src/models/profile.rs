// ABOUTME: Demographic health profile collected alongside dietary preferences
// ABOUTME: HealthProfile, ActivityLevel and Gender with range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Accepted age range in years
pub const AGE_RANGE: RangeInclusive<u32> = 1..=120;
/// Accepted height range in centimeters
pub const HEIGHT_CM_RANGE: RangeInclusive<u32> = 50..=250;
/// Accepted weight range in kilograms
pub const WEIGHT_KG_RANGE: RangeInclusive<u32> = 10..=200;

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days a week
    LightlyActive,
    /// Moderate exercise 3-5 days a week
    ModeratelyActive,
    /// Hard exercise 6-7 days a week
    VeryActive,
}

/// Gender as offered by the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    #[default]
    Male,
    /// Female
    Female,
}

/// Demographic inputs a user enters before asking for recommendations
///
/// The profile is stored with the session only; it does not drive any
/// nutrition calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: u32,
    /// Weight in kilograms
    pub weight_kg: u32,
    /// Activity level
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Gender
    #[serde(default)]
    pub gender: Gender,
}

impl Default for HealthProfile {
    fn default() -> Self {
        Self {
            age: 25,
            height_cm: 170,
            weight_kg: 70,
            activity_level: ActivityLevel::Sedentary,
            gender: Gender::Male,
        }
    }
}

impl HealthProfile {
    /// Check every numeric field against its accepted range
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        check_range("age", self.age, &AGE_RANGE)?;
        check_range("height_cm", self.height_cm, &HEIGHT_CM_RANGE)?;
        check_range("weight_kg", self.weight_kg, &WEIGHT_KG_RANGE)?;
        Ok(())
    }
}

fn check_range(field: &str, value: u32, range: &RangeInclusive<u32>) -> AppResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(AppError::out_of_range(format!(
            "{field} must be between {} and {}, got {value}",
            range.start(),
            range.end()
        )))
    }
}
