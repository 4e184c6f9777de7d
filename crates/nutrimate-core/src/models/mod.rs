// ABOUTME: Core data models for the Nutrimate recipe recommendation service
// ABOUTME: Re-exports Recipe, DietaryFlag and HealthProfile definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Recipe`: one normalized row of the recipe dataset
//! - `DietaryFlag`: dietary restrictions users toggle and recipes are tagged with
//! - `HealthProfile`: demographic inputs collected alongside preferences

mod profile;
mod recipe;

pub use profile::{
    ActivityLevel, Gender, HealthProfile, AGE_RANGE, HEIGHT_CM_RANGE, WEIGHT_KG_RANGE,
};
pub use recipe::{DietaryFlag, Recipe};
