// ABOUTME: Recipe preference filtering module for dietary, allergen and category rules
// ABOUTME: Provides the filter engine, request criteria, and ingredient category tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes Module
//!
//! Narrows a read-only recipe corpus to the recipes that satisfy a user's
//! dietary flags, allergen keywords, and ingredient category selections.
//!
//! ## Example Usage
//!
//! ```rust
//! use nutrimate_core::models::{DietaryFlag, Recipe};
//! use nutrimate_intelligence::recipes::{filter_recipes, CategoryTable, FilterCriteria};
//!
//! let corpus = vec![
//!     Recipe::new("Tofu Stir Fry", "tofu, soy sauce, broccoli").with_flag(DietaryFlag::Vegan),
//!     Recipe::new("Cheese Pizza", "cheese, flour, tomato"),
//! ];
//! let criteria = FilterCriteria::new().with_flag(DietaryFlag::Vegan);
//! let table = CategoryTable::default();
//!
//! let outcome = filter_recipes(&corpus, &criteria, &table).unwrap();
//! assert_eq!(outcome.len(), 1);
//! ```

/// Ingredient category keyword tables
pub mod categories;
/// Per-request filter criteria
pub mod criteria;
/// Filter engine
pub mod filter;

pub use categories::{CategoryTable, CategoryTableError, IngredientCategory, DAIRY_CATEGORY};
pub use criteria::FilterCriteria;
pub use filter::{filter_recipes, FilterError, FilterOutcome, FilterPlan, PreferenceFilter};
