// ABOUTME: Recipe record and dietary flag definitions for the recommendation corpus
// ABOUTME: Normalized, read-only shape the preference filter operates on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dietary restriction a user can toggle on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryFlag {
    /// No animal products
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// No gluten-containing ingredients
    GlutenFree,
    /// No lactose
    LactoseFree,
    /// Contains meat or fish
    NonVegetarian,
}

impl DietaryFlag {
    /// All flags in presentation order
    pub const ALL: [Self; 5] = [
        Self::Vegan,
        Self::Vegetarian,
        Self::GlutenFree,
        Self::LactoseFree,
        Self::NonVegetarian,
    ];

    /// Identifier used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
            Self::GlutenFree => "gluten_free",
            Self::LactoseFree => "lactose_free",
            Self::NonVegetarian => "non_vegetarian",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Vegan => "Vegan",
            Self::Vegetarian => "Vegetarian",
            Self::GlutenFree => "Gluten-Free",
            Self::LactoseFree => "Lactose-Free",
            Self::NonVegetarian => "Non-Vegetarian",
        }
    }
}

impl fmt::Display for DietaryFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recipe from the static dataset
///
/// Text fields are never null: loaders substitute an empty string for
/// missing values. Dietary flags default to `false`. Nutrition columns are
/// precomputed upstream and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Recipe {
    /// Recipe title
    pub title: String,
    /// Free-text ingredient list
    pub cleaned_ingredients: String,
    /// Preparation instructions
    pub instructions: String,
    /// Estimated calories (kcal)
    #[serde(default)]
    pub estimated_calories: Option<f64>,
    /// Healthiness score from the dataset
    #[serde(default)]
    pub healthiness_score: Option<f64>,
    /// Calories (kcal)
    #[serde(default)]
    pub calories: Option<f64>,
    /// Protein (g)
    #[serde(default)]
    pub protein: Option<f64>,
    /// Fat (g)
    #[serde(default)]
    pub fat: Option<f64>,
    /// Tagged vegan
    #[serde(default)]
    pub is_vegan: bool,
    /// Tagged vegetarian
    #[serde(default)]
    pub is_vegetarian: bool,
    /// Tagged gluten-free
    #[serde(default)]
    pub is_gluten_free: bool,
    /// Tagged lactose-free
    #[serde(default)]
    pub is_lactose_free: bool,
    /// Tagged non-vegetarian
    #[serde(default)]
    pub is_non_vegetarian: bool,
}

impl Recipe {
    /// Create a recipe with a title and ingredient list; everything else defaults
    pub fn new(title: impl Into<String>, cleaned_ingredients: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cleaned_ingredients: cleaned_ingredients.into(),
            ..Self::default()
        }
    }

    /// Set the instructions
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Set a dietary flag to `true`
    #[must_use]
    pub fn with_flag(mut self, flag: DietaryFlag) -> Self {
        *self.flag_mut(flag) = true;
        self
    }

    /// Set calories, protein and fat
    #[must_use]
    pub const fn with_macros(mut self, calories: f64, protein: f64, fat: f64) -> Self {
        self.calories = Some(calories);
        self.protein = Some(protein);
        self.fat = Some(fat);
        self
    }

    /// Read the stored value of a dietary flag
    #[must_use]
    pub const fn flag(&self, flag: DietaryFlag) -> bool {
        match flag {
            DietaryFlag::Vegan => self.is_vegan,
            DietaryFlag::Vegetarian => self.is_vegetarian,
            DietaryFlag::GlutenFree => self.is_gluten_free,
            DietaryFlag::LactoseFree => self.is_lactose_free,
            DietaryFlag::NonVegetarian => self.is_non_vegetarian,
        }
    }

    fn flag_mut(&mut self, flag: DietaryFlag) -> &mut bool {
        match flag {
            DietaryFlag::Vegan => &mut self.is_vegan,
            DietaryFlag::Vegetarian => &mut self.is_vegetarian,
            DietaryFlag::GlutenFree => &mut self.is_gluten_free,
            DietaryFlag::LactoseFree => &mut self.is_lactose_free,
            DietaryFlag::NonVegetarian => &mut self.is_non_vegetarian,
        }
    }
}
