// ABOUTME: Filter criteria describing a single recommendation request
// ABOUTME: Dietary flags, allergen keywords, category selections and a preferred ingredient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrimate_core::models::DietaryFlag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// User preferences for one recommendation request
///
/// Criteria are built per request and discarded afterwards. Every field
/// defaults to "no constraint", so `FilterCriteria::default()` passes the
/// whole corpus through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Enabled dietary restrictions
    pub dietary_flags: BTreeSet<DietaryFlag>,
    /// Free-text allergen keywords to exclude
    pub allergens: Vec<String>,
    /// Categories a recipe must draw at least one ingredient from
    pub include_categories: Vec<String>,
    /// Categories a recipe must not draw any ingredient from
    pub exclude_categories: Vec<String>,
    /// Ingredient the recipe must mention
    pub preferred_ingredient: Option<String>,
}

impl FilterCriteria {
    /// Criteria with no constraints
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable a dietary flag
    #[must_use]
    pub fn with_flag(mut self, flag: DietaryFlag) -> Self {
        self.dietary_flags.insert(flag);
        self
    }

    /// Add an allergen keyword
    #[must_use]
    pub fn with_allergen(mut self, allergen: impl Into<String>) -> Self {
        self.allergens.push(allergen.into());
        self
    }

    /// Require an ingredient category
    #[must_use]
    pub fn include_category(mut self, category: impl Into<String>) -> Self {
        self.include_categories.push(category.into());
        self
    }

    /// Forbid an ingredient category
    #[must_use]
    pub fn exclude_category(mut self, category: impl Into<String>) -> Self {
        self.exclude_categories.push(category.into());
        self
    }

    /// Set the preferred ingredient
    #[must_use]
    pub fn with_preferred_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.preferred_ingredient = Some(ingredient.into());
        self
    }

    /// Whether a dietary flag is enabled
    #[must_use]
    pub fn has_flag(&self, flag: DietaryFlag) -> bool {
        self.dietary_flags.contains(&flag)
    }

    /// Trimmed preferred ingredient, or `None` when absent or blank
    #[must_use]
    pub fn preferred_term(&self) -> Option<&str> {
        self.preferred_ingredient
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    /// Trimmed, non-blank allergen keywords
    pub fn allergen_terms(&self) -> impl Iterator<Item = &str> {
        self.allergens
            .iter()
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
    }

    /// Whether these criteria leave every recipe in place
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.dietary_flags.is_empty()
            && self.allergen_terms().next().is_none()
            && self.include_categories.is_empty()
            && self.exclude_categories.is_empty()
            && self.preferred_term().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconstrained() {
        assert!(FilterCriteria::default().is_unconstrained());
    }

    #[test]
    fn test_blank_inputs_do_not_constrain() {
        let criteria = FilterCriteria::new()
            .with_preferred_ingredient("   ")
            .with_allergen("")
            .with_allergen("  ");
        assert_eq!(criteria.preferred_term(), None);
        assert_eq!(criteria.allergen_terms().count(), 0);
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn test_terms_are_trimmed() {
        let criteria = FilterCriteria::new()
            .with_preferred_ingredient(" Chicken ")
            .with_allergen(" Nuts");
        assert_eq!(criteria.preferred_term(), Some("Chicken"));
        assert_eq!(criteria.allergen_terms().collect::<Vec<_>>(), ["Nuts"]);
    }

    #[test]
    fn test_deserializes_partial_json() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"dietary_flags": ["vegan", "gluten_free"]}"#).unwrap();
        assert!(criteria.has_flag(DietaryFlag::Vegan));
        assert!(criteria.has_flag(DietaryFlag::GlutenFree));
        assert!(!criteria.has_flag(DietaryFlag::Vegetarian));
        assert!(criteria.allergens.is_empty());
    }
}
