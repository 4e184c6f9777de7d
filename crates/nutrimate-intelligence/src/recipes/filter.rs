// ABOUTME: Preference filter narrowing a recipe collection by dietary, allergen and category rules
// ABOUTME: Compiles criteria into an ordered step pipeline and applies it without mutating inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Preference Filter
//!
//! Criteria are compiled into a [`FilterPlan`]: an ordered list of steps,
//! each a predicate over one recipe. Applying the plan runs the steps in
//! order, each one narrowing the survivors of the previous step. Steps only
//! ever remove recipes, so the result is always a subset of the input in the
//! input's order.
//!
//! Step order:
//!
//! 1. preferred ingredient (substring)
//! 2. vegan: no dairy keyword **and** tagged vegan
//! 3. vegetarian, gluten-free, lactose-free tags
//! 4. non-vegetarian: tagged neither vegetarian nor vegan
//! 5. one step per allergen keyword
//! 6. include categories (any keyword of the union)
//! 7. exclude categories (no keyword of the union)
//!
//! All text matching is case-insensitive literal substring matching against
//! `cleaned_ingredients`.

use super::categories::CategoryTable;
use super::criteria::FilterCriteria;
use nutrimate_core::errors::AppError;
use nutrimate_core::models::{DietaryFlag, Recipe};
use thiserror::Error;
use tracing::debug;

/// Errors raised while compiling criteria
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Criteria referenced a category the table does not define
    #[error("Unknown ingredient category: {0}")]
    InvalidCategory(String),
}

impl From<FilterError> for AppError {
    fn from(error: FilterError) -> Self {
        match error {
            FilterError::InvalidCategory(name) => Self::invalid_category(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterStep {
    PreferredIngredient(String),
    Vegan { dairy_keywords: Vec<String> },
    RequireFlag(DietaryFlag),
    NonVegetarian,
    Allergen(String),
    IncludeAny(Vec<String>),
    ExcludeAny(Vec<String>),
}

impl FilterStep {
    const fn name(&self) -> &'static str {
        match self {
            Self::PreferredIngredient(_) => "preferred_ingredient",
            Self::Vegan { .. } => "vegan",
            Self::RequireFlag(flag) => flag.as_str(),
            Self::NonVegetarian => "non_vegetarian",
            Self::Allergen(_) => "allergen",
            Self::IncludeAny(_) => "include_categories",
            Self::ExcludeAny(_) => "exclude_categories",
        }
    }

    const fn reads_ingredients(&self) -> bool {
        !matches!(self, Self::RequireFlag(_) | Self::NonVegetarian)
    }

    fn keeps(&self, candidate: &Candidate<'_>) -> bool {
        let text = candidate.ingredients.as_str();
        let recipe = candidate.recipe;
        match self {
            Self::PreferredIngredient(term) => text.contains(term.as_str()),
            Self::Vegan { dairy_keywords } => !contains_any(text, dairy_keywords) && recipe.is_vegan,
            Self::RequireFlag(flag) => recipe.flag(*flag),
            Self::NonVegetarian => !recipe.is_vegetarian && !recipe.is_vegan,
            Self::Allergen(term) => !text.contains(term.as_str()),
            Self::IncludeAny(keywords) => contains_any(text, keywords),
            Self::ExcludeAny(keywords) => !contains_any(text, keywords),
        }
    }
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword.as_str()))
}

/// Resolve category names against the table and union their keywords
fn union_keywords(table: &CategoryTable, names: &[String]) -> Result<Vec<String>, FilterError> {
    let mut keywords: Vec<String> = Vec::new();
    for name in names {
        let category = table
            .get(name.trim())
            .ok_or_else(|| FilterError::InvalidCategory(name.clone()))?;
        for keyword in category.keywords() {
            if !keywords.contains(keyword) {
                keywords.push(keyword.clone());
            }
        }
    }
    Ok(keywords)
}

struct Candidate<'c> {
    recipe: &'c Recipe,
    ingredients: String,
}

/// Criteria resolved against a category table, ready to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPlan {
    steps: Vec<FilterStep>,
}

impl FilterPlan {
    /// Compile criteria into an ordered list of steps
    ///
    /// Category names are resolved here, so an unknown name fails before any
    /// recipe is examined.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidCategory`] for a category name missing
    /// from `table`
    pub fn compile(criteria: &FilterCriteria, table: &CategoryTable) -> Result<Self, FilterError> {
        let mut steps = Vec::new();

        if let Some(term) = criteria.preferred_term() {
            steps.push(FilterStep::PreferredIngredient(term.to_lowercase()));
        }

        if criteria.has_flag(DietaryFlag::Vegan) {
            steps.push(FilterStep::Vegan {
                dairy_keywords: table.dairy_keywords().to_vec(),
            });
        }

        for flag in [
            DietaryFlag::Vegetarian,
            DietaryFlag::GlutenFree,
            DietaryFlag::LactoseFree,
        ] {
            if criteria.has_flag(flag) {
                steps.push(FilterStep::RequireFlag(flag));
            }
        }

        if criteria.has_flag(DietaryFlag::NonVegetarian) {
            steps.push(FilterStep::NonVegetarian);
        }

        for allergen in criteria.allergen_terms() {
            steps.push(FilterStep::Allergen(allergen.to_lowercase()));
        }

        if !criteria.include_categories.is_empty() {
            let keywords = union_keywords(table, &criteria.include_categories)?;
            steps.push(FilterStep::IncludeAny(keywords));
        }

        if !criteria.exclude_categories.is_empty() {
            let keywords = union_keywords(table, &criteria.exclude_categories)?;
            steps.push(FilterStep::ExcludeAny(keywords));
        }

        Ok(Self { steps })
    }

    /// Number of narrowing steps
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Names of the steps in application order
    pub fn step_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().map(FilterStep::name)
    }

    /// Run every step in order over `recipes`
    pub fn apply<'c, I>(&self, recipes: I) -> FilterOutcome<'c>
    where
        I: IntoIterator<Item = &'c Recipe>,
    {
        let needs_text = self.steps.iter().any(FilterStep::reads_ingredients);
        let mut candidates: Vec<Candidate<'c>> = recipes
            .into_iter()
            .map(|recipe| Candidate {
                recipe,
                ingredients: if needs_text {
                    recipe.cleaned_ingredients.to_lowercase()
                } else {
                    String::new()
                },
            })
            .collect();
        let examined = candidates.len();

        for step in &self.steps {
            candidates.retain(|candidate| step.keeps(candidate));
            debug!(
                filter.step = step.name(),
                filter.remaining = candidates.len(),
                "Applied filter step"
            );
        }

        FilterOutcome {
            matches: candidates.into_iter().map(|c| c.recipe).collect(),
            examined,
        }
    }
}

/// Recipes that survived filtering, in their original order
///
/// An empty outcome is a normal result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'c> {
    matches: Vec<&'c Recipe>,
    examined: usize,
}

impl<'c> FilterOutcome<'c> {
    /// Whether no recipe matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of matching recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Number of recipes the filter looked at
    #[must_use]
    pub const fn examined(&self) -> usize {
        self.examined
    }

    /// Matching recipes
    #[must_use]
    pub fn recipes(&self) -> &[&'c Recipe] {
        &self.matches
    }

    /// Iterate over matching recipes
    pub fn iter(&self) -> impl Iterator<Item = &'c Recipe> + '_ {
        self.matches.iter().copied()
    }

    /// Consume the outcome, keeping the matches
    #[must_use]
    pub fn into_matches(self) -> Vec<&'c Recipe> {
        self.matches
    }
}

/// Filter bound to a category table
#[derive(Debug, Clone, Copy)]
pub struct PreferenceFilter<'t> {
    table: &'t CategoryTable,
}

impl<'t> PreferenceFilter<'t> {
    /// Create a filter that resolves categories against `table`
    #[must_use]
    pub const fn new(table: &'t CategoryTable) -> Self {
        Self { table }
    }

    /// Category table in use
    #[must_use]
    pub const fn table(&self) -> &'t CategoryTable {
        self.table
    }

    /// Narrow `recipes` to those satisfying `criteria`
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidCategory`] for unknown category names
    pub fn filter<'c, I>(
        &self,
        recipes: I,
        criteria: &FilterCriteria,
    ) -> Result<FilterOutcome<'c>, FilterError>
    where
        I: IntoIterator<Item = &'c Recipe>,
    {
        let plan = FilterPlan::compile(criteria, self.table)?;
        Ok(plan.apply(recipes))
    }
}

/// Filter a corpus slice in one call
///
/// # Errors
///
/// Returns [`FilterError::InvalidCategory`] for unknown category names
pub fn filter_recipes<'c>(
    corpus: &'c [Recipe],
    criteria: &FilterCriteria,
    table: &CategoryTable,
) -> Result<FilterOutcome<'c>, FilterError> {
    PreferenceFilter::new(table).filter(corpus, criteria)
}
