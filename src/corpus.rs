// ABOUTME: Recipe corpus loading from JSON or JSON Lines with lenient normalization
// ABOUTME: Maps dataset headers to Recipe fields, coercing flags, text and numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The recipe corpus is loaded once at startup and shared read-only.
//!
//! Source files come from a spreadsheet export, so rows are normalized
//! before they become [`Recipe`] values: header names are trimmed and
//! lowercased, dietary flags are `true` only for a JSON `true` or the string
//! `"true"` in any case, and unparseable numbers become `None`.

use crate::errors::{AppError, AppResult};
use crate::models::Recipe;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::slice::Iter;
use std::time::Instant;
use tracing::{debug, info};

/// On-disk layout of a corpus file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    /// A single JSON array of row objects
    JsonArray,
    /// One JSON object per line; blank lines are skipped
    JsonLines,
}

impl CorpusFormat {
    /// Pick the format from a file extension (`.jsonl` / `.ndjson` are lines)
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("jsonl" | "ndjson") => Self::JsonLines,
            _ => Self::JsonArray,
        }
    }
}

/// Immutable, ordered collection of recipes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeCorpus {
    recipes: Vec<Recipe>,
    source: Option<PathBuf>,
}

impl RecipeCorpus {
    /// Wrap already-normalized recipes
    #[must_use]
    pub const fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            source: None,
        }
    }

    /// Load and normalize a corpus file
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the file cannot be read and
    /// `SERIALIZATION_ERROR` if it is not valid JSON or a row is not an object
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let started = Instant::now();

        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!(
                "Failed to read recipe corpus {}: {e}",
                path.display()
            ))
        })?;
        let mut corpus = Self::parse(&contents, CorpusFormat::from_path(path))?;
        corpus.source = Some(path.to_path_buf());

        info!(
            path = %path.display(),
            recipes = corpus.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Recipe corpus loaded"
        );
        Ok(corpus)
    }

    /// Parse corpus text in the given format
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` for malformed JSON or non-object rows
    pub fn parse(contents: &str, format: CorpusFormat) -> AppResult<Self> {
        let rows: Vec<Value> = match format {
            CorpusFormat::JsonArray => match serde_json::from_str::<Value>(contents)? {
                Value::Array(rows) => rows,
                _ => {
                    return Err(AppError::serialization(
                        "Recipe corpus must be a JSON array of objects",
                    ))
                }
            },
            CorpusFormat::JsonLines => contents
                .lines()
                .enumerate()
                .filter(|(_, line)| !line.trim().is_empty())
                .map(|(number, line)| {
                    serde_json::from_str(line).map_err(|e| {
                        AppError::serialization(format!(
                            "Invalid JSON on line {}: {e}",
                            number + 1
                        ))
                    })
                })
                .collect::<AppResult<_>>()?,
        };

        let recipes = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| match row {
                Value::Object(map) => Ok(normalize_row(map)),
                _ => Err(AppError::serialization(format!(
                    "Recipe row {index} is not an object"
                ))),
            })
            .collect::<AppResult<Vec<_>>>()?;

        debug!(recipes = recipes.len(), ?format, "Parsed recipe rows");
        Ok(Self::from_recipes(recipes))
    }

    /// Recipes in corpus order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Iterate over recipes in corpus order
    pub fn iter(&self) -> Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the corpus is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// File the corpus was loaded from, if any
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl<'a> IntoIterator for &'a RecipeCorpus {
    type Item = &'a Recipe;
    type IntoIter = Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

/// Row with header names trimmed and lowercased
struct NormalizedRow(Map<String, Value>);

impl NormalizedRow {
    fn new(raw: Map<String, Value>) -> Self {
        Self(
            raw.into_iter()
                .map(|(key, value)| (key.trim().to_lowercase(), value))
                .collect(),
        )
    }

    fn get(&self, aliases: &[&str]) -> Option<&Value> {
        aliases.iter().find_map(|alias| self.0.get(*alias))
    }

    fn text(&self, aliases: &[&str]) -> String {
        match self.get(aliases) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    fn flag(&self, aliases: &[&str]) -> bool {
        match self.get(aliases) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.to_lowercase() == "true",
            _ => false,
        }
    }

    fn number(&self, aliases: &[&str]) -> Option<f64> {
        let value = match self.get(aliases)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }?;
        value.is_finite().then_some(value)
    }
}

fn normalize_row(raw: Map<String, Value>) -> Recipe {
    let row = NormalizedRow::new(raw);
    Recipe {
        title: row.text(&["title"]),
        cleaned_ingredients: row.text(&["cleaned_ingredients", "ingredients"]),
        instructions: row.text(&["instructions"]),
        estimated_calories: row.number(&["estimated_calories"]),
        healthiness_score: row.number(&["healthiness_score"]),
        calories: row.number(&["calories"]),
        protein: row.number(&["protein"]),
        fat: row.number(&["fat"]),
        is_vegan: row.flag(&["vegan", "is_vegan"]),
        is_vegetarian: row.flag(&["vegetarian", "is_vegetarian"]),
        is_gluten_free: row.flag(&["gluten_free", "is_gluten_free"]),
        is_lactose_free: row.flag(&["lactose_free", "is_lactose_free"]),
        is_non_vegetarian: row.flag(&["non_vegetarian", "is_non_vegetarian"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Recipe {
        let Value::Object(map) = value else {
            unreachable!("test rows are objects")
        };
        normalize_row(map)
    }

    #[test]
    fn test_headers_are_trimmed_and_lowercased() {
        let recipe = row(json!({
            " Title ": "Tofu Stir Fry",
            "Cleaned_Ingredients": "tofu, soy sauce",
            "Vegan": "True"
        }));
        assert_eq!(recipe.title, "Tofu Stir Fry");
        assert_eq!(recipe.cleaned_ingredients, "tofu, soy sauce");
        assert!(recipe.is_vegan);
    }

    #[test]
    fn test_flags_are_true_only_for_true() {
        let recipe = row(json!({
            "vegan": true,
            "vegetarian": "TRUE",
            "gluten_free": 1,
            "lactose_free": "yes",
            "non_vegetarian": null
        }));
        assert!(recipe.is_vegan);
        assert!(recipe.is_vegetarian);
        assert!(!recipe.is_gluten_free);
        assert!(!recipe.is_lactose_free);
        assert!(!recipe.is_non_vegetarian);
    }

    #[test]
    fn test_text_fields_are_never_null() {
        let recipe = row(json!({"title": null, "instructions": 42}));
        assert_eq!(recipe.title, "");
        assert_eq!(recipe.cleaned_ingredients, "");
        assert_eq!(recipe.instructions, "42");
    }

    #[test]
    fn test_numbers_are_lenient() {
        let recipe = row(json!({
            "calories": " 320.5 ",
            "protein": 12,
            "fat": "n/a",
            "healthiness_score": ""
        }));
        assert_eq!(recipe.calories, Some(320.5));
        assert_eq!(recipe.protein, Some(12.0));
        assert_eq!(recipe.fat, None);
        assert_eq!(recipe.healthiness_score, None);
        assert_eq!(recipe.estimated_calories, None);
    }

    #[test]
    fn test_non_finite_numbers_are_dropped() {
        let recipe = row(json!({"calories": "NaN", "protein": "inf"}));
        assert_eq!(recipe.calories, None);
        assert_eq!(recipe.protein, None);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            CorpusFormat::from_path(Path::new("recipes.JSONL")),
            CorpusFormat::JsonLines
        );
        assert_eq!(
            CorpusFormat::from_path(Path::new("recipes.ndjson")),
            CorpusFormat::JsonLines
        );
        assert_eq!(
            CorpusFormat::from_path(Path::new("recipes.json")),
            CorpusFormat::JsonArray
        );
    }
}
