// ABOUTME: Canned nutrition knowledge answers for a fixed set of FAQ categories
// ABOUTME: KnowledgeResponder trait with a built-in responder and a JSON override loader
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! FAQ answers keyed by a closed set of questions.
//!
//! Each [`FaqCategory`] maps to one fixed query string. Responders answer
//! queries rather than categories so alternative backends (a pattern
//! matcher, a retrieval service) can sit behind the same trait.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

/// FAQ topic offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaqCategory {
    /// Losing weight
    WeightLoss,
    /// Gaining weight
    WeightGain,
    /// Training and fitness
    Fitness,
    /// Everyday health
    GeneralHealth,
}

impl FaqCategory {
    /// Every category in presentation order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::WeightLoss,
            Self::WeightGain,
            Self::Fitness,
            Self::GeneralHealth,
        ]
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::WeightGain => "Weight Gain",
            Self::Fitness => "Fitness",
            Self::GeneralHealth => "General Health",
        }
    }

    /// Identifier used in URLs and override files
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::WeightGain => "weight_gain",
            Self::Fitness => "fitness",
            Self::GeneralHealth => "general_health",
        }
    }

    /// Fixed query sent to the responder
    #[must_use]
    pub const fn query(&self) -> &'static str {
        match self {
            Self::WeightLoss => "IMPORTANT INGREDIENTS FOR WEIGHT LOSS",
            Self::WeightGain => "IMPORTANT INGREDIENTS FOR WEIGHT GAIN",
            Self::Fitness => "IMPORTANT INGREDIENTS FOR FITNESS",
            Self::GeneralHealth => "IMPORTANT INGREDIENTS FOR GENERAL HEALTH",
        }
    }

    /// Parse a label (`Weight Loss`) or identifier (`weight_loss`,
    /// `weight-loss`), ignoring case
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect::<String>()
            .to_lowercase();
        Self::all().into_iter().find(|c| c.as_str() == key)
    }
}

impl fmt::Display for FaqCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Answers fixed nutrition questions
pub trait KnowledgeResponder: Send + Sync {
    /// Answer a query, or `None` if it is not recognized
    fn respond(&self, query: &str) -> Option<String>;

    /// Answer the fixed query of a category
    fn answer(&self, category: FaqCategory) -> Option<String> {
        self.respond(category.query())
    }
}

/// Uppercase, collapse whitespace, drop trailing punctuation
fn normalize_query(query: &str) -> String {
    query
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end_matches(['?', '.', '!'])
        .trim_end()
        .to_uppercase()
}

/// Responder backed by a fixed table of answers
#[derive(Debug, Clone)]
pub struct CannedResponder {
    answers: HashMap<String, String>,
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::from_answers(FaqCategory::all().into_iter().map(|c| (c, default_answer(c))))
    }
}

impl CannedResponder {
    /// Build from per-category answers
    pub fn from_answers<S: Into<String>>(
        answers: impl IntoIterator<Item = (FaqCategory, S)>,
    ) -> Self {
        Self {
            answers: answers
                .into_iter()
                .map(|(category, answer)| (normalize_query(category.query()), answer.into()))
                .collect(),
        }
    }

    /// Load answers from a JSON object keyed by category identifier
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the file cannot be read and `CONFIG_INVALID`
    /// if it is not an object of strings covering exactly the known categories
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("Failed to read FAQ file {}: {e}", path.display()))
        })?;
        let responder = Self::from_json_str(&contents)?;
        info!(path = %path.display(), "Loaded FAQ answers");
        Ok(responder)
    }

    /// Parse answers from JSON text; see [`CannedResponder::from_json_file`]
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` for malformed or incomplete input
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| AppError::config_invalid(format!("Invalid FAQ file: {e}")))?;
        let Value::Object(map) = value else {
            return Err(AppError::config_invalid(
                "FAQ file must be an object keyed by category",
            ));
        };

        let mut answers = Vec::with_capacity(map.len());
        for (key, answer) in map {
            let category = FaqCategory::parse(&key).ok_or_else(|| {
                AppError::config_invalid(format!("Unknown FAQ category '{key}'"))
            })?;
            let Value::String(answer) = answer else {
                return Err(AppError::config_invalid(format!(
                    "FAQ answer for '{key}' must be a string"
                )));
            };
            answers.push((category, answer));
        }

        if let Some(missing) = FaqCategory::all()
            .into_iter()
            .find(|c| !answers.iter().any(|(known, _)| known == c))
        {
            return Err(AppError::config_invalid(format!(
                "FAQ file is missing '{}'",
                missing.as_str()
            )));
        }

        Ok(Self::from_answers(answers))
    }
}

impl KnowledgeResponder for CannedResponder {
    fn respond(&self, query: &str) -> Option<String> {
        self.answers.get(&normalize_query(query)).cloned()
    }
}

fn default_answer(category: FaqCategory) -> &'static str {
    match category {
        FaqCategory::WeightLoss => {
            "Build meals around vegetables, lean proteins such as chicken breast, fish, \
             tofu and legumes, and high-fibre whole grains like oats and quinoa. Fibre and \
             protein keep you full for longer on fewer calories. Limit added sugar, refined \
             flour and fried foods."
        }
        FaqCategory::WeightGain => {
            "Choose calorie-dense, nutrient-rich foods: nuts and nut butters, avocado, \
             whole milk and yogurt, eggs, salmon, rice, potatoes and whole-grain pasta. \
             Add healthy oils to cooking and eat protein with every meal to support muscle \
             gain."
        }
        FaqCategory::Fitness => {
            "Pair protein (eggs, chicken, fish, beans, Greek yogurt) with complex \
             carbohydrates (oats, brown rice, sweet potato) to fuel training and recovery. \
             Bananas and berries provide quick energy and antioxidants. Stay well \
             hydrated."
        }
        FaqCategory::GeneralHealth => {
            "Eat a wide variety of colourful vegetables and fruits, whole grains, legumes, \
             nuts and seeds, and healthy fats such as olive oil. Favour fish and plant \
             proteins, and keep salt, sugar and processed foods to a minimum."
        }
    }
}
