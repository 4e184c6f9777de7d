// ABOUTME: Recipe route handlers for filter options and preference-based recommendations
// ABOUTME: Runs the preference filter over the shared corpus for logged-in users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{authenticate, json_body};
use crate::constants::{error_messages, COMMON_ALLERGENS};
use crate::errors::AppResult;
use crate::knowledge::FaqCategory;
use crate::logging::AppLogger;
use crate::models::{DietaryFlag, Recipe};
use crate::recipes::{FilterCriteria, PreferenceFilter};
use crate::resources::ServerResources;
use axum::extract::{rejection::JsonRejection, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Identifier and display label pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionItem {
    /// Wire identifier
    pub id: String,
    /// Human-readable label
    pub label: String,
}

/// Everything a client needs to render the preference form
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeOptionsResponse {
    /// Ingredient category names, in table order
    pub categories: Vec<String>,
    /// Dietary flags
    pub dietary_flags: Vec<OptionItem>,
    /// Suggested allergen keywords
    pub allergens: Vec<String>,
    /// FAQ topics
    pub faq_categories: Vec<OptionItem>,
}

/// Whether a recommendation request found anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    /// At least one recipe matched
    Ok,
    /// Valid request, empty result
    NoMatches,
}

/// Recommendation result
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    /// `ok` or `no_matches`
    pub status: RecommendationStatus,
    /// Number of matching recipes
    pub count: usize,
    /// Number of recipes examined
    pub examined: usize,
    /// Explanation shown when nothing matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Matching recipes in corpus order
    pub recipes: Vec<Recipe>,
}

/// Recipe routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipes/options", get(Self::handle_options))
            .route("/api/recipes/recommend", post(Self::handle_recommend))
            .with_state(resources)
    }

    /// Handle GET /api/recipes/options
    async fn handle_options(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<RecipeOptionsResponse> {
        Json(RecipeOptionsResponse {
            categories: resources.categories.names().map(str::to_owned).collect(),
            dietary_flags: DietaryFlag::ALL
                .iter()
                .map(|flag| OptionItem {
                    id: flag.as_str().to_owned(),
                    label: flag.label().to_owned(),
                })
                .collect(),
            allergens: COMMON_ALLERGENS.iter().map(|a| (*a).to_owned()).collect(),
            faq_categories: FaqCategory::all()
                .iter()
                .map(|c| OptionItem {
                    id: c.as_str().to_owned(),
                    label: c.label().to_owned(),
                })
                .collect(),
        })
    }

    /// Handle POST /api/recipes/recommend
    async fn handle_recommend(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<FilterCriteria>, JsonRejection>,
    ) -> AppResult<Json<RecommendResponse>> {
        let session = authenticate(&headers, &resources).await?;
        let criteria = json_body(payload)?;

        let started = Instant::now();
        let outcome =
            PreferenceFilter::new(&resources.categories).filter(&resources.corpus, &criteria)?;

        AppLogger::log_recommendation(
            &session.username,
            &summarize_criteria(&criteria),
            outcome.len(),
            outcome.examined(),
            started.elapsed(),
        );

        let (status, message) = if outcome.is_empty() {
            (
                RecommendationStatus::NoMatches,
                Some(error_messages::NO_MATCHES.to_owned()),
            )
        } else {
            (RecommendationStatus::Ok, None)
        };

        Ok(Json(RecommendResponse {
            status,
            count: outcome.len(),
            examined: outcome.examined(),
            message,
            recipes: outcome.iter().cloned().collect(),
        }))
    }
}

/// Compact, log-friendly rendering of the criteria
fn summarize_criteria(criteria: &FilterCriteria) -> String {
    if criteria.is_unconstrained() {
        return "unconstrained".to_owned();
    }
    let flags: Vec<&str> = criteria.dietary_flags.iter().map(DietaryFlag::as_str).collect();
    format!(
        "flags=[{}] allergens={} include=[{}] exclude=[{}] preferred={}",
        flags.join(","),
        criteria.allergen_terms().count(),
        criteria.include_categories.join(","),
        criteria.exclude_categories.join(","),
        criteria.preferred_term().unwrap_or("-"),
    )
}
