// ABOUTME: FAQ route handler returning canned nutrition answers by category
// ABOUTME: Available to logged-in sessions only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::authenticate;
use crate::errors::{AppError, AppResult};
use crate::knowledge::FaqCategory;
use crate::resources::ServerResources;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// FAQ answer
#[derive(Debug, Serialize, Deserialize)]
pub struct FaqResponse {
    /// Category identifier
    pub category: FaqCategory,
    /// Category label
    pub label: String,
    /// Fixed query that was answered
    pub query: String,
    /// Answer text
    pub answer: String,
}

/// FAQ routes handler
pub struct FaqRoutes;

impl FaqRoutes {
    /// Create FAQ routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/faq/:category", get(Self::handle_answer))
            .with_state(resources)
    }

    /// Handle GET /api/faq/:category
    async fn handle_answer(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(category): Path<String>,
    ) -> AppResult<Json<FaqResponse>> {
        authenticate(&headers, &resources).await?;
        let category = FaqCategory::parse(&category)
            .ok_or_else(|| AppError::not_found(format!("FAQ category '{category}'")))?;
        let answer = resources
            .knowledge
            .answer(category)
            .ok_or_else(|| AppError::not_found(format!("Answer for '{}'", category.as_str())))?;

        Ok(Json(FaqResponse {
            category,
            label: category.label().to_owned(),
            query: category.query().to_owned(),
            answer,
        }))
    }
}
