// ABOUTME: Route handler storing the caller's health profile on their session
// ABOUTME: Validates age, height and weight ranges before saving
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{authenticate, bearer_token, json_body};
use crate::errors::AppResult;
use crate::models::HealthProfile;
use crate::resources::ServerResources;
use axum::extract::{rejection::JsonRejection, State};
use axum::http::HeaderMap;
use axum::routing::put;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Stored profile echo
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Session owner
    pub username: String,
    /// Profile now attached to the session
    pub profile: HealthProfile,
}

/// Profile routes handler
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/profile", put(Self::handle_update))
            .with_state(resources)
    }

    /// Handle PUT /api/profile
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<HealthProfile>, JsonRejection>,
    ) -> AppResult<Json<ProfileResponse>> {
        // Authenticate before looking at the body so anonymous callers get 401
        authenticate(&headers, &resources).await?;
        let token = bearer_token(&headers)?;
        let profile = json_body(payload)?;
        profile.validate()?;

        let session = resources.sessions.update_profile(token, profile).await?;
        debug!(username = %session.username, "Health profile updated");
        Ok(Json(ProfileResponse {
            username: session.username,
            profile,
        }))
    }
}
