// ABOUTME: Account route handlers for registration, login, logout and session lookup
// ABOUTME: Translates AuthStore outcomes into HTTP responses and manages bearer sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{authenticate, bearer_token, json_body};
use crate::auth::{Credentials, LoginOutcome, RegistrationOutcome};
use crate::constants::error_messages;
use crate::errors::{AppError, AppResult};
use crate::models::HealthProfile;
use crate::resources::ServerResources;
use axum::extract::{rejection::JsonRejection, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Registration and login form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CredentialsRequest {
    /// Username
    pub username: String,
    /// Password
    pub password: String,
}

/// Successful registration
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Registered username
    pub username: String,
    /// Confirmation text
    pub message: String,
}

/// Successful login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    pub session_token: String,
    /// Logged-in username
    pub username: String,
    /// RFC 3339 expiry
    pub expires_at: String,
}

/// Current session details
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Logged-in username
    pub username: String,
    /// RFC 3339 start time
    pub created_at: String,
    /// RFC 3339 expiry
    pub expires_at: String,
    /// Profile entered during this session
    pub profile: Option<HealthProfile>,
}

/// Account routes handler
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all account routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/register", post(Self::handle_register))
            .route("/api/auth/login", post(Self::handle_login))
            .route("/api/auth/logout", post(Self::handle_logout))
            .route("/api/session", get(Self::handle_session))
            .with_state(resources)
    }

    /// Handle POST /api/auth/register
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<CredentialsRequest>, JsonRejection>,
    ) -> AppResult<Response> {
        let body = json_body(payload)?;
        let credentials = Credentials::new(&body.username, &body.password)?;

        match resources.auth_store.register(&credentials).await? {
            RegistrationOutcome::Registered => {
                let response = RegisterResponse {
                    username: credentials.username().to_owned(),
                    message: "Registration successful! Please log in.".to_owned(),
                };
                Ok((StatusCode::CREATED, Json(response)).into_response())
            }
            RegistrationOutcome::AlreadyExists => {
                Err(AppError::already_exists(error_messages::USERNAME_TAKEN))
            }
        }
    }

    /// Handle POST /api/auth/login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<CredentialsRequest>, JsonRejection>,
    ) -> AppResult<Json<LoginResponse>> {
        let body = json_body(payload)?;
        let credentials = Credentials::new(&body.username, &body.password)?;

        match resources.auth_store.login(&credentials).await? {
            LoginOutcome::Authenticated { username } => {
                let session = resources.sessions.start(&username).await;
                Ok(Json(LoginResponse {
                    session_token: session.token,
                    username: session.username,
                    expires_at: session.expires_at.to_rfc3339(),
                }))
            }
            LoginOutcome::Rejected => Err(AppError::auth_invalid(
                error_messages::INVALID_CREDENTIALS,
            )),
        }
    }

    /// Handle POST /api/auth/logout
    async fn handle_logout(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> AppResult<StatusCode> {
        let session = authenticate(&headers, &resources).await?;
        resources.sessions.end(bearer_token(&headers)?).await;
        info!(username = %session.username, "User logged out");
        Ok(StatusCode::NO_CONTENT)
    }

    /// Handle GET /api/session
    async fn handle_session(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> AppResult<Json<SessionResponse>> {
        let session = authenticate(&headers, &resources).await?;
        Ok(Json(SessionResponse {
            username: session.username,
            created_at: session.created_at.to_rfc3339(),
            expires_at: session.expires_at.to_rfc3339(),
            profile: session.profile,
        }))
    }
}
