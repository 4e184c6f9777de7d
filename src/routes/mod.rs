// ABOUTME: HTTP route assembly and shared request helpers
// ABOUTME: Builds the axum router with tracing, request-id, timeout and body-limit layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route modules for the Nutrimate HTTP API
//!
//! Each domain exposes a `*Routes::routes(resources)` constructor; [`router`]
//! merges them and applies the cross-cutting layers.

/// Registration, login, logout and session lookup
pub mod auth;
/// FAQ answers
pub mod faq;
/// Liveness and readiness probes
pub mod health;
/// Health profile storage
pub mod profile;
/// Recipe options and recommendations
pub mod recipes;

pub use auth::AuthRoutes;
pub use faq::FaqRoutes;
pub use health::HealthRoutes;
pub use profile::ProfileRoutes;
pub use recipes::RecipeRoutes;

use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use crate::session::Session;
use axum::extract::{rejection::JsonRejection, DefaultBodyLimit};
use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum::{Json, Router};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the complete application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    let timeout = Duration::from_secs(resources.config.request_timeout_secs);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(AuthRoutes::routes(Arc::clone(&resources)))
        .merge(ProfileRoutes::routes(Arc::clone(&resources)))
        .merge(RecipeRoutes::routes(Arc::clone(&resources)))
        .merge(FaqRoutes::routes(resources))
        .layer(DefaultBodyLimit::max(limits::MAX_REQUEST_SIZE))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(timeout)),
        )
}

/// Pull the bearer token out of the `Authorization` header
///
/// # Errors
///
/// Returns `AUTH_REQUIRED` when the header is absent and `AUTH_INVALID` when
/// it is not a non-empty bearer token
pub fn bearer_token(headers: &HeaderMap) -> AppResult<&str> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Err(AppError::auth_required());
    };
    let value = value
        .to_str()
        .map_err(|_| AppError::auth_invalid("Authorization header is not valid text"))?;
    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::auth_invalid("Authorization header must be 'Bearer <token>'"))
}

/// Resolve the caller's live session
///
/// # Errors
///
/// Returns `AUTH_REQUIRED`, `AUTH_INVALID` or `AUTH_EXPIRED`
pub async fn authenticate(headers: &HeaderMap, resources: &ServerResources) -> AppResult<Session> {
    let token = bearer_token(headers)?;
    resources.sessions.get(token).await.inspect_err(|e| {
        AppLogger::log_security_event("session_rejected", "low", &e.message);
    })
}

/// Unwrap a JSON body, turning extractor rejections into `INVALID_INPUT`
///
/// # Errors
///
/// Returns `INVALID_INPUT` describing why the body was rejected
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}
