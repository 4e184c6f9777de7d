// ABOUTME: bcrypt password hashing and verification on the blocking thread pool
// ABOUTME: Keeps CPU-heavy hashing off the async executor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use tokio::task;

/// Hash a password with a fresh salt
///
/// # Errors
///
/// Returns `INTERNAL_ERROR` if bcrypt fails or the blocking task panics
pub async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_owned();
    task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
}

/// Check a password against a stored bcrypt hash
///
/// A malformed stored hash counts as a mismatch.
///
/// # Errors
///
/// Returns `INTERNAL_ERROR` if the blocking task panics
pub async fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    task::spawn_blocking(move || bcrypt::verify(&password, &hash).unwrap_or(false))
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))
}
