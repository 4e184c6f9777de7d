// ABOUTME: Username/password account store abstraction and credential validation
// ABOUTME: AuthStore trait with registration and login outcomes, plus the SQLite implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Account registration and login.
//!
//! Handlers talk to the [`AuthStore`] trait so tests can swap the backing
//! store. A duplicate username or a wrong password are ordinary outcomes,
//! not errors; `Err` is reserved for storage and hashing failures.

/// bcrypt hashing helpers that run off the async executor
pub mod password;
/// `SQLite` implementation of [`AuthStore`]
pub mod sqlite;

pub use sqlite::SqliteAuthStore;

use crate::constants::{error_messages, limits};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::fmt;

/// Validated username and password pair
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Validate raw form input
    ///
    /// The username is trimmed; the password is taken as-is.
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` when either field is empty and
    /// `INVALID_INPUT` when a field exceeds its length limit
    pub fn new(username: &str, password: &str) -> AppResult<Self> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::missing_field(error_messages::FILL_IN_BOTH_FIELDS));
        }
        if username.chars().count() > limits::MAX_USERNAME_CHARS {
            return Err(AppError::invalid_input(format!(
                "Username must be at most {} characters",
                limits::MAX_USERNAME_CHARS
            )));
        }
        if password.len() > limits::MAX_PASSWORD_BYTES {
            return Err(AppError::invalid_input(format!(
                "Password must be at most {} bytes",
                limits::MAX_PASSWORD_BYTES
            )));
        }
        Ok(Self {
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }

    /// Trimmed username
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Plain-text password; only ever handed to the hasher
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Result of a registration attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Account created
    Registered,
    /// The username is already taken
    AlreadyExists,
}

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials matched a stored account
    Authenticated {
        /// Account username
        username: String,
    },
    /// Unknown username or wrong password
    Rejected,
}

impl LoginOutcome {
    /// Whether the login succeeded
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

/// Persistent store of username/password accounts
#[async_trait]
pub trait AuthStore: Send + Sync {
    /// Create an account unless the username is taken
    ///
    /// # Errors
    ///
    /// Returns an error if hashing or storage fails
    async fn register(&self, credentials: &Credentials) -> AppResult<RegistrationOutcome>;

    /// Check credentials against the stored hash
    ///
    /// # Errors
    ///
    /// Returns an error if hashing or storage fails
    async fn login(&self, credentials: &Credentials) -> AppResult<LoginOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_credentials_require_both_fields() {
        let error = Credentials::new("  ", "secret").unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.message, error_messages::FILL_IN_BOTH_FIELDS);

        let error = Credentials::new("alice", "").unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
    }

    #[test]
    fn test_credentials_trim_username_only() {
        let credentials = Credentials::new("  alice ", " pass ").unwrap();
        assert_eq!(credentials.username(), "alice");
        assert_eq!(credentials.password(), " pass ");
    }

    #[test]
    fn test_credentials_enforce_limits() {
        let long_name = "a".repeat(limits::MAX_USERNAME_CHARS + 1);
        assert_eq!(
            Credentials::new(&long_name, "pw").unwrap_err().code,
            ErrorCode::InvalidInput
        );
        let long_password = "p".repeat(limits::MAX_PASSWORD_BYTES + 1);
        assert_eq!(
            Credentials::new("alice", &long_password).unwrap_err().code,
            ErrorCode::InvalidInput
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("alice", "hunter2").unwrap();
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }
}
