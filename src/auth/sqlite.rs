// ABOUTME: SQLite-backed account store using sqlx with bcrypt password hashes
// ABOUTME: Creates the users table and implements registration and login
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::password::{hash_password, verify_password};
use super::{AuthStore, Credentials, LoginOutcome, RegistrationOutcome};
use crate::config::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::{Error as SqlxError, Row};
use tokio::fs;
use tracing::{debug, info};

/// Account store persisted in a `SQLite` database
#[derive(Clone)]
pub struct SqliteAuthStore {
    pool: SqlitePool,
    bcrypt_cost: u32,
}

impl SqliteAuthStore {
    /// Open (or create) the database and ensure the schema exists
    ///
    /// In-memory databases use a single pooled connection that is never
    /// recycled, since every `SQLite` connection gets its own in-memory
    /// database.
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the database directory cannot be created
    /// and `DATABASE_ERROR` if connecting or migrating fails
    pub async fn connect(url: &DatabaseUrl, bcrypt_cost: u32) -> AppResult<Self> {
        let options = match url {
            DatabaseUrl::Memory => SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None),
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).await.map_err(|e| {
                        AppError::storage(format!(
                            "Failed to create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                SqlitePoolOptions::new().max_connections(5)
            }
        };

        let pool = options
            .connect(&url.to_connection_string())
            .await
            .map_err(|e| AppError::database(format!("Failed to open {url}: {e}")))?;

        let store = Self { pool, bcrypt_cost };
        store.migrate().await?;
        info!(database = %url, "Account store ready");
        Ok(store)
    }

    async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                username TEXT PRIMARY KEY,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Number of registered accounts
    ///
    /// # Errors
    ///
    /// Returns `DATABASE_ERROR` if the query fails
    pub async fn user_count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("total")?)
    }

    async fn username_exists(&self, username: &str) -> AppResult<bool> {
        let row = sqlx::query("SELECT 1 FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn password_hash(&self, username: &str) -> AppResult<Option<String>> {
        let row = sqlx::query("SELECT password_hash FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| r.try_get("password_hash"))
            .transpose()
            .map_err(AppError::from)
    }
}

#[async_trait]
impl AuthStore for SqliteAuthStore {
    async fn register(&self, credentials: &Credentials) -> AppResult<RegistrationOutcome> {
        let username = credentials.username();
        if self.username_exists(username).await? {
            AppLogger::log_auth_event(username, "register", false, Some("username taken"));
            return Ok(RegistrationOutcome::AlreadyExists);
        }

        let hash = hash_password(credentials.password(), self.bcrypt_cost).await?;
        let inserted = sqlx::query(
            "INSERT INTO users (username, password_hash, created_at) VALUES (?, ?, ?)",
        )
        .bind(username)
        .bind(&hash)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await;

        match inserted {
            Ok(_) => {
                AppLogger::log_auth_event(username, "register", true, None);
                Ok(RegistrationOutcome::Registered)
            }
            // Lost a race with a concurrent registration of the same name
            Err(SqlxError::Database(db)) if db.is_unique_violation() => {
                debug!(username, "Concurrent registration hit unique constraint");
                AppLogger::log_auth_event(username, "register", false, Some("username taken"));
                Ok(RegistrationOutcome::AlreadyExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn login(&self, credentials: &Credentials) -> AppResult<LoginOutcome> {
        let username = credentials.username();
        let Some(hash) = self.password_hash(username).await? else {
            AppLogger::log_auth_event(username, "login", false, Some("unknown user"));
            return Ok(LoginOutcome::Rejected);
        };

        if verify_password(credentials.password(), &hash).await? {
            AppLogger::log_auth_event(username, "login", true, None);
            Ok(LoginOutcome::Authenticated {
                username: username.to_owned(),
            })
        } else {
            AppLogger::log_auth_event(username, "login", false, Some("wrong password"));
            Ok(LoginOutcome::Rejected)
        }
    }
}
