// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses and validates every server setting from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{defaults, env_config, limits, ports};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, Level};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(&self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe `SQLite` location for the account store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse a `sqlite:` URL; a bare path is treated as a file path
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Connection string understood by `sqlx`
    ///
    /// File databases are opened with `mode=rwc` so a fresh deployment
    /// creates the file on first start.
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}?mode=rwc", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(defaults::DATABASE_URL)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SQLite { path } => write!(f, "sqlite:{}", path.display()),
            Self::Memory => write!(f, "sqlite::memory:"),
        }
    }
}

/// Account store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

/// Locations of the static datasets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Recipe corpus (JSON array or JSON Lines)
    pub recipes_path: PathBuf,
    /// Optional ingredient category table override
    pub categories_path: Option<PathBuf>,
    /// Optional FAQ answers override
    pub faq_path: Option<PathBuf>,
}

/// Session lifetime and capacity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Hours before a session expires
    pub ttl_hours: i64,
    /// Maximum number of concurrent sessions kept in memory
    pub max_sessions: usize,
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub http_host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Account store
    pub database: DatabaseConfig,
    /// Static datasets
    pub data: DataConfig,
    /// Sessions
    pub sessions: SessionConfig,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` naming the variable when a value cannot be
    /// parsed or falls outside its accepted range
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let environment = Environment::from_str_or_default(&env_var_or(
            env_config::ENVIRONMENT,
            "development",
        ));
        let default_cost = if environment.is_testing() {
            defaults::TESTING_BCRYPT_COST
        } else {
            bcrypt::DEFAULT_COST
        };

        let config = Self {
            http_host: env_var_or(env_config::HTTP_HOST, defaults::HTTP_HOST),
            http_port: parse_env(env_config::HTTP_PORT, ports::DEFAULT_HTTP_PORT)?,
            environment,
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_var_or(
                    env_config::DATABASE_URL,
                    defaults::DATABASE_URL,
                )),
                bcrypt_cost: parse_env_in_range(
                    env_config::BCRYPT_COST,
                    default_cost,
                    &(limits::MIN_BCRYPT_COST..=limits::MAX_BCRYPT_COST),
                )?,
            },
            data: DataConfig {
                recipes_path: PathBuf::from(env_var_or(
                    env_config::RECIPES_PATH,
                    defaults::RECIPES_PATH,
                )),
                categories_path: optional_path(env_config::CATEGORIES_PATH),
                faq_path: optional_path(env_config::FAQ_PATH),
            },
            sessions: SessionConfig {
                ttl_hours: parse_env_in_range(
                    env_config::SESSION_TTL_HOURS,
                    limits::DEFAULT_SESSION_HOURS,
                    &(1..=limits::MAX_SESSION_HOURS),
                )?,
                max_sessions: parse_env_in_range(
                    env_config::MAX_SESSIONS,
                    defaults::MAX_SESSIONS,
                    &(1..=usize::MAX),
                )?,
            },
            request_timeout_secs: parse_env_in_range(
                env_config::REQUEST_TIMEOUT_SECS,
                defaults::REQUEST_TIMEOUT_SECS,
                &(1..=u64::MAX),
            )?,
        };

        Ok(config)
    }

    /// Configuration for tests: in-memory database, cheapest bcrypt cost
    #[must_use]
    pub fn for_testing(recipes_path: impl Into<PathBuf>) -> Self {
        Self {
            http_host: defaults::HTTP_HOST.to_owned(),
            http_port: 0,
            environment: Environment::Testing,
            database: DatabaseConfig {
                url: DatabaseUrl::Memory,
                bcrypt_cost: defaults::TESTING_BCRYPT_COST,
            },
            data: DataConfig {
                recipes_path: recipes_path.into(),
                categories_path: None,
                faq_path: None,
            },
            sessions: SessionConfig {
                ttl_hours: limits::DEFAULT_SESSION_HOURS,
                max_sessions: defaults::MAX_SESSIONS,
            },
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
        }
    }

    /// One-line description for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutrimate configuration: http={}:{} env={} db={} bcrypt_cost={} recipes={} categories={} faq={} session_ttl={}h max_sessions={} timeout={}s",
            self.http_host,
            self.http_port,
            self.environment,
            self.database.url,
            self.database.bcrypt_cost,
            self.data.recipes_path.display(),
            self.data
                .categories_path
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |p| p.display().to_string()),
            self.data
                .faq_path
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |p| p.display().to_string()),
            self.sessions.ttl_hours,
            self.sessions.max_sessions,
            self.request_timeout_secs,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn optional_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}

fn parse_env_in_range<T>(key: &str, default: T, range: &RangeInclusive<T>) -> AppResult<T>
where
    T: FromStr + PartialOrd + fmt::Display,
    T::Err: fmt::Display,
{
    let value = parse_env(key, default)?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(AppError::config_invalid(format!(
            "{key} must be between {} and {}, got {value}",
            range.start(),
            range.end()
        )))
    }
}
