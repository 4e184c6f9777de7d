// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the Nutrimate service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Application constants grouped by domain rather than kept in one flat list.

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the HTTP service
    pub const NUTRIMATE_SERVER: &str = "nutrimate-server";
}

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY: &str = "/ready";
    /// API base path
    pub const API_BASE: &str = "/api";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Bind address
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Credential database URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Recipe corpus file
    pub const RECIPES_PATH: &str = "NUTRIMATE_RECIPES_PATH";
    /// Optional ingredient category table override
    pub const CATEGORIES_PATH: &str = "NUTRIMATE_CATEGORIES_PATH";
    /// Optional FAQ response table override
    pub const FAQ_PATH: &str = "NUTRIMATE_FAQ_PATH";
    /// bcrypt work factor
    pub const BCRYPT_COST: &str = "BCRYPT_COST";
    /// Session lifetime in hours
    pub const SESSION_TTL_HOURS: &str = "SESSION_TTL_HOURS";
    /// Maximum concurrently tracked sessions
    pub const MAX_SESSIONS: &str = "MAX_SESSIONS";
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Defaults applied when configuration is absent
pub mod defaults {
    /// Default bind address
    pub const HTTP_HOST: &str = "127.0.0.1";
    /// Default credential database
    pub const DATABASE_URL: &str = "sqlite:./data/users.db";
    /// Default recipe corpus location
    pub const RECIPES_PATH: &str = "./data/recipes.json";
    /// Cost used outside production-like environments so tests stay fast
    pub const TESTING_BCRYPT_COST: u32 = 4;
    /// Maximum tracked sessions
    pub const MAX_SESSIONS: usize = 10_000;
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Default limits
pub mod limits {
    /// Default session lifetime in hours
    pub const DEFAULT_SESSION_HOURS: i64 = 24;
    /// Longest configurable session lifetime (one week)
    pub const MAX_SESSION_HOURS: i64 = 168;
    /// Lowest bcrypt cost the bcrypt crate accepts
    pub const MIN_BCRYPT_COST: u32 = 4;
    /// Highest bcrypt cost the bcrypt crate accepts
    pub const MAX_BCRYPT_COST: u32 = 31;
    /// Longest accepted username in characters
    pub const MAX_USERNAME_CHARS: usize = 64;
    /// bcrypt only reads the first 72 bytes of its input
    pub const MAX_PASSWORD_BYTES: usize = 72;
    /// Maximum request body size in bytes
    pub const MAX_REQUEST_SIZE: usize = 1_048_576; // 1MB
}

/// User-facing messages shared across handlers
pub mod error_messages {
    /// Registration or login attempted with a blank field
    pub const FILL_IN_BOTH_FIELDS: &str = "Please fill in both fields.";
    /// Registration attempted with a taken username
    pub const USERNAME_TAKEN: &str = "Username already taken. Please choose another.";
    /// Login rejected
    pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";
    /// Session token unknown
    pub const INVALID_SESSION: &str = "Invalid or unknown session token";
    /// No recipes survived filtering
    pub const NO_MATCHES: &str = "No suitable recipes found based on your inputs.";
}

/// Allergen keywords offered to users as quick picks
///
/// Allergens are free text; these are only suggestions.
pub const COMMON_ALLERGENS: [&str; 5] = ["Nuts", "Dairy", "Eggs", "Soy", "Wheat"];
