// ABOUTME: Main library entry point for the Nutrimate recipe recommendation service
// ABOUTME: Wires the preference filter, corpus, auth, sessions and FAQ into an HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrimate Server
//!
//! Recipe recommendations narrowed by dietary flags, allergens, ingredient
//! categories and a preferred ingredient.
//!
//! ## Architecture
//!
//! - **Corpus**: recipes loaded once at startup and shared read-only
//! - **Filter**: the pure preference filter from `nutrimate-intelligence`
//! - **Auth**: username/password accounts with bcrypt hashes in `SQLite`
//! - **Sessions**: bounded in-memory sessions keyed by bearer token
//! - **Knowledge**: canned answers to a fixed set of nutrition questions
//! - **Routes**: the axum HTTP surface tying it together
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrimate_server::config::environment::ServerConfig;
//! use nutrimate_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Nutrimate configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Username/password authentication backed by `SQLite`
pub mod auth;
/// Environment-driven server configuration
pub mod config;
/// Recipe corpus loading and normalization
pub mod corpus;
/// Canned nutrition knowledge answers
pub mod knowledge;
/// Structured logging setup
pub mod logging;
/// Shared server state handed to every route
pub mod resources;
/// HTTP route handlers
pub mod routes;
/// HTTP server bootstrap and graceful shutdown
pub mod server;
/// In-memory login sessions
pub mod session;

pub use nutrimate_core::{constants, errors, models};
pub use nutrimate_intelligence::recipes;
