// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports the environment-driven ServerConfig and its parts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the Nutrimate server. Everything comes from
//! environment variables; there is no config file.

/// Environment and server configuration
pub mod environment;

pub use environment::{
    DataConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel, ServerConfig, SessionConfig,
};
