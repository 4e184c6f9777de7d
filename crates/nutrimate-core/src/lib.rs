// ABOUTME: Core types and constants for the Nutrimate recipe recommendation service
// ABOUTME: Foundation crate with error handling, data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrimate Core
//!
//! Foundation crate providing shared types and constants. It changes rarely,
//! which keeps incremental builds of the rest of the workspace cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Recipe and health profile data models

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (Recipe, DietaryFlag, HealthProfile)
pub mod models;
