// ABOUTME: Recipe recommendation intelligence for the Nutrimate service
// ABOUTME: Exposes the preference filter, filter criteria, and ingredient category tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrimate Intelligence
//!
//! Pure, synchronous algorithms over the recipe corpus. Nothing in this crate
//! performs I/O or holds shared mutable state, so every call is safe to run
//! concurrently with any other.

/// Preference filtering over recipe collections
pub mod recipes;
