// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, sample recipe corpora and in-memory server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `nutrimate_server`

use nutrimate_server::{
    auth::SqliteAuthStore,
    config::{environment::ServerConfig, DatabaseUrl},
    constants::defaults::TESTING_BCRYPT_COST,
    corpus::RecipeCorpus,
    knowledge::CannedResponder,
    models::{DietaryFlag, Recipe},
    recipes::CategoryTable,
    resources::ServerResources,
};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Small corpus covering every dietary flag and several categories
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("Tofu Stir Fry", "tofu, broccoli, soy sauce, garlic")
            .with_instructions("Stir fry everything.")
            .with_flag(DietaryFlag::Vegan)
            .with_flag(DietaryFlag::Vegetarian)
            .with_flag(DietaryFlag::LactoseFree)
            .with_macros(320.0, 18.0, 12.0),
        Recipe::new("Cheese Pizza", "flour, mozzarella cheese, tomato sauce")
            .with_flag(DietaryFlag::Vegetarian)
            .with_macros(850.0, 30.0, 35.0),
        Recipe::new("Grilled Chicken Salad", "cooked chicken breast, lettuce, olive oil")
            .with_flag(DietaryFlag::GlutenFree)
            .with_flag(DietaryFlag::LactoseFree)
            .with_flag(DietaryFlag::NonVegetarian),
        Recipe::new("Almond Oat Porridge", "oats, almond milk, honey")
            .with_flag(DietaryFlag::Vegan)
            .with_flag(DietaryFlag::Vegetarian),
        Recipe::new("Lentil Soup", "lentils, carrot, celery, onion, cumin")
            .with_flag(DietaryFlag::Vegan)
            .with_flag(DietaryFlag::Vegetarian)
            .with_flag(DietaryFlag::GlutenFree)
            .with_flag(DietaryFlag::LactoseFree),
        Recipe::new("Salmon with Butter Rice", "salmon, rice, butter, lemon")
            .with_flag(DietaryFlag::GlutenFree)
            .with_flag(DietaryFlag::NonVegetarian),
    ]
}

/// Titles of recipes, in order
pub fn titles<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Vec<String> {
    recipes.into_iter().map(|r| r.title.clone()).collect()
}

/// In-memory server resources over the sample corpus
pub async fn create_test_resources() -> Arc<ServerResources> {
    init_test_logging();
    create_test_resources_with(ServerConfig::for_testing("unused.json")).await
}

/// Like [`create_test_resources`] but with a caller-supplied configuration
pub async fn create_test_resources_with(config: ServerConfig) -> Arc<ServerResources> {
    let auth_store = SqliteAuthStore::connect(&DatabaseUrl::Memory, TESTING_BCRYPT_COST)
        .await
        .expect("in-memory account store");

    Arc::new(ServerResources::new(
        config,
        RecipeCorpus::from_recipes(sample_recipes()),
        CategoryTable::default(),
        Arc::new(auth_store),
        Arc::new(CannedResponder::default()),
    ))
}
