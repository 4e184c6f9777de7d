// ABOUTME: Shared server state built once at startup and handed to every route
// ABOUTME: Holds config, the recipe corpus, category table, account store, sessions and FAQ responder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::auth::{AuthStore, SqliteAuthStore};
use crate::config::ServerConfig;
use crate::corpus::RecipeCorpus;
use crate::errors::{AppError, AppResult};
use crate::knowledge::{CannedResponder, KnowledgeResponder};
use crate::recipes::CategoryTable;
use crate::session::SessionManager;
use chrono::Duration;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Everything a request handler needs
///
/// The corpus and category table are read-only after construction; the
/// session manager is the only shared mutable state.
pub struct ServerResources {
    /// Server configuration
    pub config: ServerConfig,
    /// Recipe corpus
    pub corpus: RecipeCorpus,
    /// Ingredient categories
    pub categories: CategoryTable,
    /// Account store
    pub auth_store: Arc<dyn AuthStore>,
    /// Login sessions
    pub sessions: SessionManager,
    /// FAQ responder
    pub knowledge: Arc<dyn KnowledgeResponder>,
}

impl ServerResources {
    /// Assemble resources from already-built parts
    #[must_use]
    pub fn new(
        config: ServerConfig,
        corpus: RecipeCorpus,
        categories: CategoryTable,
        auth_store: Arc<dyn AuthStore>,
        knowledge: Arc<dyn KnowledgeResponder>,
    ) -> Self {
        let sessions = SessionManager::new(
            Duration::hours(config.sessions.ttl_hours),
            config.sessions.max_sessions,
        );
        Self {
            config,
            corpus,
            categories,
            auth_store,
            sessions,
            knowledge,
        }
    }

    /// Load datasets and open the account store described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus, an override file, or the database
    /// cannot be loaded
    pub async fn from_config(config: ServerConfig) -> AppResult<Self> {
        let corpus = RecipeCorpus::load(&config.data.recipes_path)?;

        let categories = match &config.data.categories_path {
            Some(path) => load_category_table(path)?,
            None => CategoryTable::default(),
        };

        let knowledge: Arc<dyn KnowledgeResponder> = match &config.data.faq_path {
            Some(path) => Arc::new(CannedResponder::from_json_file(path)?),
            None => Arc::new(CannedResponder::default()),
        };

        let auth_store =
            SqliteAuthStore::connect(&config.database.url, config.database.bcrypt_cost).await?;

        info!(
            recipes = corpus.len(),
            categories = categories.len(),
            "Server resources initialized"
        );
        Ok(Self::new(
            config,
            corpus,
            categories,
            Arc::new(auth_store),
            knowledge,
        ))
    }
}

fn load_category_table(path: &Path) -> AppResult<CategoryTable> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!(
            "Failed to read category table {}: {e}",
            path.display()
        ))
    })?;
    let table = CategoryTable::from_json_str(&contents)?;
    info!(path = %path.display(), categories = table.len(), "Loaded category table");
    Ok(table)
}
