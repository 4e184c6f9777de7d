// ABOUTME: Server binary entry point for the Nutrimate recipe recommendation API
// ABOUTME: Initializes logging, loads configuration and resources, then serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrimate Server Binary
//!
//! Starts the HTTP API with the recipe corpus loaded in memory and the
//! account store opened.

use anyhow::Result;
use clap::Parser;
use nutrimate_server::{
    config::environment::ServerConfig, logging, resources::ServerResources, server,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "nutrimate-server")]
#[command(about = "Nutrimate - recipe recommendations filtered by dietary preferences")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the recipe corpus path
    #[arg(long)]
    recipes: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(recipes) = args.recipes {
        config.data.recipes_path = recipes;
    }

    info!("{}", config.summary());

    let resources = match ServerResources::from_config(config).await {
        Ok(resources) => Arc::new(resources),
        Err(e) => {
            error!("Failed to initialize server resources: {e}");
            return Err(e.into());
        }
    };

    server::serve(resources).await?;
    Ok(())
}
