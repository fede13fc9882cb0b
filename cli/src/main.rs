use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::io;
use tracing::{info, warn};
use triage_core::config::{API_KEY_ENV, get_default_config_file};
use triage_core::{ChatSession, RecommendationClient, TriageConfig};

mod app;
mod cli;
mod logging;
mod output;

use crate::cli::Args;
use crate::logging::init_tracing;

const APP_NAME: &str = "triage";

#[tokio::main]
async fn main() -> Result<()> {
    // Secrets come only from the environment; .env just populates it.
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => get_default_config_file(APP_NAME)?,
    };
    let file_config = TriageConfig::load_from_file(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    let config = file_config.merge(&args.overrides());

    init_tracing(&config.log_level);
    info!(path = %config_path.display(), model = %config.model_name, "Loaded configuration");

    if args.init_config {
        config
            .save_to_file(&config_path)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        println!("Wrote configuration to {}", config_path.display());
        return Ok(());
    }

    let config = config.with_env_api_key();
    if config.api_key().is_none() {
        warn!("{} is not set; every request will be answered with the missing-key message", API_KEY_ENV);
    }

    let client = RecommendationClient::new(config).context("Failed to create HTTP client")?;
    let mut session = ChatSession::new(client);
    info!(session = session.id(), "Session started");

    if let Some(prompt) = args.prompt.as_deref() {
        app::run_single_query(&mut session, prompt).await?;
    }

    if args.wants_interactive() {
        if let Err(e) = app::run_interactive_chat(&mut session, io::stdin().lock()).await {
            eprintln!("{}", format!("Interactive chat failed: {}", e).red());
            return Err(e);
        }
    }

    Ok(())
}
