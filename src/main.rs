//! Wayfarer - form-driven travel itinerary planner
//!
//! Entry point: parses flags, sets up file logging (the TUI owns the
//! terminal), loads config, wires the planner, and launches the form.

use std::fs;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use wayfarer::cli::{Cli, get_log_path};
use wayfarer::config::Config;
use wayfarer::llm::create_client;
use wayfarer::planner::ItineraryPlanner;
use wayfarer::tui;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    let log_path = get_log_path();
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Determine log level with priority: CLI --log-level > config file > default (INFO)
    let level_str = cli_log_level.or(config_log_level);
    let level = if let Some(s) = level_str {
        match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        }
    } else {
        tracing::Level::INFO
    };

    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());

    // Setup logging with priority: CLI > config > INFO default
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!(
        provider = %config.llm.provider,
        model = %config.llm.model,
        "Wayfarer starting"
    );

    // Create the completion client if the credential is available; a
    // missing key is not a startup failure - the form surfaces it as a
    // remote-service error on submit
    let planner = match create_client(&config.llm) {
        Ok(client) => {
            debug!("main: LLM client created");
            ItineraryPlanner::new(client, config.llm.max_tokens)?
        }
        Err(e) => {
            info!("LLM client not available ({}). The form will show an error on submit.", e);
            ItineraryPlanner::without_client(e.to_string(), config.llm.max_tokens)?
        }
    };

    debug!("main: launching form");
    tui::run(planner).await
}
