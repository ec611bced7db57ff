//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Wayfarer - form-driven travel itinerary planner
#[derive(Parser)]
#[command(
    name = "wayfarer",
    about = "Plan a trip through a progressive form backed by a chat-completion API",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,
}

/// Path to the log file (the TUI owns the terminal, so logs go to a file)
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wayfarer")
        .join("logs")
        .join("wayfarer.log")
}
