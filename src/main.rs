//! Rolodex - Main entry point
//!
//! Runs the interactive assistant over stdin/stdout. Logging goes to stderr
//! so it never mixes with the conversation.

use anyhow::Result;
use rolodex::{repl, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only to keep stdout for the conversation)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        window_days = config.birthday_window_days,
        "Starting rolodex assistant"
    );

    repl::run_stdio(&config)?;

    info!("Rolodex shutdown complete");
    Ok(())
}
