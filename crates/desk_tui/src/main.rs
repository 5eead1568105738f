//! Desk TUI entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use desk_client::config::{build_config, CliArgs, LogLevel};
use desk_tui::prelude::*;

/// Terminal client for the derivative pricing service
#[derive(Parser)]
#[command(name = "desk-tui")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the pricing service
    #[arg(short, long)]
    base_url: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

/// Route diagnostics to a file; writing to stdout would corrupt the TUI.
fn init_tracing(level: LogLevel) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("desk-tui.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str())),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs {
        config_file: cli.config,
        base_url: cli.base_url,
        log_level: cli.log_level,
    })?;

    init_tracing(config.log_level)?;

    let mut app = TuiApp::new(&config)?;
    app.run().await?;

    Ok(())
}
