//! Stickpan launcher
//!
//! Opens the mouse panning frontend.
//!
//! # Arguments
//!
//! - `--config <path>` - Use this config file instead of the platform default

use anyhow::{Result, bail};
use std::env;
use std::path::PathBuf;

/// Parse `--config <path>` (or `--config=<path>`) from command line args
fn parse_config_path(args: &[String]) -> Result<Option<PathBuf>> {
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if let Some(path) = arg.strip_prefix("--config=") {
            return Ok(Some(PathBuf::from(path)));
        }
        if arg == "--config" {
            match iter.next() {
                Some(path) => return Ok(Some(PathBuf::from(path))),
                None => bail!("--config requires a path"),
            }
        }
    }
    Ok(None)
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let config_path = parse_config_path(&args)?;
    if let Some(ref path) = config_path {
        tracing::info!("Using config file: {}", path.display());
    }

    stickpan_frontend::app::run(config_path)?;
    Ok(())
}
