//! File logging. The terminal belongs to the TUI, so events never go to stdout.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;

/// Unknown level names fall back to INFO
pub fn parse_level(level: &str) -> Level {
    level.trim().parse::<Level>().unwrap_or(Level::INFO)
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {dir:?}"))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {path:?}"))
}

pub fn init(path: &Path, level: &str) -> Result<()> {
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_max_level(parse_level(level))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("Failed to install log subscriber")
}
