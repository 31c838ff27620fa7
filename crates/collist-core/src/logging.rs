//! Logging init: append to a file under the XDG state dir, or fall back to stderr.
//!
//! Stdout carries the listing itself, so logs never go there.

use anyhow::{Context, Result};
use std::fs;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise `default`.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize structured logging to `~/.local/state/collist/collist.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("collist")?;
    let log_file_path = xdg_dirs
        .place_state_file("collist.log")
        .context("create log directory")?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .with_context(|| format!("open log file: {}", log_file_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info,collist=debug,collist_core=debug"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::info!("collist logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Log to stderr when the log file is unavailable. Warnings only unless
/// `RUST_LOG` says otherwise.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
