//! CLI for collist.

mod commands;

use anyhow::Result;
use clap::Parser;
use collist_core::config::{self, CollistConfig};
use std::io;
use std::path::PathBuf;

use commands::{run_list, ListOptions};

/// Print every request of an API collection export as `folder / ... / name -> url`.
#[derive(Debug, Parser)]
#[command(name = "collist")]
#[command(about = "collist: flat listing of an API collection export", long_about = None)]
pub struct Cli {
    /// Collection export to read. Defaults to the configured collection file.
    pub path: Option<PathBuf>,

    /// Prefix each line with the request's HTTP method.
    #[arg(long)]
    pub methods: bool,

    /// Plain lines even when the config turns methods on.
    #[arg(long, conflicts_with = "methods")]
    pub no_methods: bool,

    /// After the listing, print request/folder counts to stderr.
    #[arg(long)]
    pub summary: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init().unwrap_or_else(|e| {
            tracing::warn!("using default config: {:#}", e);
            CollistConfig::default()
        });
        tracing::debug!("loaded config: {:?}", cfg);

        let (path, opts) = cli.resolve(cfg);
        let stdout = io::stdout();
        let stderr = io::stderr();
        run_list(&path, opts, &mut stdout.lock(), &mut stderr.lock())
    }

    /// Command-line flags win over config values.
    fn resolve(self, cfg: CollistConfig) -> (PathBuf, ListOptions) {
        let path = self.path.unwrap_or(cfg.collection_path);
        let opts = ListOptions {
            show_methods: !self.no_methods && (self.methods || cfg.show_methods),
            summary: self.summary,
        };
        (path, opts)
    }
}

#[cfg(test)]
mod tests;
