//! `collist [PATH]` – print the flattened request listing.

use anyhow::{Context, Result};
use collist_core::collection;
use collist_core::printer::{self, Listing};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub show_methods: bool,
    pub summary: bool,
}

/// Lists the collection at `path` to `out`. A missing file is not an error:
/// `File not found` goes to `out` and nothing else is printed.
pub fn run_list<W: Write, E: Write>(
    path: &Path,
    opts: ListOptions,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    let collection = match collection::load_collection(path) {
        Ok(c) => c,
        Err(e) if e.is_not_found() => {
            writeln!(out, "{e}")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let listing = Listing {
        show_methods: opts.show_methods,
    };
    let written = listing
        .write(&collection.item, "", out)
        .context("write listing")?;
    out.flush()?;

    let summary = printer::summarize(&collection.item);
    tracing::info!(
        "listed {} requests from {} ({} folders, {} skipped)",
        written,
        path.display(),
        summary.folders,
        summary.skipped
    );
    if opts.summary {
        writeln!(err, "{summary}")?;
    }
    Ok(())
}
