//! Tests for argument parsing and config merging.

use super::parse;
use crate::cli::commands::ListOptions;
use clap::Parser;
use collist_core::config::{CollistConfig, DEFAULT_COLLECTION_PATH};
use std::path::PathBuf;

#[test]
fn cli_parse_no_args() {
    let cli = parse(&["collist"]);
    assert!(cli.path.is_none());
    assert!(!cli.methods);
    assert!(!cli.no_methods);
    assert!(!cli.summary);
}

#[test]
fn cli_parse_path_and_flags() {
    let cli = parse(&["collist", "api.json", "--methods", "--summary"]);
    assert_eq!(cli.path, Some(PathBuf::from("api.json")));
    assert!(cli.methods);
    assert!(cli.summary);
}

#[test]
fn cli_parse_rejects_extra_positional() {
    assert!(crate::cli::Cli::try_parse_from(["collist", "a.json", "b.json"]).is_err());
}

#[test]
fn no_args_uses_default_collection() {
    let (path, opts) = parse(&["collist"]).resolve(CollistConfig::default());
    assert_eq!(path, PathBuf::from(DEFAULT_COLLECTION_PATH));
    assert_eq!(opts, ListOptions::default());
}

#[test]
fn path_argument_overrides_config() {
    let cfg = CollistConfig {
        collection_path: PathBuf::from("configured.json"),
        show_methods: true,
    };
    let (path, opts) = parse(&["collist", "given.json"]).resolve(cfg);
    assert_eq!(path, PathBuf::from("given.json"));
    assert!(opts.show_methods);
    assert!(!opts.summary);
}

#[test]
fn no_methods_overrides_config() {
    let cfg = CollistConfig {
        collection_path: PathBuf::from(DEFAULT_COLLECTION_PATH),
        show_methods: true,
    };
    let (_, opts) = parse(&["collist", "--no-methods"]).resolve(cfg);
    assert!(!opts.show_methods);
}

#[test]
fn cli_parse_methods_conflicts_with_no_methods() {
    assert!(crate::cli::Cli::try_parse_from(["collist", "--methods", "--no-methods"]).is_err());
}
