use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Collection read when no path is given on the command line.
pub const DEFAULT_COLLECTION_PATH: &str = "Royal Badminton Club.postman_collection.json";

fn default_collection_path() -> PathBuf {
    PathBuf::from(DEFAULT_COLLECTION_PATH)
}

/// Global configuration loaded from `~/.config/collist/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollistConfig {
    /// Collection file to list when none is passed. Relative paths resolve
    /// against the current directory.
    #[serde(default = "default_collection_path")]
    pub collection_path: PathBuf,
    /// Prefix each line with the request's HTTP method.
    #[serde(default)]
    pub show_methods: bool,
}

impl Default for CollistConfig {
    fn default() -> Self {
        Self {
            collection_path: default_collection_path(),
            show_methods: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("collist")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CollistConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<CollistConfig> {
    if !path.exists() {
        let default_cfg = CollistConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("write default config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: CollistConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
