use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::FetchOptions;
use crate::source::DEFAULT_DB_URL;

fn default_source_url() -> String {
    DEFAULT_DB_URL.to_string()
}

/// Global configuration loaded from `~/.config/mimedb/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MimeDbConfig {
    /// URL of the mime-db JSON document fetched when no table is cached.
    #[serde(default = "default_source_url")]
    pub source_url: String,
    /// Local database file loaded at startup instead of waiting for the remote fetch.
    #[serde(default)]
    pub offline_db: Option<PathBuf>,
    /// Connect timeout for the remote fetch in seconds (None = no limit).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout for the remote fetch in seconds (None = no limit).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for MimeDbConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            offline_db: None,
            connect_timeout_secs: None,
            timeout_secs: None,
        }
    }
}

impl MimeDbConfig {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mimedb")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MimeDbConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<MimeDbConfig> {
    if !path.exists() {
        let default_cfg = MimeDbConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg: MimeDbConfig =
        toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}
