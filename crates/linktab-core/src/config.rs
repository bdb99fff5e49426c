use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::extract::{ExtractConfig, DEFAULT_PRIMARY_LIST_KEY, DEFAULT_URL_KEY_IN_ITEM};

/// Global configuration loaded from `~/.config/linktab/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinktabConfig {
    /// Top-level key whose value is the list of records.
    pub primary_list_key: String,
    /// Key inside each record that holds the URL to open.
    pub url_key_in_item: String,
}

impl Default for LinktabConfig {
    fn default() -> Self {
        Self {
            primary_list_key: DEFAULT_PRIMARY_LIST_KEY.to_string(),
            url_key_in_item: DEFAULT_URL_KEY_IN_ITEM.to_string(),
        }
    }
}

impl LinktabConfig {
    pub fn extract_config(&self) -> ExtractConfig {
        ExtractConfig {
            primary_list_key: self.primary_list_key.clone(),
            url_key_in_item: self.url_key_in_item.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linktab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
///
/// Running the tool with a path therefore writes `~/.config/linktab/config.toml`
/// (or `$XDG_CONFIG_HOME/linktab/config.toml`) on first use.
pub fn load_or_init() -> Result<LinktabConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<LinktabConfig> {
    if !path.exists() {
        let default_cfg = LinktabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LinktabConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
