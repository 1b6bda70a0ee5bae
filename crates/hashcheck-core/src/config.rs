use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::algorithm::HashAlgorithm;

/// Global configuration loaded from `~/.config/hashcheck/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashcheckConfig {
    /// Algorithm selected when none is given on the command line.
    #[serde(default)]
    pub default_algorithm: HashAlgorithm,
    /// Page that share links point at, e.g. `https://example.com/verify.html`.
    /// Without it, `share` prints the bare `#fragment`.
    #[serde(default)]
    pub share_base_url: Option<String>,
}

impl Default for HashcheckConfig {
    fn default() -> Self {
        Self {
            default_algorithm: HashAlgorithm::Sha256,
            share_base_url: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hashcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HashcheckConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<HashcheckConfig> {
    if !path.exists() {
        let default_cfg = HashcheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: HashcheckConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
