use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::{ReportVariant, FAST_FORMULA_REPORT_PATH, LOOKUP_REPORT_PATH};

/// Catalog paths of the two reports (`[reports]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportPaths {
    pub lookup: String,
    pub fast_formula: String,
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self {
            lookup: LOOKUP_REPORT_PATH.to_string(),
            fast_formula: FAST_FORMULA_REPORT_PATH.to_string(),
        }
    }
}

impl ReportPaths {
    pub fn path_for(&self, variant: ReportVariant) -> &str {
        match variant {
            ReportVariant::Lookup => &self.lookup,
            ReportVariant::FastFormula => &self.fast_formula,
        }
    }
}

/// Table rendering options (`[display]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Cells longer than this many characters are cut in table output (0 = never).
    pub max_cell_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { max_cell_width: 80 }
    }
}

/// Global configuration loaded from `~/.config/intelliscan/config.toml`.
///
/// Passwords are never read from or written to this file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntelliscanConfig {
    /// Default environment base URL, used when `--url` is not given.
    #[serde(default)]
    pub environment_url: Option<String>,
    /// Default username, used when `--username` is not given.
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub reports: ReportPaths,
    #[serde(default)]
    pub display: DisplayConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("intelliscan")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<IntelliscanConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<IntelliscanConfig> {
    if !path.exists() {
        let default_cfg = IntelliscanConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: IntelliscanConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
