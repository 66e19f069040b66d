use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use valscore_scoring::DEFAULT_TRIM_FRACTION;

use crate::error::{HarnessError, Result};

pub const CONFIG_FILE_NAME: &str = "valscore.toml";
pub const DEFAULT_EXTENSION: &str = "json";

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub fixtures: FixturesConfig,
    /// Directory of the file this config was loaded from; relative paths resolve against it.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScoringConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim_fraction: Option<f64>,
    /// Path to a JSON weight map; `~` is expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            trim_fraction: Some(DEFAULT_TRIM_FRACTION),
            weights: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FixturesConfig {
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self { extension: default_extension() }
    }
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
        let mut cfg: Config = toml::from_str(&s).map_err(|source| HarnessError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.base_dir = path.parent().map(Path::to_path_buf);
        Ok(cfg)
    }

    /// Like `load_from`, but a missing file yields `None`.
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| HarnessError::io(parent, e))?;
        }
        let s = toml::to_string_pretty(self)?;
        std::fs::write(path, s).map_err(|e| HarnessError::io(path, e))?;
        Ok(())
    }

    /// Weight map path with `~` expanded; relative paths are taken from the config file's directory.
    pub fn weights_path(&self) -> Option<PathBuf> {
        let w = PathBuf::from(shellexpand::tilde(self.scoring.weights.as_deref()?).into_owned());
        match &self.base_dir {
            Some(base) if w.is_relative() => Some(base.join(w)),
            _ => Some(w),
        }
    }

    pub fn config_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }
}
