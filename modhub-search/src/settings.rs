//! Engine settings: scoring weights and query defaults.
//!
//! Settings live in `~/.config/modhub/settings.toml`:
//!
//! ```toml
//! [scoring]
//! exact_name = 100
//! per_tag = 5
//!
//! [query]
//! default_limit = 20
//! facet_mode = "all"
//! ```
//!
//! Every field is optional; anything left out keeps its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::facet::FacetMode;
use crate::params::DEFAULT_LIMIT;
use crate::score::ScoringWeights;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySettings {
    pub default_limit: usize,
    pub facet_mode: FacetMode,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            facet_mode: FacetMode::All,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scoring: ScoringWeights,
    pub query: QuerySettings,
}

/// Canonical path to the settings file: `~/.config/modhub/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("modhub").join("settings.toml")
}

impl Settings {
    /// Load from [`settings_path`]; a missing file gives the defaults.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let mut settings: Settings = toml::from_str(&contents).map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;
        if settings.query.default_limit == 0 {
            log::warn!(
                "default_limit = 0 in {} is not usable, using {}",
                path.display(),
                DEFAULT_LIMIT
            );
            settings.query.default_limit = DEFAULT_LIMIT;
        }
        Ok(settings)
    }

    /// Pretty-printed TOML, for display.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
