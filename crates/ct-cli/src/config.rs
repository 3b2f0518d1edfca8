//! Configuration loading and management.

use std::path::{Path, PathBuf};

use anyhow::Context;
use ct_core::HeuristicConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the JSONL event store.
    pub events_path: PathBuf,

    /// Gap heuristic overrides.
    #[serde(default)]
    pub heuristic: HeuristicConfig,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            events_path: data_dir.join("events.jsonl"),
            heuristic: HeuristicConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    ///
    /// Heuristic settings outside their allowed range are rejected.
    pub fn load_from(config_path: Option<&Path>) -> anyhow::Result<Self> {
        let config: Self = Self::figment(config_path).extract()?;
        config
            .heuristic
            .validate()
            .context("invalid [heuristic] configuration")?;
        Ok(config)
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (CT_*, nested keys split on "__")
        figment.merge(Env::prefixed("CT_").split("__"))
    }
}

/// Returns the platform-specific config directory for ct.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ct"))
}

/// Returns the platform-specific data directory for ct.
///
/// On Linux: `~/.local/share/ct`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("ct"))
}
