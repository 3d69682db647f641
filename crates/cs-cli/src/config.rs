//! Configuration loading and management.

use std::path::{Path, PathBuf};

use cs_core::ScheduleConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Session bounds, start times, and the stuck policy.
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

impl Config {
    /// Loads configuration, optionally merging a specific file over the
    /// default location. Environment variables take precedence over both.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (CONFSCHED_SCHEDULE__ON_STUCK, ...)
        figment = figment.merge(Env::prefixed("CONFSCHED_").split("__"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for confsched.
///
/// On Linux: `~/.config/confsched`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("confsched"))
}
