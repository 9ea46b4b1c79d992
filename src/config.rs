//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/btviz/btviz.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `BTVIZ_*` prefix
//!
//! Command line flags are applied on top by the CLI.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ApplicationError;
use crate::domain::NullPolicy;

/// Default replay cadence.
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

/// Unified configuration for btviz.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Milliseconds between replay steps
    pub interval_ms: u64,
    /// Keep `null` slots when building (classic level-order) or drop them
    pub null_policy: NullPolicy,
    /// Treat unparseable values as null instead of failing
    pub lenient: bool,
    /// Colored terminal output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            null_policy: NullPolicy::default(),
            lenient: false,
            color: true,
        }
    }
}

/// Raw settings for intermediate parsing (None = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub interval_ms: Option<u64>,
    pub null_policy: Option<NullPolicy>,
    pub lenient: Option<bool>,
    pub color: Option<bool>,
}

/// Get the XDG config directory for btviz.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "btviz").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("btviz.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Read one `BTVIZ_*` key. Unset is `None`; a value of the wrong type is an error.
fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> Result<Option<T>, ApplicationError> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => {
            let var = format!("BTVIZ_{}", key.to_uppercase());
            warn!("invalid {}: {}", var, e);
            Err(ApplicationError::Config {
                message: format!("{}: {}", var, e),
            })
        }
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            interval_ms: overlay.interval_ms.unwrap_or(self.interval_ms),
            null_policy: overlay.null_policy.unwrap_or(self.null_policy),
            lenient: overlay.lenient.unwrap_or(self.lenient),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file; unlike the global file it must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = explicit {
            debug!("loading config {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply BTVIZ_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("BTVIZ").try_parsing(true))
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value::<u64>(&config, "interval_ms")? {
            settings.interval_ms = val;
        }
        if let Some(val) = env_value::<NullPolicy>(&config, "null_policy")? {
            settings.null_policy = val;
        }
        if let Some(val) = env_value::<bool>(&config, "lenient")? {
            settings.lenient = val;
        }
        if let Some(val) = env_value::<bool>(&config, "color")? {
            settings.color = val;
        }

        Ok(settings)
    }

    /// Render as TOML (for `config show`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_base_for_unspecified_fields() {
        let base = Settings::default();
        let overlay = RawSettings {
            interval_ms: Some(250),
            ..RawSettings::default()
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.interval_ms, 250);
        assert_eq!(merged.null_policy, NullPolicy::Preserve);
        assert!(merged.color);
    }

    #[test]
    fn settings_toml_round_trips() {
        let settings = Settings {
            null_policy: NullPolicy::Drop,
            ..Settings::default()
        };
        let text = settings.to_toml().unwrap();
        assert!(text.contains("null_policy = \"drop\""), "{}", text);
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
