//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/menuid/menuid.toml`
//! 3. Local config: a TOML file named by the caller (`--config`)
//! 4. Environment variables: `MENUID_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::domain::{IdManage, DEFAULT_START_ID};

const ENV_PREFIX: &str = "MENUID";

/// Effective settings for menuid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// First top-level id and the suffix of every first child id (default: 10)
    pub start_id: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_id: DEFAULT_START_ID,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub start_id: Option<u64>,
}

/// Get the XDG config directory for menuid.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "menuid").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("menuid.toml"))
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
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

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            start_id: overlay.start_id.unwrap_or(self.start_id),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local` - Optional config file; unlike the global file it must exist
    #[instrument(level = "debug")]
    pub fn load(local: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = local {
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(current, ENV_PREFIX)
    }

    /// Apply `<prefix>_*` environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, prefix: &str) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        match config.get::<u64>("start_id") {
            Ok(val) => settings.start_id = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    /// Render as TOML, the format of the config files.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }

    /// An empty registry using the configured start id.
    pub fn registry(&self) -> IdManage {
        IdManage::with_start_id(self.start_id)
    }
}
