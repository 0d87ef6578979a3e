//! Configuration management for crudgen
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `CRUDGEN_` prefix, `__` for nesting)
//! 2. `./crudgen.toml`
//! 3. `~/.config/crudgen/config.toml` (user config, XDG)
//! 4. `/etc/crudgen/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! [store]
//! advance_next_id = false
//! missing_record = "unguarded"
//! ```

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What the generated `update` does when `read` finds nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingRecordPolicy {
    /// Assign straight onto the lookup result
    #[default]
    Unguarded,
    /// Return `None` before any assignment
    ReturnNone,
}

/// Settings that shape the generated store type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Emit `self.next_id += 1` in `create`
    pub advance_next_id: bool,

    /// Behavior of `update` on a missing record
    pub missing_record: MissingRecordPolicy,
}

/// Top-level crudgen configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Store type settings
    pub store: StoreSettings,
}

impl GeneratorConfig {
    /// Load configuration from the standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file exists but cannot be read or parsed
    /// - An environment override has the wrong type
    pub fn load() -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        let system_config = PathBuf::from("/etc/crudgen/config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from("./crudgen.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        figment = figment.merge(Env::prefixed("CRUDGEN_").split("__").lowercase(true));

        let config: Self = figment.extract()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file leaves the defaults in place. Environment variables
    /// still override the file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - The file contains invalid TOML or values of the wrong type
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path))
            .merge(Env::prefixed("CRUDGEN_").split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// Get the recommended XDG config path
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./crudgen.toml"),
            |config_dir| config_dir.join("crudgen").join("config.toml"),
        )
    }
}
