//! # regeng-config
//!
//! Layered configuration loading for the RegEngine client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`REGENGINE_*` prefix, `__` as separator)
//! 2. Project-level `.regengine/config.toml`
//! 3. User-level `~/.config/regengine/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `REGENGINE_SERVICES__ADMIN_PORT` -> `services.admin_port`,
//! `REGENGINE_AUTH__ADMIN_KEY` -> `auth.admin_key`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use regeng_config::{RegEngineConfig, Service};
//!
//! let config = RegEngineConfig::load_with_dotenv().expect("config");
//! println!("compliance at {}", config.services.url(Service::Compliance));
//! ```

mod auth;
mod error;
mod services;

pub use auth::AuthConfig;
pub use error::ConfigError;
pub use services::{Service, ServicesConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegEngineConfig {
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl RegEngineConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI and
    /// tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".regengine/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("REGENGINE_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("regengine").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_uses_stated_defaults() {
        let config = RegEngineConfig::default();
        assert_eq!(config.services.base_url, "http://localhost");
        assert_eq!(config.services.admin_port, 8400);
        assert_eq!(config.services.ingestion_port, 8000);
        assert_eq!(config.services.opportunity_port, 8300);
        assert_eq!(config.services.compliance_port, 8500);
        assert!(!config.auth.has_admin_key());
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = RegEngineConfig::figment();
        let config: RegEngineConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.services.url(Service::Admin), "http://localhost:8400");
    }
}
