//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Project config (eli5.toml in the working directory)
//! 3. Environment variables (ELI5_* prefix)
//!
//! A key absent from every layer falls back to its hard-coded default; the
//! environment variable name is the key with separators replaced by `_` and
//! upper-cased (e.g. `ELI5_OPENAI_MODEL` -> `openai.model`).

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::types::{Eli5Error, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with the full resolution chain:
    /// defaults → project file → env vars
    pub fn load() -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let project_path = Self::project_config_path();
        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        figment = figment.merge(Env::prefixed("ELI5_").split('_').lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| Eli5Error::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| Eli5Error::Config(format!("Configuration error: {}", e)))
    }

    /// Get path to the project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from("eli5.toml")
    }

    /// Show config file path
    pub fn show_path() {
        let project = Self::project_config_path();
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("Configuration paths:");
        println!();
        println!("  Project: {} {}", exists, project.display());
        println!("  Env:     ELI5_* variables (e.g. ELI5_API_KEY)");
    }

    /// Show current effective configuration
    pub fn show_config(as_json: bool) -> Result<()> {
        let config = Self::load()?;

        if as_json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(&config).map_err(|e| Eli5Error::Config(e.to_string()))?
            );
        }

        Ok(())
    }
}
