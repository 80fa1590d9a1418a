//! Configuration file loading and management.
//!
//! Loads configuration from:
//! - Linux/macOS: `~/.config/prodcat/config.toml`
//! - Windows: `%APPDATA%/prodcat/config.toml`
//!
//! ## Precedence
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. CLI flags
//! 2. Environment variables
//! 3. Config file
//! 4. Built-in defaults
//!
//! ## Environment Variables
//!
//! - `PRODCAT_URL`: Catalog URL to fetch
//! - `PRODCAT_OUTPUT`: Output file path
//! - `PRODCAT_COMPACT`: Write compact JSON (1, true, yes)
//! - `PRODCAT_CONFIG`: Override config file path
//!
//! The fetch timeout and retry bound are contract constants, not
//! configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::paths::AppPaths;
use crate::cli::args::Cli;
use crate::error::{ProdcatError, Result};

/// Environment variable for the catalog URL.
pub const ENV_URL: &str = "PRODCAT_URL";
/// Environment variable for the output file path.
pub const ENV_OUTPUT: &str = "PRODCAT_OUTPUT";
/// Environment variable for compact JSON output.
pub const ENV_COMPACT: &str = "PRODCAT_COMPACT";
/// Environment variable to override the config file path.
pub const ENV_CONFIG: &str = "PRODCAT_CONFIG";

/// Default catalog endpoint.
pub const DEFAULT_URL: &str = "https://fakestoreapi.com/products";
/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "grouped_products.json";

/// On-disk configuration file contents. All keys optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConfigFile {
    /// Catalog URL to fetch.
    pub url: Option<String>,
    /// Output file path.
    pub output: Option<PathBuf>,
    /// Write compact JSON.
    pub compact: Option<bool>,
}

impl ConfigFile {
    /// Load the config file at `path`. A missing file yields defaults; a
    /// malformed file is an error.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ProdcatError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Fully resolved configuration after merging CLI, env vars, and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Catalog URL to fetch.
    pub url: String,
    /// Output file path.
    pub output: PathBuf,
    /// Write compact JSON.
    pub compact: bool,
}

impl ResolvedConfig {
    /// Resolve final configuration from CLI args, environment variables,
    /// and the config file.
    ///
    /// # Errors
    ///
    /// Returns error if an explicitly named config file is missing or
    /// malformed.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let explicit_path = cli
            .config
            .clone()
            .or_else(|| env_string(ENV_CONFIG).map(PathBuf::from));

        let file = if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(ProdcatError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            ConfigFile::load(&path)?
        } else {
            ConfigFile::load(&AppPaths::new().config_file())?
        };

        let url = cli
            .url
            .clone()
            .or_else(|| env_string(ENV_URL))
            .or(file.url)
            .unwrap_or_else(|| DEFAULT_URL.to_string());

        let output = cli
            .output
            .clone()
            .or_else(|| env_string(ENV_OUTPUT).map(PathBuf::from))
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let compact = if cli.compact {
            true
        } else if let Some(value) = env_bool(ENV_COMPACT) {
            value
        } else {
            file.compact.unwrap_or(false)
        };

        Ok(Self {
            url,
            output,
            compact,
        })
    }
}

/// Read a non-empty, trimmed env var.
fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read a boolean env var (1, true, yes enable; 0, false, no disable).
fn env_bool(key: &str) -> Option<bool> {
    env_string(key).and_then(|value| match value.to_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    })
}
