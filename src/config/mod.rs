//! Sitemap configuration management for `sitemap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── types/         # Utility types
//! │   └── error      # ConfigError, ConfigDiagnostics, InvalidValue
//! ├── util           # Config file discovery
//! └── mod.rs         # SitemapConfig (this file)
//! ```
//!
//! # Keys
//!
//! | Key               | Type               | Default                    |
//! |-------------------|--------------------|----------------------------|
//! | `use_cache`       | bool               | `false`                    |
//! | `cache_key`       | string             | `"laravel-sitemap."`       |
//! | `cache_duration`  | seconds or date    | `3600`                     |
//! | `escaping`        | bool               | `true`                     |
//! | `use_limit_size`  | bool               | `false`                    |
//! | `use_styles`      | bool               | `true`                     |
//! | `styles_location` | string             | `"/vendor/sitemap/styles/"`|
//! | `max_size`        | integer            | unset                      |
//! | `testing`         | bool               | `false`                    |
//! | `use_gzip`        | bool               | `false`                    |
//!
//! Every key is optional. A missing key leaves the model default in place,
//! unknown keys are ignored.

pub mod types;
mod util;

pub use types::{ConfigDiagnostics, ConfigError, InvalidValue};
pub use util::{find_config_file, find_config_file_from};

use crate::{debug, log, model::CacheDuration};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Default config file name used by [`SitemapConfig::discover`].
pub const DEFAULT_CONFIG_NAME: &str = "sitemap.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Sitemap options as supplied by the host application.
///
/// `None` means "key absent": the model keeps its built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    pub use_cache: Option<bool>,
    pub cache_key: Option<String>,
    pub cache_duration: Option<CacheDuration>,
    pub escaping: Option<bool>,
    pub use_limit_size: Option<bool>,
    pub use_styles: Option<bool>,
    pub styles_location: Option<String>,
    pub max_size: Option<usize>,
    pub testing: Option<bool>,
    pub use_gzip: Option<bool>,
}

impl SitemapConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Build configuration from a JSON-like mapping.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(Self::from_json_with_ignored(value)?.0)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Deserialize a JSON-like mapping, collecting any unknown fields.
    pub fn from_json_with_ignored(
        value: serde_json::Value,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let config = serde_ignored::deserialize(value, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Load and validate configuration from a file.
    ///
    /// Unknown keys are reported as warnings and otherwise ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.validate().map_err(ConfigError::Invalid)?;

        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Search upward from the current directory for `config_name` and load it.
    ///
    /// Falls back to the default configuration when no file is found.
    pub fn discover(config_name: &Path) -> Result<Self> {
        match find_config_file(config_name) {
            Some(path) => Self::load(&path),
            None => {
                debug!("config"; "no {} found, using defaults", config_name.display());
                Ok(Self::default())
            }
        }
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    /// Validate values at the loading boundary.
    ///
    /// The model itself accepts anything; this catches values a renderer
    /// or cache layer could not use.
    pub fn validate(&self) -> Result<(), ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();

        if let Some(sloc) = &self.styles_location
            && !sloc.ends_with('/')
        {
            diag.push(InvalidValue::StylesLocationWithoutSlash(sloc.clone()));
        }

        if let Some(key) = &self.cache_key
            && key.trim().is_empty()
        {
            diag.push(InvalidValue::BlankCacheKey(key.clone()));
        }

        if self.max_size == Some(0) {
            diag.push(InvalidValue::ZeroMaxSize);
        }

        diag.into_result()
    }
}

// ============================================================================
// tests
// ============================================================================
