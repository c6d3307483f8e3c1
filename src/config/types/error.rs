//! Configuration error types.

use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config mapping error: {0}")]
    Json(#[from] serde_json::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Invalid(ConfigDiagnostics),
}

// ============================================================================
// InvalidValue
// ============================================================================

/// A value that parses but that a renderer or cache layer cannot use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidValue {
    /// `styles_location` without a trailing `/`.
    StylesLocationWithoutSlash(String),
    /// Empty or whitespace-only `cache_key`.
    BlankCacheKey(String),
    /// `max_size = 0`.
    ZeroMaxSize,
}

impl InvalidValue {
    /// Config key holding the bad value.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::StylesLocationWithoutSlash(_) => "styles_location",
            Self::BlankCacheKey(_) => "cache_key",
            Self::ZeroMaxSize => "max_size",
        }
    }

    /// Suggested replacement.
    pub fn hint(&self) -> String {
        match self {
            Self::StylesLocationWithoutSlash(sloc) => format!("styles_location = \"{sloc}/\""),
            Self::BlankCacheKey(_) => "cache_key = \"sitemap.\"".to_owned(),
            Self::ZeroMaxSize => "remove `max_size` to use the renderer default".to_owned(),
        }
    }
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.key().cyan())?;
        match self {
            Self::StylesLocationWithoutSlash(sloc) => {
                write!(f, "`{sloc}` must end with `/`")?;
            }
            Self::BlankCacheKey(key) => write!(f, "`{key:?}` is blank")?,
            Self::ZeroMaxSize => write!(f, "`0` would drop every item")?,
        }
        write!(f, "\n  {} {}", "hint:".yellow(), self.hint())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Every invalid value found in one config, in key order.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<InvalidValue>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, invalid: InvalidValue) {
        self.errors.push(invalid);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[InvalidValue] {
        &self.errors
    }

    /// Returns Err if any value was invalid.
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            "invalid sitemap config".red().bold(),
            self.errors.len()
        )?;
        for invalid in &self.errors {
            write!(f, "\n{} {invalid}", "→".red())?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_error_names_path() {
        let io_err = ConfigError::Io(
            PathBuf::from("sitemap.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert!(io_err.to_string().contains("sitemap.toml"));
    }

    #[test]
    fn test_invalid_value_names_offending_value() {
        let invalid = InvalidValue::StylesLocationWithoutSlash("/xsl".into());
        let display = invalid.to_string();

        assert_eq!(invalid.key(), "styles_location");
        assert!(display.contains("`/xsl` must end with `/`"));
        assert!(display.contains("styles_location = \"/xsl/\""));

        let display = InvalidValue::BlankCacheKey("  ".into()).to_string();
        assert!(display.contains("`\"  \"` is blank"));
    }

    #[test]
    fn test_diagnostics_into_result() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());

        let mut diag = ConfigDiagnostics::new();
        diag.push(InvalidValue::ZeroMaxSize);
        let err = diag.into_result().unwrap_err();

        assert_eq!(err.len(), 1);
        assert_eq!(err.errors(), [InvalidValue::ZeroMaxSize]);
    }

    #[test]
    fn test_diagnostics_display_lists_every_key() {
        let mut diag = ConfigDiagnostics::new();
        diag.push(InvalidValue::BlankCacheKey(String::new()));
        diag.push(InvalidValue::ZeroMaxSize);

        let display = ConfigError::Invalid(diag).to_string();
        assert!(display.contains("(2)"));
        assert!(display.contains("cache_key"));
        assert!(display.contains("max_size"));
        assert!(display.contains("would drop every item"));
    }
}
