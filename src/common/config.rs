//! Configuration file handling

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::paths::config_path;
use super::{Error, Result};
use crate::fib::MAX_INDEX;

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Input limits
    #[serde(default)]
    pub limits: Limits,

    /// Demo run settings
    #[serde(default)]
    pub demo: DemoConfig,
}

/// How a computed sequence is rendered
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `[0, 1, 1, 2]`
    #[default]
    Text,
    /// JSON array
    Json,
}

/// Output settings
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Default format for `fib sequence`
    #[serde(default)]
    pub format: OutputFormat,
}

/// Upper bounds on accepted input
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Largest count accepted by `sequence` and `print`
    #[serde(default = "default_max_count")]
    pub max_count: u64,

    /// Largest index accepted by `nth`
    #[serde(default = "default_max_nth")]
    pub max_nth: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_count: default_max_count(),
            max_nth: default_max_nth(),
        }
    }
}

fn default_max_count() -> u64 {
    u64::from(MAX_INDEX) + 1
}
fn default_max_nth() -> u64 {
    40
}

/// Demo run settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of terms built and printed
    #[serde(default = "default_demo_count")]
    pub count: u64,

    /// Index computed by naive recursion
    #[serde(default = "default_demo_index")]
    pub index: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            count: default_demo_count(),
            index: default_demo_index(),
        }
    }
}

fn default_demo_count() -> u64 {
    20
}
fn default_demo_index() -> u64 {
    10
}

impl Config {
    /// Load configuration from `path`, or from the default config file
    ///
    /// An explicit path must exist. The default file is optional and falls
    /// back to the built-in defaults when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load and parse a specific configuration file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Path the configuration would be read from
    pub fn resolved_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit.map(Path::to_path_buf).or_else(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.limits.max_count, 94);
        assert_eq!(config.limits.max_nth, 40);
        assert_eq!(config.demo.count, 20);
        assert_eq!(config.demo.index, 10);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
            [output]
            format = "json"

            [limits]
            max_nth = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.limits.max_nth, 25);
        assert_eq!(config.limits.max_count, 94);
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::parse("[output]\nformat = \"yaml\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.demo.count = 5;
        let text = config.to_toml().unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_path() {
        let path = std::env::temp_dir().join("fibonacci-cli-no-such-config.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
