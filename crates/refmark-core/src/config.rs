//! Render settings (`refmark.toml`) parsing and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::{Emit, DEFAULT_MAX_DEPTH, UNTITLED_GROUP};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "refmark.toml";

/// Errors that can occur when working with configuration files.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid max-depth {0}: top-level members render at depth 2, so it must be at least 2")]
    InvalidMaxDepth(usize),

    #[error("untitled-group cannot be empty")]
    EmptyUntitledGroup,
}

/// The complete refmark.toml file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Rendering settings.
    #[serde(default)]
    pub render: RenderConfig,
}

/// The `[render]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RenderConfig {
    /// Heading used for groups with an empty title.
    #[serde(default = "default_untitled_group")]
    pub untitled_group: String,

    /// Deepest heading level allowed before rendering fails.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Which group bodies are written out.
    #[serde(default)]
    pub emit: Emit,
}

fn default_untitled_group() -> String {
    UNTITLED_GROUP.to_string()
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            untitled_group: default_untitled_group(),
            max_depth: default_max_depth(),
            emit: Emit::default(),
        }
    }
}

impl Config {
    /// Load a config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a value is out of range.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.render.validate()?;
        Ok(config)
    }
}

impl RenderConfig {
    /// Validate the render settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth < 2 {
            return Err(ConfigError::InvalidMaxDepth(self.max_depth));
        }
        if self.untitled_group.trim().is_empty() {
            return Err(ConfigError::EmptyUntitledGroup);
        }
        Ok(())
    }
}
