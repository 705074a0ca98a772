//! Animation settings
//!
//! Defaults reproduce the built-in demonstration: half a second between
//! highlights, green highlights over skyblue nodes, starting from node 1.
//! A YAML file may override any subset of the fields.

use crate::animation::Color;
use crate::graph::{NodeId, SAMPLE_START};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_STEP_DELAY_MS: u64 = 500;
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "green";
pub const DEFAULT_NODE_COLOR: &str = "skyblue";

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Settings for a visualization run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Milliseconds between consecutive highlights
    pub step_delay_ms: u64,
    /// Colour applied to each visited node
    pub highlight_color: Color,
    /// Colour every node returns to on reset
    pub default_color: Color,
    /// Node traversals start from
    pub start: NodeId,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            highlight_color: Color::new(DEFAULT_HIGHLIGHT_COLOR),
            default_color: Color::new(DEFAULT_NODE_COLOR),
            start: SAMPLE_START,
        }
    }
}

impl AnimationConfig {
    /// Read settings from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Parse settings from YAML text. Missing fields keep their defaults.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty mapping.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.start.is_positive() {
            return Err(ConfigError::Invalid("start must be a positive node id".into()));
        }
        if self.highlight_color.as_str().trim().is_empty() {
            return Err(ConfigError::Invalid("highlight_color is empty".into()));
        }
        if self.default_color.as_str().trim().is_empty() {
            return Err(ConfigError::Invalid("default_color is empty".into()));
        }
        Ok(())
    }
}
