//! Configuration settings for doc-codegen

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use super::defaults;
use crate::descriptor::{Level, Visibility};
use crate::error::{DocGenError, Result};

/// What to do when an element already carries a doc comment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerateMode {
    /// Regenerate over the existing comment
    #[default]
    Replace,
    /// Skip elements that already have one
    Keep,
}

/// Immutable configuration snapshot for one generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Element levels eligible for generation
    #[serde(default = "default_enabled_levels")]
    pub enabled_levels: BTreeSet<Level>,

    /// Whether methods that override a super method are documented
    #[serde(default = "default_document_overridden_methods")]
    pub document_overridden_methods: bool,

    /// Visibilities eligible for generation
    #[serde(default = "default_visibilities")]
    pub visibilities: BTreeSet<Visibility>,

    /// Existing-comment policy
    #[serde(default)]
    pub mode: GenerateMode,
}

// Default value functions for serde
fn default_enabled_levels() -> BTreeSet<Level> {
    defaults::enabled_levels()
}
fn default_document_overridden_methods() -> bool {
    defaults::DOCUMENT_OVERRIDDEN_METHODS
}
fn default_visibilities() -> BTreeSet<Visibility> {
    defaults::visibilities()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            enabled_levels: default_enabled_levels(),
            document_overridden_methods: default_document_overridden_methods(),
            visibilities: default_visibilities(),
            mode: GenerateMode::default(),
        }
    }
}

impl GenerationConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GenerationConfig = toml::from_str(&content).map_err(|e| {
            DocGenError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Load configuration using config-rs (file + environment variables)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from config file if specified
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        } else {
            // Try default locations
            builder = builder.add_source(File::with_name("doc-codegen").required(false));
        }

        // Override with environment variables (DOC_CODEGEN_*)
        builder = builder.add_source(Environment::with_prefix("DOC_CODEGEN").separator("__"));

        let config: GenerationConfig = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled_levels.is_empty() {
            return Err(DocGenError::ConfigError(
                "enabled_levels must not be empty".into(),
            ));
        }

        if self.visibilities.is_empty() {
            return Err(DocGenError::ConfigError(
                "visibilities must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Check whether a level is enabled
    pub fn is_level_enabled(&self, level: Level) -> bool {
        self.enabled_levels.contains(&level)
    }
}
