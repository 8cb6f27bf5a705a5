//! YAML configuration file support for the featnorm pipeline.
//!
//! One file configures every stage. All stage sections are optional and fall
//! back to their defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # featnorm pipeline configuration
//! version: "1"
//! name: "ci"
//!
//! ingest:
//!   max_input_bytes: 1048576
//!
//! normalize:
//!   count_policy: per_scenario    # or per_occurrence
//!   role_policy: preserve         # or reclassify
//!
//! render:
//!   tags_above_header: false
//! ```

use std::fs;
use std::path::Path;

use ingest::IngestConfig;
use normalize::NormalizeConfig;
use render::RenderConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for the whole pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PipelineConfig {
    /// Configuration format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub ingest: IngestConfig,

    #[serde(default)]
    pub normalize: NormalizeConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

impl PipelineConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PipelineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.ingest
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("ingest: {err}")))?;

        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            name: None,
            ingest: IngestConfig::default(),
            normalize: NormalizeConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

fn default_version() -> String {
    "1".to_string()
}
