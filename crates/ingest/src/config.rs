//! Configuration types for the ingest stage.
//!
//! ```rust
//! use ingest::IngestConfig;
//!
//! let config = IngestConfig::default();
//! config.validate().expect("default config is valid");
//! assert!(config.max_input_bytes.is_none());
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Runtime configuration for parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Maximum input length in bytes.
    ///
    /// Inputs longer than this are rejected with
    /// [`IngestError::InputTooLarge`](crate::IngestError::InputTooLarge)
    /// before the parser sees them.
    ///
    /// Default: `None` (unlimited)
    #[serde(default)]
    pub max_input_bytes: Option<usize>,
}

impl IngestConfig {
    /// Checks the configuration for values that can never accept input.
    ///
    /// ```rust
    /// use ingest::{ConfigError, IngestConfig};
    ///
    /// let config = IngestConfig { max_input_bytes: Some(0) };
    /// assert_eq!(config.validate(), Err(ConfigError::ZeroInputLimit));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_bytes == Some(0) {
            return Err(ConfigError::ZeroInputLimit);
        }
        Ok(())
    }
}

/// Errors that can occur when validating an [`IngestConfig`].
///
/// These are start-up issues, not request-time failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("max_input_bytes must be greater than zero")]
    ZeroInputLimit,
}
