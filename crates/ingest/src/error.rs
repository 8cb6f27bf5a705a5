//! Error types produced by the ingest crate.
//!
//! | Error | Description |
//! |-------|-------------|
//! | [`Parse`](IngestError::Parse) | Input is not valid Gherkin |
//! | [`InputTooLarge`](IngestError::InputTooLarge) | Input exceeds [`IngestConfig::max_input_bytes`](crate::IngestConfig::max_input_bytes) |
//!
//! The fail-soft [`ingest`](crate::ingest) entry point never surfaces these;
//! they are returned by [`parse_feature`](crate::parse_feature) and
//! [`parse_feature_with_config`](crate::parse_feature_with_config).
use thiserror::Error;

/// Errors that can occur while turning text into a [`Feature`](model::Feature).
///
/// ```rust
/// use ingest::IngestError;
///
/// let err = IngestError::InputTooLarge { size: 12, limit: 10 };
/// assert_eq!(err.to_string(), "input of 12 bytes exceeds limit of 10 bytes");
/// assert_eq!(err.http_status_code(), 413);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IngestError {
    /// The Gherkin parser rejected the input. Carries the parser's message.
    #[error("gherkin parse error: {0}")]
    Parse(String),

    #[error("input of {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}

impl IngestError {
    /// Suggested HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            IngestError::InputTooLarge { .. } => 413,
            IngestError::Parse(_) => 400,
        }
    }
}
