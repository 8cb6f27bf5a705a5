//! Workspace umbrella crate for featnorm.
//!
//! This crate stitches ingest, normalization and rendering together so
//! callers can turn Gherkin text into normalized Gherkin text with a single
//! call.
//!
//! ```
//! use featnorm::{PipelineConfig, process_text};
//!
//! let input = "\
//! Feature: Cart
//!   Scenario: add
//!     Given a signed in shopper
//!     When the shopper clicks add
//!   Scenario: remove
//!     Given a signed in shopper
//!     When the shopper clicks remove
//! ";
//!
//! let output = process_text(input, &PipelineConfig::default());
//! assert!(output.starts_with("Feature: Cart\n\nBackground:\n  Given a signed in shopper\n"));
//! ```

mod config;

pub use crate::config::{ConfigLoadError, PipelineConfig};
pub use ingest::{
    IngestConfig, IngestError, ingest, ingest_with_config, parse_feature,
    parse_feature_with_config,
};
pub use model::{ExampleRow, ExampleTable, Feature, Scenario, ScenarioOutline, Step, StepRole, Tag};
pub use normalize::{
    CommonSteps, CountPolicy, NormalizeConfig, RolePolicy, classify_role, find_common_steps,
    normalize, normalize_with_config,
};
pub use render::{RenderConfig, render, render_with_config};

use std::error::Error;
use std::fmt;
use std::time::Instant;

use tracing::debug;

/// Errors that can occur while processing text through the strict pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    Ingest(IngestError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Ingest(err) => write!(f, "ingest failure: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Ingest(err) => Some(err),
        }
    }
}

impl From<IngestError> for PipelineError {
    fn from(value: IngestError) -> Self {
        PipelineError::Ingest(value)
    }
}

/// Runs ingest, normalize and render over `text`.
///
/// Unparseable input is not an error here: it yields an empty feature,
/// which renders as `"Feature:\n\n"`.
pub fn process_text(text: &str, cfg: &PipelineConfig) -> String {
    let feature = ingest_with_config(text, &cfg.ingest);
    normalize_and_render(feature, cfg)
}

/// Like [`process_text`], but surfaces parse and size errors.
pub fn process_text_strict(text: &str, cfg: &PipelineConfig) -> Result<String, PipelineError> {
    let feature = parse_feature_with_config(text, &cfg.ingest)?;
    Ok(normalize_and_render(feature, cfg))
}

fn normalize_and_render(feature: Feature, cfg: &PipelineConfig) -> String {
    let start = Instant::now();
    let steps_in = feature.step_count();
    let normalized = normalize_with_config(feature, &cfg.normalize);
    let output = render_with_config(&normalized, &cfg.render);
    debug!(
        steps_in,
        background_steps = normalized.background.len(),
        output_bytes = output.len(),
        elapsed_micros = start.elapsed().as_micros(),
        "pipeline.processed"
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_renders_bare_feature_header() {
        assert_eq!(
            process_text("no keywords here", &PipelineConfig::default()),
            "Feature:\n\n"
        );
    }

    #[test]
    fn strict_pipeline_reports_parse_errors() {
        let err = process_text_strict("no keywords here", &PipelineConfig::default()).unwrap_err();
        assert!(matches!(err, PipelineError::Ingest(IngestError::Parse(_))));
        assert!(err.to_string().starts_with("ingest failure:"));
        assert!(err.source().is_some());
    }

    #[test]
    fn strict_pipeline_enforces_input_limit() {
        let cfg = PipelineConfig {
            ingest: IngestConfig {
                max_input_bytes: Some(4),
            },
            ..Default::default()
        };
        let err = process_text_strict("Feature: big\n", &cfg).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Ingest(IngestError::InputTooLarge { limit: 4, .. })
        ));
        assert_eq!(process_text("Feature: big\n", &cfg), "Feature:\n\n");
    }
}
