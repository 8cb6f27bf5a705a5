//! featnorm ingest layer.
//!
//! This is where Gherkin text enters the pipeline. The grammar itself is
//! handled by the [`gherkin`] crate; we walk its syntax tree and build the
//! plain [`Feature`] model the later stages work on.
//!
//! ## What we do here
//!
//! - **Parse** - hand the text to `gherkin::Feature::parse`
//! - **Split scenarios** - anything with Examples, or an Outline/Template
//!   keyword, becomes a [`ScenarioOutline`](model::ScenarioOutline)
//! - **Keep authored roles** - `Given`/`When`/`Then`/`And`/`But` become a
//!   [`StepRole`](model::StepRole); `*` falls back to the parser's resolved type
//! - **Flatten rules** - rule scenarios join the feature, prefixed with the
//!   rule's background steps
//! - **Log** - `ingest_success` / `ingest_failure` events with timings
//!
//! ## Entry points
//!
//! [`parse_feature`] is strict and returns [`IngestError`] on bad input.
//! [`ingest`] is fail-soft: it logs the error and returns an empty
//! [`Feature`], which renders as a bare `Feature:` header.
//!
//! ```
//! use ingest::parse_feature;
//!
//! let feature = parse_feature(
//!     "Feature: Login\n\n  Scenario: ok\n    Given a user\n    Then it works\n",
//! )
//! .unwrap();
//!
//! assert_eq!(feature.name, "Login");
//! assert_eq!(feature.scenarios[0].steps.len(), 2);
//! ```
use std::time::Instant;

use model::Feature;
use tracing::{info, warn, Level};

mod config;
mod convert;
mod error;

pub use crate::config::{ConfigError, IngestConfig};
pub use crate::error::IngestError;

/// Parses Gherkin text with the default [`IngestConfig`].
pub fn parse_feature(text: &str) -> Result<Feature, IngestError> {
    parse_feature_with_config(text, &IngestConfig::default())
}

/// Parses Gherkin text into a [`Feature`], returning an error when the input
/// is too large or not valid Gherkin.
pub fn parse_feature_with_config(text: &str, cfg: &IngestConfig) -> Result<Feature, IngestError> {
    let start = Instant::now();
    let span = tracing::span!(Level::INFO, "ingest.parse", input_bytes = text.len());
    let _guard = span.enter();

    match parse_inner(text, cfg) {
        Ok(feature) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                feature = %feature.name,
                background_steps = feature.background.len(),
                scenarios = feature.scenarios.len(),
                outlines = feature.outlines.len(),
                elapsed_micros,
                "ingest_success"
            );
            Ok(feature)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "ingest_failure");
            Err(err)
        }
    }
}

fn parse_inner(text: &str, cfg: &IngestConfig) -> Result<Feature, IngestError> {
    if let Some(limit) = cfg.max_input_bytes {
        if text.len() > limit {
            return Err(IngestError::InputTooLarge {
                size: text.len(),
                limit,
            });
        }
    }

    // The grammar expects every line, including the last, to be terminated.
    let parsed = if text.ends_with('\n') {
        gherkin::Feature::parse(text, gherkin::GherkinEnv::default())
    } else {
        gherkin::Feature::parse(format!("{text}\n"), gherkin::GherkinEnv::default())
    }
    .map_err(|err| IngestError::Parse(err.to_string()))?;

    Ok(convert::convert_feature(parsed))
}

/// Fail-soft parse with the default [`IngestConfig`].
///
/// ```
/// let feature = ingest::ingest("this is not gherkin");
/// assert!(feature.is_empty());
/// ```
pub fn ingest(text: &str) -> Feature {
    ingest_with_config(text, &IngestConfig::default())
}

/// Like [`parse_feature_with_config`], but any error yields
/// `Feature::default()`. The error is already logged as `ingest_failure`.
pub fn ingest_with_config(text: &str, cfg: &IngestConfig) -> Feature {
    parse_feature_with_config(text, cfg).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::StepRole;

    #[test]
    fn name_only_feature_is_valid() {
        let feature = parse_feature("Feature: Nothing yet\n").unwrap();
        assert_eq!(feature.name, "Nothing yet");
        assert!(feature.background.is_empty());
        assert!(feature.scenarios.is_empty());
        assert!(feature.outlines.is_empty());
    }

    #[test]
    fn missing_trailing_newline_is_accepted() {
        let feature = parse_feature("Feature: F\n  Scenario: s\n    Given x").unwrap();
        assert_eq!(feature.scenarios[0].steps[0].text, "x");
    }

    #[test]
    fn background_steps_keep_text_only() {
        let feature = parse_feature(
            "Feature: F\n\n  Background:\n    Given a\n    And b\n\n  Scenario: s\n    When c\n",
        )
        .unwrap();
        assert_eq!(feature.background, vec!["a", "b"]);
        assert_eq!(feature.scenarios[0].steps[0].role, Some(StepRole::When));
    }

    #[test]
    fn input_limit_is_enforced() {
        let cfg = IngestConfig {
            max_input_bytes: Some(8),
        };
        let err = parse_feature_with_config("Feature: too long\n", &cfg).unwrap_err();
        assert_eq!(
            err,
            IngestError::InputTooLarge {
                size: 18,
                limit: 8
            }
        );
        assert!(ingest_with_config("Feature: too long\n", &cfg).is_empty());
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = parse_feature("just some words\n").unwrap_err();
        assert!(matches!(err, IngestError::Parse(_)));
        assert_eq!(err.http_status_code(), 400);
    }

    #[test]
    fn fail_soft_ingest_returns_default() {
        assert_eq!(ingest(""), Feature::default());
        assert_eq!(ingest("Scenario: without a feature\n"), Feature::default());
    }
}
