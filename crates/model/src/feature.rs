//! The [`Feature`] root type.
//!
//! # Structure
//!
//! ```text
//! Feature
//! ├── name: String
//! ├── background: Vec<String>          # always rendered as Given
//! ├── scenarios: Vec<Scenario>
//! │   └── name, tags, steps
//! └── outlines: Vec<ScenarioOutline>
//!     └── name, tags, steps, examples
//! ```
//!
//! A `Feature` owns everything nested inside it. It is built once per input,
//! rewritten by value during normalization and only read while rendering.

use serde::{Deserialize, Serialize};

use crate::scenario::{Scenario, ScenarioOutline};
use crate::step::Step;

/// Parsed representation of one Gherkin feature file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    /// Background step texts. Roles are implied: every background step is a Given.
    #[serde(default)]
    pub background: Vec<String>,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub outlines: Vec<ScenarioOutline>,
}

impl Feature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_background_step(mut self, text: impl Into<String>) -> Self {
        self.background.push(text.into());
        self
    }

    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenarios.push(scenario);
        self
    }

    pub fn with_outline(mut self, outline: ScenarioOutline) -> Self {
        self.outlines.push(outline);
        self
    }

    /// True when nothing was parsed: no name, no background, no scenarios.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.background.is_empty()
            && self.scenarios.is_empty()
            && self.outlines.is_empty()
    }

    /// Total number of steps, background included.
    pub fn step_count(&self) -> usize {
        self.background.len()
            + self.scenarios.iter().map(|s| s.steps.len()).sum::<usize>()
            + self.outlines.iter().map(|o| o.steps.len()).sum::<usize>()
    }

    /// Every step text in the feature: background first, then scenarios, then
    /// outlines, each in authored order.
    pub fn step_texts(&self) -> impl Iterator<Item = &str> + '_ {
        let background = self.background.iter().map(String::as_str);
        let scenarios = self
            .scenarios
            .iter()
            .flat_map(|s| s.steps.iter().map(|step| step.text.as_str()));
        let outlines = self
            .outlines
            .iter()
            .flat_map(|o| o.steps.iter().map(|step| step.text.as_str()));
        background.chain(scenarios).chain(outlines)
    }

    /// Iterates the steps of every scenario and outline, background excluded.
    pub fn scenario_steps(&self) -> impl Iterator<Item = &Step> + '_ {
        self.scenarios
            .iter()
            .flat_map(|s| s.steps.iter())
            .chain(self.outlines.iter().flat_map(|o| o.steps.iter()))
    }
}
