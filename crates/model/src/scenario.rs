//! Scenario, outline and example table types.

use serde::{Deserialize, Serialize};

use crate::step::{Step, StepRole};

/// Bare tag identifier, stored without the leading `@`.
pub type Tag = String;

/// One row of an examples table. Cell counts are not checked against the
/// header; ragged rows pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleRow {
    pub cells: Vec<String>,
}

impl ExampleRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }
}

/// An `Examples:` block. Row 0 is the header row when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleTable {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub rows: Vec<ExampleRow>,
}

impl ExampleTable {
    pub fn header(&self) -> Option<&ExampleRow> {
        self.rows.first()
    }
}

/// A plain scenario. Names are not required to be unique within a feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Appends an unclassified step.
    pub fn with_step(mut self, text: impl Into<String>) -> Self {
        self.steps.push(Step::new(text));
        self
    }

    pub fn with_role_step(mut self, role: StepRole, text: impl Into<String>) -> Self {
        self.steps.push(Step::with_role(text, role));
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

/// A parameterized scenario with one or more examples tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOutline {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub examples: Vec<ExampleTable>,
}

impl ScenarioOutline {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_step(mut self, text: impl Into<String>) -> Self {
        self.steps.push(Step::new(text));
        self
    }

    pub fn with_role_step(mut self, role: StepRole, text: impl Into<String>) -> Self {
        self.steps.push(Step::with_role(text, role));
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_examples(mut self, table: ExampleTable) -> Self {
        self.examples.push(table);
        self
    }
}
