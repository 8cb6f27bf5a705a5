//! Step and role types.
//!
//! A [`Step`] is the natural-language body of a Gherkin step with the leading
//! keyword removed. Its [`StepRole`] is optional: ingestion records the
//! authored keyword, normalization fills in whatever is still missing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grammatical role of a step inside a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepRole {
    Given,
    When,
    Then,
    And,
}

impl StepRole {
    /// The Gherkin keyword this role is rendered with.
    pub fn keyword(self) -> &'static str {
        match self {
            StepRole::Given => "Given",
            StepRole::When => "When",
            StepRole::Then => "Then",
            StepRole::And => "And",
        }
    }

    /// Maps an authored Gherkin keyword onto a role.
    ///
    /// Surrounding whitespace is ignored. `But` folds into [`StepRole::And`]
    /// since both continue the previous step. Anything else (including the
    /// `*` bullet) yields `None`.
    ///
    /// ```rust
    /// use model::StepRole;
    ///
    /// assert_eq!(StepRole::from_keyword("Given "), Some(StepRole::Given));
    /// assert_eq!(StepRole::from_keyword("But"), Some(StepRole::And));
    /// assert_eq!(StepRole::from_keyword("*"), None);
    /// ```
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim() {
            "Given" => Some(StepRole::Given),
            "When" => Some(StepRole::When),
            "Then" => Some(StepRole::Then),
            "And" | "But" => Some(StepRole::And),
            _ => None,
        }
    }
}

impl fmt::Display for StepRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A single scenario step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    /// Step body without its keyword. Never empty for steps produced by ingest.
    pub text: String,
    /// Assigned role; `None` until ingestion or normalization sets it.
    #[serde(default)]
    pub role: Option<StepRole>,
}

impl Step {
    /// A step with no role assigned yet.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role: None,
        }
    }

    pub fn with_role(text: impl Into<String>, role: StepRole) -> Self {
        Self {
            text: text.into(),
            role: Some(role),
        }
    }
}

impl From<&str> for Step {
    fn from(text: &str) -> Self {
        Step::new(text)
    }
}
