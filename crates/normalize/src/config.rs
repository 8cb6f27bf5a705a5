//! Configuration types for the normalization engine.
//!
//! [`NormalizeConfig`] picks one policy for each of the two places where the
//! engine has a real choice to make:
//!
//! - how step texts are counted when deciding commonality ([`CountPolicy`])
//! - whether authored roles survive normalization ([`RolePolicy`])
//!
//! The defaults are what the HTTP service uses.
//!
//! ```rust
//! use normalize::{CountPolicy, NormalizeConfig, RolePolicy};
//!
//! let config = NormalizeConfig::default();
//! assert_eq!(config.count_policy, CountPolicy::PerScenario);
//! assert_eq!(config.role_policy, RolePolicy::Preserve);
//!
//! let strict = NormalizeConfig {
//!     role_policy: RolePolicy::Reclassify,
//!     ..Default::default()
//! };
//! assert_eq!(strict.count_policy, CountPolicy::PerScenario);
//! ```

use serde::{Deserialize, Serialize};

/// How occurrences of a step text are tallied against the scenario pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountPolicy {
    /// A text counts once per scenario or outline, however often it repeats
    /// inside it.
    #[default]
    PerScenario,
    /// Every occurrence counts. A text repeated inside one scenario can then
    /// reach the pool size without appearing in every scenario.
    PerOccurrence,
}

/// What happens to a role that was read from the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolePolicy {
    /// Keep authored roles; only unassigned steps are classified.
    #[default]
    Preserve,
    /// Discard authored roles and classify every step from its text.
    Reclassify,
}

/// Configuration for [`normalize_with_config`](crate::normalize_with_config).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    #[serde(default)]
    pub count_policy: CountPolicy,
    #[serde(default)]
    pub role_policy: RolePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policies_deserialize_from_snake_case() {
        let cfg: NormalizeConfig = serde_json::from_str(
            r#"{"count_policy":"per_occurrence","role_policy":"reclassify"}"#,
        )
        .expect("valid config");
        assert_eq!(cfg.count_policy, CountPolicy::PerOccurrence);
        assert_eq!(cfg.role_policy, RolePolicy::Reclassify);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: NormalizeConfig = serde_json::from_str("{}").expect("valid config");
        assert_eq!(cfg, NormalizeConfig::default());
    }
}
