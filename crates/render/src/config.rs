use serde::{Deserialize, Serialize};

/// Options for [`render_with_config`](crate::render_with_config).
///
/// The default layout prints each tag on its own indented line below the
/// `Scenario:` header. Setting `tags_above_header` moves the tags onto a
/// single line above the header instead, which is the placement Gherkin
/// parsers recognize, so tagged output can be read back without losing tags.
///
/// ```rust
/// use render::RenderConfig;
///
/// let config = RenderConfig::default();
/// assert!(!config.tags_above_header);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub tags_above_header: bool,
}
