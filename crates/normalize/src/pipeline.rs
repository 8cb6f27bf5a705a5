use fxhash::FxHashSet;
use model::{Feature, Step, StepRole};
use tracing::debug;

use crate::classify::{classify_role, infer_role};
use crate::common::{find_common_steps, CommonSteps};
use crate::config::{NormalizeConfig, RolePolicy};

/// Normalizes a feature with the default [`NormalizeConfig`].
pub fn normalize(feature: Feature) -> Feature {
    normalize_with_config(feature, &NormalizeConfig::default())
}

/// Main entry point. Promotes shared steps into the background and assigns a
/// role to every remaining step.
///
/// 1. Texts shared by every scenario and outline are found.
/// 2. Repeats inside the existing background are dropped, and the shared
///    texts are appended to it, skipping texts it already holds.
/// 3. Any scenario or outline step whose text is now in the background is
///    removed from it.
/// 4. Every remaining step gets a role according to `cfg.role_policy`, and a
///    leading `And` is replaced by an inferred role.
///
/// Running it twice gives the same result as running it once.
pub fn normalize_with_config(feature: Feature, cfg: &NormalizeConfig) -> Feature {
    let CommonSteps {
        common,
        scenarios,
        outlines,
    } = find_common_steps(&feature.scenarios, &feature.outlines, cfg);

    let mut background = feature.background;
    let promoted = merge_background(&mut background, common);
    let covered: FxHashSet<String> = background.iter().cloned().collect();

    debug!(
        feature = %feature.name,
        promoted,
        background_len = background.len(),
        "normalize.background_merged"
    );

    Feature {
        name: feature.name,
        background,
        scenarios: scenarios
            .into_iter()
            .map(|mut scenario| {
                scenario.steps = finish_steps(scenario.steps, &covered, cfg.role_policy);
                scenario
            })
            .collect(),
        outlines: outlines
            .into_iter()
            .map(|mut outline| {
                outline.steps = finish_steps(outline.steps, &covered, cfg.role_policy);
                outline
            })
            .collect(),
    }
}

/// Drops repeated texts from `background`, then appends `common`, skipping
/// texts already present. Returns how many texts were added.
pub fn merge_background(background: &mut Vec<String>, common: Vec<String>) -> usize {
    let mut present: FxHashSet<String> = FxHashSet::default();
    background.retain(|text| present.insert(text.clone()));
    let before = background.len();
    for text in common {
        if present.insert(text.clone()) {
            background.push(text);
        }
    }
    background.len() - before
}

/// Drops covered steps and assigns roles.
///
/// An `And` left in first position (its predecessor was promoted or stripped)
/// has nothing to continue, so it gets the role inferred from its text.
fn finish_steps(steps: Vec<Step>, covered: &FxHashSet<String>, policy: RolePolicy) -> Vec<Step> {
    let mut steps: Vec<Step> = steps
        .into_iter()
        .filter(|step| !covered.contains(&step.text))
        .map(|step| {
            let role = match policy {
                RolePolicy::Preserve => classify_role(&step.text, step.role),
                RolePolicy::Reclassify => infer_role(&step.text),
            };
            Step {
                text: step.text,
                role: Some(role),
            }
        })
        .collect();

    if let Some(first) = steps.first_mut() {
        if first.role == Some(StepRole::And) {
            first.role = Some(infer_role(&first.text));
        }
    }
    steps
}
