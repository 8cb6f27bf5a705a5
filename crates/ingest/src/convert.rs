//! Conversion from the `gherkin` crate's syntax tree into the document model.

use gherkin::StepType;
use model::{ExampleRow, ExampleTable, Feature, Scenario, ScenarioOutline, Step, StepRole, Tag};

/// Builds a [`Feature`] from a parsed tree.
///
/// `Rule` blocks are flattened: their scenarios follow the feature's own
/// scenarios, and each one is prefixed with the steps of its rule's background.
pub(crate) fn convert_feature(parsed: gherkin::Feature) -> Feature {
    let mut feature = Feature::new(parsed.name.trim());

    if let Some(background) = &parsed.background {
        feature.background = convert_steps(&background.steps)
            .into_iter()
            .map(|step| step.text)
            .collect();
    }

    for scenario in &parsed.scenarios {
        push_scenario(&mut feature, scenario, &[]);
    }

    for rule in &parsed.rules {
        let prefix = rule
            .background
            .as_ref()
            .map(|background| convert_steps(&background.steps))
            .unwrap_or_default();
        for scenario in &rule.scenarios {
            push_scenario(&mut feature, scenario, &prefix);
        }
    }

    feature
}

fn push_scenario(feature: &mut Feature, scenario: &gherkin::Scenario, prefix: &[Step]) {
    let mut steps = prefix.to_vec();
    steps.extend(convert_steps(&scenario.steps));
    let tags = convert_tags(&scenario.tags);
    let name = scenario.name.trim().to_string();

    if is_outline(scenario) {
        feature.outlines.push(ScenarioOutline {
            name,
            tags,
            steps,
            examples: scenario.examples.iter().map(convert_examples).collect(),
        });
    } else {
        feature.scenarios.push(Scenario { name, tags, steps });
    }
}

/// A scenario with an Outline/Template keyword, or any scenario carrying
/// Examples blocks.
fn is_outline(scenario: &gherkin::Scenario) -> bool {
    !scenario.examples.is_empty()
        || scenario.keyword.contains("Outline")
        || scenario.keyword.contains("Template")
}

/// Converts steps, dropping any whose text is empty.
fn convert_steps(steps: &[gherkin::Step]) -> Vec<Step> {
    steps.iter().filter_map(convert_step).collect()
}

fn convert_step(step: &gherkin::Step) -> Option<Step> {
    let text = step.value.trim();
    if text.is_empty() {
        return None;
    }
    let role = StepRole::from_keyword(&step.keyword).unwrap_or(match step.ty {
        StepType::Given => StepRole::Given,
        StepType::When => StepRole::When,
        StepType::Then => StepRole::Then,
    });
    Some(Step::with_role(text, role))
}

fn convert_tags(tags: &[String]) -> Vec<Tag> {
    tags.iter()
        .map(|tag| tag.trim().trim_start_matches('@').to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn convert_examples(examples: &gherkin::Examples) -> ExampleTable {
    let title = examples
        .name
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();
    let rows = examples
        .table
        .as_ref()
        .map(|table| table.rows.iter().map(|row| ExampleRow::new(row.iter().cloned())).collect())
        .unwrap_or_default();
    ExampleTable { title, rows }
}
