use fxhash::{FxHashMap, FxHashSet};
use model::{Scenario, ScenarioOutline, Step};

use crate::config::{CountPolicy, NormalizeConfig};

/// Result of [`find_common_steps`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonSteps {
    /// Texts shared by every scenario and outline, in order of first appearance.
    pub common: Vec<String>,
    /// Scenarios with the common steps removed.
    pub scenarios: Vec<Scenario>,
    /// Outlines with the common steps removed. Examples are untouched.
    pub outlines: Vec<ScenarioOutline>,
}

/// Finds the step texts shared by every scenario and outline.
///
/// Matching is by text only: `When X` in one scenario and `Given X` in
/// another are the same step. Scenarios and outlines form a single pool, and a
/// text is common when its count reaches the pool size. An empty pool has no
/// common steps.
///
/// Outline steps that reference one of the outline's own example columns
/// (`<column>`) are parameterized and never counted, so they cannot be
/// promoted into a background.
///
/// The rewritten scenarios keep their names, tags and the order of their
/// remaining steps.
pub fn find_common_steps(
    scenarios: &[Scenario],
    outlines: &[ScenarioOutline],
    cfg: &NormalizeConfig,
) -> CommonSteps {
    let pool_size = scenarios.len() + outlines.len();
    if pool_size == 0 {
        return CommonSteps::default();
    }

    let mut tally = Tally::new(cfg.count_policy);
    for scenario in scenarios {
        tally.add(scenario.steps.iter());
    }
    for outline in outlines {
        let columns = placeholder_columns(outline);
        tally.add(
            outline
                .steps
                .iter()
                .filter(|step| !references_placeholder(&step.text, &columns)),
        );
    }

    let common = tally.reaching(pool_size);
    let lookup: FxHashSet<&str> = common.iter().map(String::as_str).collect();

    CommonSteps {
        scenarios: scenarios
            .iter()
            .map(|scenario| Scenario {
                name: scenario.name.clone(),
                tags: scenario.tags.clone(),
                steps: retain_uncommon(&scenario.steps, &lookup),
            })
            .collect(),
        outlines: outlines
            .iter()
            .map(|outline| ScenarioOutline {
                name: outline.name.clone(),
                tags: outline.tags.clone(),
                steps: retain_uncommon(&outline.steps, &lookup),
                examples: outline.examples.clone(),
            })
            .collect(),
        common,
    }
}

fn retain_uncommon(steps: &[Step], common: &FxHashSet<&str>) -> Vec<Step> {
    steps
        .iter()
        .filter(|step| !common.contains(step.text.as_str()))
        .cloned()
        .collect()
}

/// Per-text occurrence counter that remembers first-seen order.
struct Tally<'a> {
    policy: CountPolicy,
    counts: FxHashMap<&'a str, usize>,
    order: Vec<&'a str>,
}

impl<'a> Tally<'a> {
    fn new(policy: CountPolicy) -> Self {
        Self {
            policy,
            counts: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Counts the steps of one scenario or outline.
    fn add(&mut self, steps: impl Iterator<Item = &'a Step>) {
        let mut seen: FxHashSet<&'a str> = FxHashSet::default();
        for step in steps {
            let text = step.text.as_str();
            if self.policy == CountPolicy::PerScenario && !seen.insert(text) {
                continue;
            }
            match self.counts.get_mut(text) {
                Some(count) => *count += 1,
                None => {
                    self.counts.insert(text, 1);
                    self.order.push(text);
                }
            }
        }
    }

    fn reaching(&self, pool_size: usize) -> Vec<String> {
        self.order
            .iter()
            .filter(|text| self.counts.get(*text).copied() == Some(pool_size))
            .map(|text| (*text).to_string())
            .collect()
    }
}

/// Header cells of every examples table of the outline.
fn placeholder_columns(outline: &ScenarioOutline) -> Vec<&str> {
    outline
        .examples
        .iter()
        .filter_map(|table| table.header())
        .flat_map(|header| header.cells.iter().map(|cell| cell.trim()))
        .filter(|cell| !cell.is_empty())
        .collect()
}

fn references_placeholder(text: &str, columns: &[&str]) -> bool {
    columns
        .iter()
        .any(|column| text.contains(&format!("<{column}>")))
}
