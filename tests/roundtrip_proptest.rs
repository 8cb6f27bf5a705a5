//! Property tests for render -> parse round trips.
//!
//! Generated step texts are plain lower-case words so every one of them is a
//! valid Gherkin step body.

use std::collections::BTreeSet;

use featnorm::{
    ExampleRow, ExampleTable, Feature, RenderConfig, Scenario, ScenarioOutline, Step, StepRole,
    normalize, parse_feature, render_with_config,
};
use proptest::prelude::*;

const TAGS_ABOVE: RenderConfig = RenderConfig {
    tags_above_header: true,
};

fn step_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("the user has opened the login page".to_string()),
        Just("the user clicks the login button".to_string()),
        Just("the page should show a banner".to_string()),
        "[a-z]{3,8}( [a-z]{3,8}){0,3}",
    ]
}

fn role_strategy() -> impl Strategy<Value = Option<StepRole>> {
    prop_oneof![
        Just(None),
        Just(Some(StepRole::Given)),
        Just(Some(StepRole::When)),
        Just(Some(StepRole::Then)),
        Just(Some(StepRole::And)),
    ]
}

/// Steps with a mix of authored and missing roles, `And` included.
fn steps_strategy(max: usize) -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(
        (step_text_strategy(), role_strategy()).prop_map(|(text, role)| Step { text, role }),
        0..max,
    )
}

fn background_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(step_text_strategy(), 0..3)
}

fn tags_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{3,6}", 0..3)
}

fn scenario_strategy() -> impl Strategy<Value = Scenario> {
    ("[A-Z][a-z]{2,8}", tags_strategy(), steps_strategy(5))
        .prop_map(|(name, tags, steps)| Scenario { name, tags, steps })
}

fn table_strategy() -> impl Strategy<Value = ExampleTable> {
    (1usize..4).prop_flat_map(|width| {
        prop::collection::vec(prop::collection::vec("[a-z0-9]{1,5}", width), 2..4).prop_map(
            |rows| ExampleTable {
                title: String::new(),
                rows: rows.into_iter().map(ExampleRow::new).collect(),
            },
        )
    })
}

fn outline_strategy() -> impl Strategy<Value = ScenarioOutline> {
    (
        "[A-Z][a-z]{2,8}",
        tags_strategy(),
        steps_strategy(4),
        table_strategy(),
    )
        .prop_map(|(name, tags, steps, table)| ScenarioOutline {
            name,
            tags,
            steps,
            examples: vec![table],
        })
}

fn feature_strategy() -> impl Strategy<Value = Feature> {
    (
        "[A-Z][a-z]{2,10}",
        background_strategy(),
        prop::collection::vec(scenario_strategy(), 0..4),
        prop::collection::vec(outline_strategy(), 0..2),
    )
        .prop_map(|(name, background, scenarios, outlines)| Feature {
            name,
            background,
            scenarios,
            outlines,
        })
}

fn distinct_texts(feature: &Feature) -> BTreeSet<String> {
    feature.step_texts().map(str::to_string).collect()
}

fn sorted_texts(feature: &Feature) -> Vec<String> {
    let mut texts: Vec<String> = feature.step_texts().map(str::to_string).collect();
    texts.sort();
    texts
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn rendered_feature_parses_back_to_itself(feature in feature_strategy()) {
        let normalized = normalize(feature);
        let text = render_with_config(&normalized, &TAGS_ABOVE);
        let reparsed = parse_feature(&text).expect("rendered output parses");
        prop_assert_eq!(reparsed, normalized);
    }

    #[test]
    fn no_step_text_is_lost(feature in feature_strategy()) {
        let normalized = normalize(feature.clone());
        let text = render_with_config(&normalized, &TAGS_ABOVE);
        let reparsed = parse_feature(&text).expect("rendered output parses");

        prop_assert_eq!(distinct_texts(&feature), distinct_texts(&reparsed));
        prop_assert_eq!(sorted_texts(&normalized), sorted_texts(&reparsed));
    }

    #[test]
    fn rendering_twice_is_stable(feature in feature_strategy()) {
        let first = render_with_config(&normalize(feature), &TAGS_ABOVE);
        let reparsed = parse_feature(&first).expect("rendered output parses");
        let second = render_with_config(&normalize(reparsed), &TAGS_ABOVE);
        prop_assert_eq!(first, second);
    }
}
