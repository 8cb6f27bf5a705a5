//! featnorm render layer.
//!
//! Turns a (normalized) [`Feature`](model::Feature) back into Gherkin text.
//! Rendering is a pure function: it only builds a string.
//!
//! ## Layout
//!
//! ```text
//! Feature: <name>
//!
//! Background:
//!   Given <text>
//!
//! Scenario Outline: <name>
//!   <Role> <text>
//!
//!   Examples:
//!     | a | b |
//!
//! Scenario: <name>
//!   @<tag>
//!   <Role> <text>
//!
//! ```
//!
//! Every step in the input appears exactly once in the output.

mod config;
mod writer;

pub use crate::config::RenderConfig;
pub use crate::writer::{format_row, render, render_with_config};

#[cfg(test)]
mod tests {
    use super::*;
    use model::{ExampleRow, ExampleTable, Feature, Scenario, ScenarioOutline, StepRole};
    use normalize::normalize;

    fn login_feature() -> Feature {
        Feature::new("User Login")
            .with_background_step("the user has opened the login page")
            .with_scenario(
                Scenario::new("Successful login with valid credentials")
                    .with_step("the user has entered a valid username")
                    .with_step("the user has entered a valid password")
                    .with_step("the user clicks the login button")
                    .with_step("the user should be redirected to the dashboard")
                    .with_step("a welcome message should be displayed"),
            )
            .with_scenario(
                Scenario::new("Unsuccessful login with invalid credentials")
                    .with_step("the user has entered an invalid username")
                    .with_step("the user has entered an invalid password")
                    .with_step("the user clicks the login button")
                    .with_step("the user should see an error message"),
            )
    }

    #[test]
    fn renders_merged_background_and_classified_steps() {
        let text = render(&normalize(login_feature()));

        let expected = "\
Feature: User Login

Background:
  Given the user has opened the login page
  Given the user clicks the login button

Scenario: Successful login with valid credentials
  Given the user has entered a valid username
  Given the user has entered a valid password
  Then the user should be redirected to the dashboard
  Then a welcome message should be displayed

Scenario: Unsuccessful login with invalid credentials
  Given the user has entered an invalid username
  Given the user has entered an invalid password
  Then the user should see an error message

";
        assert_eq!(text, expected);
        assert_eq!(text.matches("Background:").count(), 1);
    }

    #[test]
    fn empty_background_is_omitted() {
        let feature = Feature::new("Solo").with_scenario(
            Scenario::new("only").with_role_step(StepRole::When, "something happens"),
        );
        assert_eq!(
            render(&feature),
            "Feature: Solo\n\nScenario: only\n  When something happens\n\n"
        );
    }

    #[test]
    fn unclassified_steps_get_inferred_roles() {
        let feature = Feature::new("f").with_scenario(
            Scenario::new("s")
                .with_step("the form was opened")
                .with_step("the user clicks submit")
                .with_step("a toast should appear")
                .with_step("time passes"),
        );
        let text = render(&feature);
        assert!(text.contains("  Given the form was opened\n"));
        assert!(text.contains("  When the user clicks submit\n"));
        assert!(text.contains("  Then a toast should appear\n"));
        assert!(text.contains("  When time passes\n"));
    }

    #[test]
    fn tags_follow_header_by_default() {
        let feature = Feature::new("f").with_scenario(
            Scenario::new("s")
                .with_tag("smoke")
                .with_tag("login")
                .with_role_step(StepRole::Given, "a user"),
        );
        assert_eq!(
            render(&feature),
            "Feature: f\n\nScenario: s\n  @smoke\n  @login\n  Given a user\n\n"
        );
    }

    #[test]
    fn tags_can_precede_header() {
        let feature = Feature::new("f").with_scenario(
            Scenario::new("s")
                .with_tag("smoke")
                .with_tag("login")
                .with_role_step(StepRole::Given, "a user"),
        );
        let cfg = RenderConfig {
            tags_above_header: true,
        };
        assert_eq!(
            render_with_config(&feature, &cfg),
            "Feature: f\n\n@smoke @login\nScenario: s\n  Given a user\n\n"
        );
    }

    #[test]
    fn outlines_render_before_scenarios_with_examples() {
        let feature = Feature::new("Pricing")
            .with_scenario(Scenario::new("plain").with_role_step(StepRole::Then, "it works"))
            .with_outline(
                ScenarioOutline::new("discounts")
                    .with_role_step(StepRole::Given, "a basket worth <total>")
                    .with_role_step(StepRole::Then, "the discount should be <discount>")
                    .with_examples(ExampleTable {
                        title: String::new(),
                        rows: vec![
                            ExampleRow::new(["total", "discount"]),
                            ExampleRow::new(["100", "5"]),
                            ExampleRow::new(["200", "15"]),
                        ],
                    }),
            );

        let expected = "\
Feature: Pricing

Scenario Outline: discounts
  Given a basket worth <total>
  Then the discount should be <discount>

  Examples:
    | total | discount |
    | 100 | 5 |
    | 200 | 15 |

Scenario: plain
  Then it works

";
        assert_eq!(render(&feature), expected);
    }

    #[test]
    fn ragged_rows_pass_through() {
        let row = ExampleRow::new(["a", "b", "c"]);
        assert_eq!(format_row(&row), "| a | b | c |");
        let short = ExampleRow::new(["only"]);
        assert_eq!(format_row(&short), "| only |");
    }

    #[test]
    fn titled_examples_keep_their_title() {
        let feature = Feature::new("f").with_outline(
            ScenarioOutline::new("o")
                .with_role_step(StepRole::Given, "<x>")
                .with_examples(ExampleTable {
                    title: "small numbers".into(),
                    rows: vec![ExampleRow::new(["x"]), ExampleRow::new(["1"])],
                }),
        );
        assert!(render(&feature).contains("  Examples: small numbers\n    | x |\n    | 1 |\n"));
    }

    #[test]
    fn empty_feature_renders_bare_header() {
        assert_eq!(render(&Feature::default()), "Feature:\n\n");
    }
}
