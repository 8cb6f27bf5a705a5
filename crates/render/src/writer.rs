use model::{ExampleRow, ExampleTable, Feature, Scenario, ScenarioOutline, Step, Tag};
use normalize::classify_role;

use crate::config::RenderConfig;

const STEP_INDENT: &str = "  ";
const ROW_INDENT: &str = "    ";

/// Renders a feature with the default [`RenderConfig`].
pub fn render(feature: &Feature) -> String {
    render_with_config(feature, &RenderConfig::default())
}

/// Renders a feature into Gherkin text.
///
/// Output order is fixed: the `Feature:` header, the `Background:` block
/// (only when it has steps), every scenario outline, then every scenario.
/// Background steps are always printed as `Given`. A step that has no role
/// yet is printed with the role [`classify_role`] infers from its text, so
/// rendering a feature that was never normalized still loses nothing.
pub fn render_with_config(feature: &Feature, cfg: &RenderConfig) -> String {
    let mut out = GherkinWriter::with_capacity(estimate_len(feature));

    out.header("Feature", &feature.name);
    out.blank();

    if !feature.background.is_empty() {
        out.line("Background:");
        for text in &feature.background {
            out.step("Given", text);
        }
        out.blank();
    }

    for outline in &feature.outlines {
        write_outline(&mut out, outline, cfg);
    }

    for scenario in &feature.scenarios {
        write_scenario(&mut out, scenario, cfg);
    }

    out.finish()
}

fn write_outline(out: &mut GherkinWriter, outline: &ScenarioOutline, cfg: &RenderConfig) {
    out.tagged_header("Scenario Outline", &outline.name, &outline.tags, cfg);
    write_steps(out, &outline.steps);
    out.blank();
    for table in &outline.examples {
        write_examples(out, table);
    }
}

fn write_scenario(out: &mut GherkinWriter, scenario: &Scenario, cfg: &RenderConfig) {
    out.tagged_header("Scenario", &scenario.name, &scenario.tags, cfg);
    write_steps(out, &scenario.steps);
    out.blank();
}

fn write_steps(out: &mut GherkinWriter, steps: &[Step]) {
    for step in steps {
        let role = classify_role(&step.text, step.role);
        out.step(role.keyword(), &step.text);
    }
}

fn write_examples(out: &mut GherkinWriter, table: &ExampleTable) {
    let title = table.title.trim();
    if title.is_empty() {
        out.line(&format!("{STEP_INDENT}Examples:"));
    } else {
        out.line(&format!("{STEP_INDENT}Examples: {title}"));
    }
    for row in &table.rows {
        out.line(&format!("{ROW_INDENT}{}", format_row(row)));
    }
    out.blank();
}

/// Formats a table row as `| a | b |`. Cells are written as given.
pub fn format_row(row: &ExampleRow) -> String {
    format!("| {} |", row.cells.join(" | "))
}

fn estimate_len(feature: &Feature) -> usize {
    let text_len: usize = feature.step_texts().map(|t| t.len() + 8).sum();
    64 + feature.name.len() + text_len
}

/// Line-oriented string builder.
struct GherkinWriter {
    buf: String,
}

impl GherkinWriter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    fn line(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// `Keyword: name`, or just `Keyword:` for an empty name.
    fn header(&mut self, keyword: &str, name: &str) {
        if name.is_empty() {
            self.line(&format!("{keyword}:"));
        } else {
            self.line(&format!("{keyword}: {name}"));
        }
    }

    fn tagged_header(&mut self, keyword: &str, name: &str, tags: &[Tag], cfg: &RenderConfig) {
        if cfg.tags_above_header {
            if !tags.is_empty() {
                let joined: Vec<String> = tags.iter().map(|tag| format!("@{tag}")).collect();
                self.line(&joined.join(" "));
            }
            self.header(keyword, name);
        } else {
            self.header(keyword, name);
            for tag in tags {
                self.line(&format!("{STEP_INDENT}@{tag}"));
            }
        }
    }

    fn step(&mut self, keyword: &str, text: &str) {
        self.line(&format!("{STEP_INDENT}{keyword} {text}"));
    }

    fn finish(self) -> String {
        self.buf
    }
}
