//! Text report for one lowered step.
//!
//! Sections: step summary, direct ids, triggers grouped by category, widgets
//! grouped by type. The diagram section is appended by [`diagram_section`].

pub mod trigger;
pub mod widget;

use serde_json::Value;

use crate::lower::StepPlan;
use crate::lower::index::Index;
use crate::parse::Trigger;
use crate::parse::fields::literal_text;
use crate::render::Diagram;
use crate::writer::LineWriter;

/// Placeholder for a missing value or an empty section.
pub const NONE: &str = "(none)";
pub const NO_DIAGRAM: &str = "(no triggers or widgets on this step)";
pub const DIAGRAM_TITLE: &str = "Mermaid (step + trigger logic)";

/// Everything above the diagram.
pub fn render_report(plan: &StepPlan, triggers: &Index<Trigger>) -> String {
    let mut w = LineWriter::new();
    write_summary(&mut w, plan);

    w.blank();
    w.banner("Step triggers (grouped)");
    trigger::write_categories(&mut w, &plan.categories);

    w.blank();
    widget::write_widgets(&mut w, &plan.widgets, triggers);

    w.finish()
}

fn write_summary(w: &mut LineWriter, plan: &StepPlan) {
    let step = plan.step;
    w.banner("Step summary");
    w.line(&format!("Step ID: {}", step.id));
    w.line(&format!("Name: {}", or_none(step.name.as_deref())));
    w.line(&format!("Parent process: {}", or_none(step.parent_process.as_deref())));
    w.line(&format!("Parent step group: {}", or_none(step.parent_step_group.as_deref())));
    w.line(&format!("Takt time: {}", attribute_text(step.takt_time.as_ref())));

    w.blank();
    w.line(&format!("Direct trigger IDs ({}): {}", step.trigger_ids.len(), id_list(&step.trigger_ids)));
    w.line(&format!("Widget IDs ({}): {}", step.widget_ids.len(), id_list(&step.widget_ids)));
}

/// The diagram block with its banner, or the placeholder when there is none.
pub fn diagram_section(diagram: Option<&Diagram>) -> String {
    let mut w = LineWriter::new();
    w.banner(DIAGRAM_TITLE);
    match diagram {
        Some(diagram) => {
            let mut out = w.finish();
            out.push_str(&diagram.to_mermaid());
            out
        }
        None => {
            w.indented(|w| w.line(NO_DIAGRAM));
            w.finish()
        }
    }
}

fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or(NONE)
}

fn id_list(ids: &[String]) -> String {
    if ids.is_empty() {
        NONE.to_string()
    } else {
        ids.join(", ")
    }
}

fn attribute_text(value: Option<&Value>) -> String {
    value.map(literal_text).unwrap_or_else(|| NONE.to_string())
}
