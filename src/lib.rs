//! Step inspector for low-code application exports.
//!
//! Pipeline: parse (extract typed collections) → lower (index, resolve,
//! classify, build the step graph) → report + render (text report and
//! flowchart diagram).

pub mod error;
pub mod ir;
pub mod lower;
pub mod parse;
pub mod render;
pub mod report;
pub mod select;
pub mod wasm;
pub mod writer;

use error::InspectError;
use lower::index::Indices;
use parse::{AppDocument, Step};
use render::Diagram;

/// Everything printed for one step.
#[derive(Debug, Clone)]
pub struct Inspection {
    pub report: String,
    /// `None` when the step has no triggers and no widgets.
    pub diagram: Option<Diagram>,
}

impl Inspection {
    /// Report, a blank line, then the diagram section.
    pub fn to_text(&self) -> String {
        format!(
            "{}\n{}",
            self.report,
            report::diagram_section(self.diagram.as_ref())
        )
    }
}

/// Inspect `step`, which must belong to `doc`.
pub fn inspect(doc: &AppDocument, step: &Step) -> Result<Inspection, Vec<InspectError>> {
    let indices = Indices::new(doc);
    let plan = lower::lower_step(step, &indices);

    let diagram = if plan.has_diagram() {
        let diagram = render::render_plan(&plan, &indices.context);
        let errors = render::validate_diagram(&diagram);
        if !errors.is_empty() {
            return Err(errors);
        }
        Some(diagram)
    } else {
        None
    };

    Ok(Inspection {
        report: report::render_report(&plan, &indices.triggers),
        diagram,
    })
}

/// Parse `json` and inspect the step with identifier `step_id`.
pub fn inspect_json(json: &str, step_id: &str) -> Result<Inspection, Vec<InspectError>> {
    let doc = parse::parse(json)?;
    let step = select::find_step(&doc.steps, step_id).map_err(|e| vec![e])?;
    inspect(&doc, step)
}
