//! Diagram phase: StepGraph + relevant triggers → flowchart statements.
//!
//! Emission order: header, graph nodes, graph edges, then one logic block per
//! relevant trigger followed by the edge from the trigger node into the block.

pub mod labels;
pub mod logic;
pub mod sanitize;
pub mod statement;
pub mod validate;

pub use sanitize::{MAX_LABEL_LEN, sanitize_label};
pub use statement::{Diagram, NodeShape, Statement};
pub use validate::validate_diagram;

use indexmap::IndexMap;

use crate::ir::ids::trigger_node_id;
use crate::ir::{NodeKind, StepGraph};
use crate::lower::StepPlan;
use crate::lower::index::ResolutionContext;
use crate::parse::Trigger;

const TRIGGER_PREFIX: &str = "Trig: ";
const WIDGET_PREFIX: &str = "Widget: ";

/// Render the step graph and the logic blocks of `logic_triggers`.
pub fn render_diagram(
    graph: &StepGraph,
    logic_triggers: &IndexMap<String, &Trigger>,
    ctx: &ResolutionContext,
) -> Diagram {
    let mut diagram = Diagram::default();
    diagram.push(Statement::header());

    // 1. Graph nodes
    for node in graph.nodes() {
        let label = sanitize_label(&node.label);
        let (shape, label) = match node.kind {
            NodeKind::Step => (NodeShape::Box, label),
            NodeKind::Trigger => (NodeShape::Rounded, format!("{}{}", TRIGGER_PREFIX, label)),
            NodeKind::Widget => (NodeShape::Diamond, format!("{}{}", WIDGET_PREFIX, label)),
        };
        diagram.push(Statement::node(node.id.as_str(), shape, label));
    }

    // 2. Graph edges
    for edge in graph.edges() {
        diagram.push(Statement::edge(edge.source, edge.target, &sanitize_label(edge.label)));
    }

    // 3. Logic blocks
    for (trigger_id, trigger) in logic_triggers {
        diagram.extend(logic::logic_block(trigger_id, trigger, ctx));

        let trigger_node = trigger_node_id(trigger_id);
        if graph.contains(&trigger_node) {
            diagram.push(Statement::edge(trigger_node, logic::start_node_id(trigger_id), ""));
        }
    }

    diagram
}

/// Diagram for a lowered step.
pub fn render_plan(plan: &StepPlan, ctx: &ResolutionContext) -> Diagram {
    render_diagram(&plan.graph, &plan.logic_triggers, ctx)
}
