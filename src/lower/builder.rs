//! Graph builder: one step → its trigger, transition and widget wiring.
//!
//! Insertion order follows the step's own trigger list, then its widget list,
//! so the rendered diagram is stable across runs on the same input.

use petgraph::graph::NodeIndex;

use crate::ir::ids::{step_node_id, trigger_node_id, widget_node_id};
use crate::ir::{EdgeKind, NodeKind, StepGraph};
use crate::parse::{Step, Trigger, Widget};

use super::index::Index;

pub const WIDGET_EVENT_LABEL: &str = "click";
const TRANSITION_FALLBACK_LABEL: &str = "transition";

/// Build the wiring graph for `step`.
pub fn build_step_graph(
    step: &Step,
    triggers: &Index<Trigger>,
    widgets: &Index<Widget>,
    steps: &Index<Step>,
) -> StepGraph {
    let mut graph = StepGraph::new();
    let step_idx = graph.add_node(&step_node_id(&step.id), NodeKind::Step, step.display_name());

    // 1) Step → trigger, and trigger → target step transitions
    for trigger_id in &step.trigger_ids {
        let Some(trigger) = triggers.get(trigger_id.as_str()) else {
            tracing::debug!(step = %step.id, trigger = %trigger_id, "step trigger not found");
            continue;
        };
        let trigger_idx = add_trigger_node(&mut graph, trigger_id, trigger);
        graph.add_edge(step_idx, trigger_idx, EdgeKind::Event, &trigger.event_type);
        add_transitions(&mut graph, trigger_idx, trigger, steps);
    }

    // 2) Widget → trigger
    for widget_id in &step.widget_ids {
        let Some(widget) = widgets.get(widget_id.as_str()) else {
            tracing::debug!(step = %step.id, widget = %widget_id, "step widget not found");
            continue;
        };
        if widget.trigger_ids.is_empty() {
            continue;
        }
        let widget_idx = graph.add_node(&widget_node_id(widget_id), NodeKind::Widget, &widget.graph_label());

        for trigger_id in &widget.trigger_ids {
            let Some(trigger) = triggers.get(trigger_id.as_str()) else {
                tracing::debug!(widget = %widget_id, trigger = %trigger_id, "widget trigger not found");
                continue;
            };
            let trigger_idx = add_trigger_node(&mut graph, trigger_id, trigger);
            graph.add_edge(widget_idx, trigger_idx, EdgeKind::WidgetEvent, WIDGET_EVENT_LABEL);
        }
    }

    graph
}

fn add_trigger_node(graph: &mut StepGraph, trigger_id: &str, trigger: &Trigger) -> NodeIndex {
    graph.add_node(&trigger_node_id(trigger_id), NodeKind::Trigger, trigger.display_label())
}

fn add_transitions(
    graph: &mut StepGraph,
    trigger_idx: NodeIndex,
    trigger: &Trigger,
    steps: &Index<Step>,
) {
    let transitions = trigger
        .clauses
        .iter()
        .flat_map(|clause| clause.actions.iter())
        .filter(|action| action.is_transition);

    for action in transitions {
        let label = action.kind.as_deref().unwrap_or(TRANSITION_FALLBACK_LABEL);
        for target_id in action.target_step_ids() {
            let target_label = steps
                .get(target_id)
                .map(|s| s.display_name())
                .unwrap_or(target_id);
            let target_idx = graph.add_node(&step_node_id(target_id), NodeKind::Step, target_label);
            graph.add_edge(trigger_idx, target_idx, EdgeKind::Transition, label);
        }
    }
}
