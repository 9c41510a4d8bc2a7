//! Lowering phase: AppDocument + chosen step → StepPlan.
//!
//! Resolves the step's triggers and widgets through the indices, classifies the
//! triggers and builds the wiring graph. The plan is everything the report and
//! the diagram renderer need; neither of them touches the indices directly
//! except through the resolution context.

pub mod builder;
pub mod classify;
pub mod index;
pub mod reference;

use indexmap::IndexMap;

use crate::ir::StepGraph;
use crate::parse::{Step, Trigger, Widget};

use classify::TriggerCategories;
use index::Indices;

/// One step with its references resolved.
#[derive(Debug)]
pub struct StepPlan<'a> {
    pub step: &'a Step,
    /// Positionally aligned with `step.trigger_ids`; `None` for ids that do not resolve.
    pub direct_triggers: Vec<Option<&'a Trigger>>,
    pub categories: TriggerCategories<'a>,
    /// Widgets on the step that resolve and invoke at least one trigger.
    pub widgets: Vec<&'a Widget>,
    /// Direct triggers, then widget-invoked triggers, keyed by trigger id.
    pub logic_triggers: IndexMap<String, &'a Trigger>,
    pub graph: StepGraph,
}

impl StepPlan<'_> {
    /// A step with no trigger ids, no widget ids and no relevant triggers gets no diagram.
    pub fn has_diagram(&self) -> bool {
        !self.logic_triggers.is_empty()
            || !self.step.trigger_ids.is_empty()
            || !self.step.widget_ids.is_empty()
    }
}

/// Lower one step.
pub fn lower_step<'a>(step: &'a Step, indices: &Indices<'a>) -> StepPlan<'a> {
    // 1. Resolve direct triggers and classify them
    let direct_triggers: Vec<Option<&Trigger>> = step
        .trigger_ids
        .iter()
        .map(|id| indices.triggers.get(id.as_str()).copied())
        .collect();
    let categories = classify::categorize(&direct_triggers);

    // 2. Resolve widgets that invoke triggers
    let widgets: Vec<&Widget> = step
        .widget_ids
        .iter()
        .filter_map(|id| indices.widgets.get(id.as_str()).copied())
        .filter(|w| !w.trigger_ids.is_empty())
        .collect();

    // 3. Relevant triggers, first occurrence wins
    let mut logic_triggers: IndexMap<String, &Trigger> = IndexMap::new();
    let widget_triggers = widgets
        .iter()
        .flat_map(|w| w.trigger_ids.iter())
        .filter_map(|id| indices.triggers.get(id.as_str()).copied());
    for trigger in direct_triggers.iter().flatten().copied().chain(widget_triggers) {
        if let Some(id) = trigger.id.as_deref() {
            logic_triggers.entry(id.to_string()).or_insert(trigger);
        }
    }

    // 4. Wiring graph
    let graph = builder::build_step_graph(step, &indices.triggers, &indices.widgets, &indices.steps);

    tracing::debug!(
        step = %step.id,
        direct_triggers = direct_triggers.len(),
        widgets = widgets.len(),
        logic_triggers = logic_triggers.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "lowered step"
    );

    StepPlan {
        step,
        direct_triggers,
        categories,
        widgets,
        logic_triggers,
        graph,
    }
}
