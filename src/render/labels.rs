//! Human-readable labels for conditions and actions inside logic blocks.
//!
//! Labels returned here are raw; callers sanitize before emitting.

use crate::lower::index::ResolutionContext;
use crate::lower::reference::{describe_input_value, slot_name};
use crate::parse::{Action, Condition, InputSource, InputValue};

pub const DEFAULT_CONDITION_TYPE: &str = "condition";
pub const DEFAULT_ACTION_TYPE: &str = "ACTION";
const ACTION_SEPARATOR: &str = "; ";

/// `type(ref, ref)`, or the bare type when there are no inputs.
pub fn condition_label(condition: &Condition, ctx: &ResolutionContext) -> String {
    let kind = condition.kind.as_deref().unwrap_or(DEFAULT_CONDITION_TYPE);
    with_refs(kind, &condition.input_values, ctx)
}

/// Every action of a clause, joined with `; `.
pub fn actions_label(actions: &[Action], ctx: &ResolutionContext) -> String {
    actions
        .iter()
        .map(|a| action_label(a, ctx))
        .collect::<Vec<_>>()
        .join(ACTION_SEPARATOR)
}

pub fn action_label(action: &Action, ctx: &ResolutionContext) -> String {
    let kind = action.kind.as_deref().unwrap_or(DEFAULT_ACTION_TYPE);
    match data_model_verb(kind) {
        Some(verb) => data_model_action_label(verb, &action.input_values, ctx),
        None => with_refs(kind, &action.input_values, ctx),
    }
}

fn data_model_verb(kind: &str) -> Option<&'static str> {
    match kind {
        "load_data_model_record" => Some("Load record"),
        "unload_data_model_record" => Some("Unload record"),
        "create_or_load_data_model_record" => Some("Create or load record"),
        _ => None,
    }
}

/// `<verb> :<slot> from <source>`, where the slot is the first data-model slot
/// input and the source is the first variable, aggregation or static input.
fn data_model_action_label(verb: &str, inputs: &[InputValue], ctx: &ResolutionContext) -> String {
    let slot = inputs.iter().find_map(|iv| match &iv.source {
        InputSource::DataModelSlot { slot_id: Some(id) } => Some(slot_name(id, ctx)),
        _ => None,
    });
    let source = inputs
        .iter()
        .find(|iv| {
            matches!(
                iv.source,
                InputSource::TableAggregation { .. }
                    | InputSource::Variable { .. }
                    | InputSource::Static { .. }
            )
        })
        .map(|iv| describe_input_value(iv, ctx));

    let mut parts = vec![verb.to_string()];
    if let Some(slot) = slot {
        parts.push(format!(":{}", slot));
    }
    if let Some(source) = source {
        parts.push(format!("from {}", source));
    }
    parts.join(" ")
}

fn with_refs(kind: &str, inputs: &[InputValue], ctx: &ResolutionContext) -> String {
    if inputs.is_empty() {
        return kind.to_string();
    }
    let refs: Vec<String> = inputs.iter().map(|iv| describe_input_value(iv, ctx)).collect();
    format!("{}({})", kind, refs.join(", "))
}
