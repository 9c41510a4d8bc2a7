//! Field fallback chains for the loosely-schematized export.
//!
//! Each concept that may appear under more than one key name gets one ordered
//! key list here. Lookups walk the list and take the first usable value, so the
//! precedence of every chain can be read (and tested) in one place.

use serde_json::{Map, Value};

pub type Object = Map<String, Value>;

// =============================================================================
// KEY CHAINS
// =============================================================================

pub const ID_KEYS: &[&str] = &["_id", "id"];

pub const TRIGGER_LABEL_KEYS: &[&str] = &["description", "label", "name"];
pub const TRIGGER_EVENT_TYPE_KEYS: &[&str] = &["eventType", "event_type", "triggerEventType", "type"];
pub const TRIGGER_LOGIC_KEYS: &[&str] = &["conditionType", "booleanOperator", "logicalOperator"];

pub const CLAUSE_LOGIC_KEYS: &[&str] = &["type", "logicalOperator", "booleanOperator"];

pub const CONDITION_TYPE_KEYS: &[&str] = &["type", "conditionType"];
pub const CONDITION_LEFT_KEYS: &[&str] = &["left", "lhs", "field", "path"];
pub const CONDITION_OPERATOR_KEYS: &[&str] = &["operator", "op"];
pub const CONDITION_RIGHT_KEYS: &[&str] = &["right", "rhs", "value"];

pub const ACTION_TYPE_KEYS: &[&str] = &["type", "actionType"];
pub const ACTION_TRANSITION_KEYS: &[&str] = &["is_transition", "isTransition"];
pub const INPUT_VALUES_KEYS: &[&str] = &["input_values", "inputs"];

pub const DATASOURCE_KEYS: &[&str] = &["datasourceType", "datasource_type"];
pub const VARIABLE_ID_KEYS: &[&str] = &["variableId", "variable_id", "variable"];
pub const SLOT_ID_KEYS: &[&str] = &["dataModelSlot", "data_model_slot"];
pub const TABLE_QUERY_ID_KEYS: &[&str] = &["appTableQueryId"];
pub const VERSION_SET_ID_KEYS: &[&str] = &["tableAggregationVersionSetId"];
pub const EXPRESSION_KEYS: &[&str] = &["exprStr", "expression"];
pub const TARGET_STEP_KEYS: &[&str] = &["stepId", "step_id"];

pub const WIDGET_TYPE_KEYS: &[&str] = &["type", "widgetType", "kind", "widget_type"];
pub const WIDGET_NAME_KEYS: &[&str] = &["name", "label"];
pub const BUTTON_TEXT_KEYS: &[&str] = &["text", "label"];
pub const NESTED_BUTTON_TEXT_KEYS: &[&str] = &["text", "label", "buttonText", "caption"];
pub const WIDGET_TRIGGER_KEYS: &[&str] = &["triggers", "triggerIds", "trigger_ids"];
pub const WIDGET_CONTAINER_KEYS: &[&str] = &["props", "properties", "config", "options"];

pub const TRIGGERS_COLLECTION_KEY: &str = "triggers";
pub const STEPS_COLLECTION_KEY: &str = "steps";
pub const WIDGETS_COLLECTION_KEY: &str = "widgets";
pub const VARIABLES_COLLECTION_KEYS: &[&str] = &["variables"];
pub const TABLE_QUERY_COLLECTION_KEYS: &[&str] = &["table_queries", "tableQueries", "app_table_queries"];
pub const SLOT_COLLECTION_KEYS: &[&str] = &["data_model_slots", "dataModelSlots"];

// =============================================================================
// LOOKUP HELPERS
// =============================================================================

/// First non-empty string found under `keys`, in order.
pub fn first_str(obj: &Object, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| obj.get(*k).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// First value under `keys` that is not falsy (null, false, 0, "", [], {}).
pub fn first_truthy<'a>(obj: &'a Object, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| is_truthy(v))
}

/// First non-empty array found under `keys`.
pub fn first_list<'a>(obj: &'a Object, keys: &[&str]) -> &'a [Value] {
    keys.iter()
        .filter_map(|k| obj.get(*k).and_then(Value::as_array))
        .find(|items| !items.is_empty())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// String entries of the array stored under `key`; other entries are skipped.
pub fn string_list(obj: &Object, key: &str) -> Vec<String> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Identifier of an entity object.
pub fn entity_id(obj: &Object) -> Option<String> {
    first_str(obj, ID_KEYS)
}

/// Trigger event type: nested `event.type` first, then the flat key chain.
pub fn event_type(obj: &Object) -> Option<String> {
    let nested = obj
        .get("event")
        .and_then(Value::as_object)
        .and_then(|event| event.get("type"))
        .and_then(Value::as_str);
    if let Some(t) = nested {
        return Some(t.to_string());
    }
    TRIGGER_EVENT_TYPE_KEYS
        .iter()
        .find_map(|k| obj.get(*k).and_then(Value::as_str))
        .map(str::to_string)
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Short display text for a raw JSON operand: strings verbatim, anything else
/// serialized and clipped to 60 characters.
pub fn short_json(value: &Value) -> String {
    if let Value::String(s) = value {
        return s.clone();
    }
    let text = value.to_string();
    if text.chars().count() <= 60 {
        text
    } else {
        let head: String = text.chars().take(57).collect();
        format!("{}...", head)
    }
}

/// Display text for a literal value (strings without quotes).
pub fn literal_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
