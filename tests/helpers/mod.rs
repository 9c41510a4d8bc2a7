#![allow(dead_code)]

use serde_json::{Value, json};
use step_inspector::parse::{self, AppDocument};

pub const APP_EXPORT: &str = include_str!("../fixtures/app_export.json");

// =============================================================================
// Document builders
// =============================================================================

/// The packing-line fixture, parsed.
pub fn fixture_doc() -> AppDocument {
    parse::parse(APP_EXPORT).expect("fixture should parse")
}

/// Parse an inline JSON value.
pub fn doc_from(value: Value) -> AppDocument {
    parse::parse(&value.to_string()).expect("document should parse")
}

/// One step `s1` wired to the given triggers.
pub fn single_step_doc(triggers: Value) -> AppDocument {
    let ids: Vec<Value> = triggers
        .as_array()
        .map(|items| items.iter().filter_map(|t| t.get("_id").cloned()).collect())
        .unwrap_or_default();
    doc_from(json!({
        "triggers": triggers,
        "steps": [{"_id": "s1", "name": "Step one", "triggers": ids}]
    }))
}

// =============================================================================
// Trigger builders
// =============================================================================

/// A clause with one condition of type `cond` and one action of type `act`.
pub fn clause(cond: Option<&str>, act: Option<&str>) -> Value {
    let mut c = json!({});
    if let Some(cond) = cond {
        c["conditions"] = json!([{"type": cond}]);
    }
    if let Some(act) = act {
        c["actions"] = json!([{"type": act}]);
    }
    c
}

pub fn trigger_with_clauses(id: &str, clauses: Vec<Value>) -> Value {
    json!({"_id": id, "event": {"type": "step_open"}, "clauses": clauses})
}
