//! Locate entity collections anywhere in an arbitrarily-shaped export.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::InspectError;

use super::fields;
use super::types::*;

/// Every step-like object found under any `steps` key at any depth, deduplicated
/// by identifier. The first occurrence wins and keeps its position.
pub fn collect_steps(root: &Value) -> Vec<Step> {
    let mut found = Vec::new();
    walk_step_lists(root, &mut found);

    let mut by_id: IndexMap<String, Step> = IndexMap::new();
    for step in found {
        by_id.entry(step.id.clone()).or_insert(step);
    }
    by_id.into_values().collect()
}

fn walk_step_lists(node: &Value, found: &mut Vec<Step>) {
    match node {
        Value::Object(obj) => {
            for (key, value) in obj {
                if key == fields::STEPS_COLLECTION_KEY {
                    if let Value::Array(items) = value {
                        found.extend(items.iter().filter_map(Step::from_value));
                    }
                }
                walk_step_lists(value, found);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk_step_lists(item, found);
            }
        }
        _ => {}
    }
}

/// The trigger collection: a top-level `triggers` list, or the whole document
/// when it is itself a list.
pub fn collect_triggers(root: &Value) -> Result<Vec<Trigger>, InspectError> {
    let items = match root {
        Value::Object(obj) => obj
            .get(fields::TRIGGERS_COLLECTION_KEY)
            .and_then(Value::as_array),
        Value::Array(items) => Some(items),
        _ => None,
    };

    items
        .map(|items| items.iter().filter_map(Trigger::from_value).collect())
        .ok_or_else(|| {
            InspectError::parse("P002", "Could not find a 'triggers' list in the JSON document")
        })
}

pub fn collect_widgets(root: &Value) -> Vec<Widget> {
    top_level_list(root, &[fields::WIDGETS_COLLECTION_KEY], Widget::from_value)
}

pub fn collect_variables(root: &Value) -> Vec<Variable> {
    top_level_list(root, fields::VARIABLES_COLLECTION_KEYS, NamedRef::from_value)
}

pub fn collect_data_model_slots(root: &Value) -> Vec<DataModelSlot> {
    top_level_list(root, fields::SLOT_COLLECTION_KEYS, NamedRef::from_value)
}

/// Table aggregation queries from the recognized top-level keys. When none of
/// them is present, fall back to any list (at any depth) whose elements all
/// look like queries.
pub fn collect_table_queries(root: &Value) -> Vec<TableQuery> {
    let direct = top_level_list(root, fields::TABLE_QUERY_COLLECTION_KEYS, TableQuery::from_value);
    if !direct.is_empty() {
        return direct;
    }

    let mut found = Vec::new();
    walk_query_shaped_lists(root, &mut found);
    if !found.is_empty() {
        tracing::debug!(count = found.len(), "table queries located by shape");
    }
    found
}

fn walk_query_shaped_lists(node: &Value, found: &mut Vec<TableQuery>) {
    match node {
        Value::Object(obj) => {
            for value in obj.values() {
                if let Value::Array(items) = value {
                    if is_query_shaped(items) {
                        found.extend(items.iter().filter_map(TableQuery::from_value));
                    }
                }
                walk_query_shaped_lists(value, found);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk_query_shaped_lists(item, found);
            }
        }
        _ => {}
    }
}

fn is_query_shaped(items: &[Value]) -> bool {
    !items.is_empty()
        && items.iter().all(|item| {
            item.as_object()
                .is_some_and(|obj| obj.contains_key("aggregations") && obj.contains_key("label"))
        })
}

/// Merge every list found under `keys` on the top-level object.
fn top_level_list<T>(root: &Value, keys: &[&str], parse: fn(&Value) -> Option<T>) -> Vec<T> {
    let Some(obj) = root.as_object() else {
        return Vec::new();
    };
    keys.iter()
        .filter_map(|k| obj.get(*k).and_then(Value::as_array))
        .flat_map(|items| items.iter().filter_map(parse))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn steps_found_at_any_depth_and_deduped() {
        let doc = json!({
            "processes": [
                {"steps": [{"_id": "s1", "name": "A"}, {"_id": "s2"}]},
                {"groups": {"steps": [{"id": "s1", "name": "dup"}, {"name": "no id"}]}}
            ],
            "steps": [{"_id": "s3"}]
        });
        let steps = collect_steps(&doc);
        let ids: Vec<&str> = steps.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2", "s3"]);
        assert_eq!(steps[0].name.as_deref(), Some("A"));
    }

    #[test]
    fn steps_nested_inside_steps_are_collected() {
        let doc = json!({"steps": [{"_id": "outer", "steps": [{"_id": "inner"}]}]});
        let ids: Vec<String> = collect_steps(&doc).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["outer", "inner"]);
    }

    #[test]
    fn triggers_from_list_document() {
        let doc = json!([{"_id": "t1"}, {"_id": "t2"}]);
        assert_eq!(collect_triggers(&doc).unwrap().len(), 2);
    }

    #[test]
    fn triggers_missing_is_error() {
        let err = collect_triggers(&json!({"steps": []})).unwrap_err();
        assert_eq!(err.code, "P002");
        assert!(collect_triggers(&json!({"triggers": {"a": 1}})).is_err());
    }

    #[test]
    fn optional_collections_default_to_empty() {
        let doc = json!({"triggers": []});
        assert!(collect_widgets(&doc).is_empty());
        assert!(collect_variables(&doc).is_empty());
        assert!(collect_data_model_slots(&doc).is_empty());
        assert!(collect_table_queries(&doc).is_empty());
    }

    #[test]
    fn slot_keys_are_merged() {
        let doc = json!({
            "data_model_slots": [{"_id": "a"}],
            "dataModelSlots": [{"_id": "b"}]
        });
        assert_eq!(collect_data_model_slots(&doc).len(), 2);
    }

    #[test]
    fn table_queries_fall_back_to_shape_scan() {
        let doc = json!({
            "app": {
                "queries": [
                    {"_id": "q1", "label": "Shifts", "aggregations": []},
                    {"_id": "q2", "label": "Parts", "aggregations": []}
                ],
                "mixed": [
                    {"_id": "q3", "label": "Only label"},
                    {"_id": "q4", "label": "L", "aggregations": []}
                ]
            }
        });
        let ids: Vec<String> = collect_table_queries(&doc)
            .into_iter()
            .filter_map(|q| q.id)
            .collect();
        assert_eq!(ids, vec!["q1", "q2"]);
    }

    #[test]
    fn table_queries_prefer_top_level_key() {
        let doc = json!({
            "tableQueries": [{"_id": "top"}],
            "nested": {"x": [{"_id": "shape", "label": "l", "aggregations": []}]}
        });
        let queries = collect_table_queries(&doc);
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].id.as_deref(), Some("top"));
    }
}
