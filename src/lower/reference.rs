//! Describe input values by resolving their references through the indices.

use crate::parse::fields::literal_text;
use crate::parse::{InputSource, InputValue, TableQuery};

use super::index::ResolutionContext;

/// Stand-in for expression inputs; the expression text itself is never emitted.
pub const EXPRESSION_MARKER: &str = "expr";

pub const VARIABLE_PREFIX: &str = "var";
pub const SLOT_PREFIX: &str = "dms";
pub const AGGREGATION_PREFIX: &str = "agg";
pub const STATIC_PREFIX: &str = "static";

/// Short, non-empty description of where `iv` reads from.
///
/// Resolution misses fall back to the raw identifier. A recognized source kind
/// that lacks its identifier falls through to the expression check and then to
/// the bare kind name.
pub fn describe_input_value(iv: &InputValue, ctx: &ResolutionContext) -> String {
    if let Some(desc) = describe_source(&iv.source, ctx) {
        return desc;
    }
    if iv.expression.is_some() {
        return EXPRESSION_MARKER.to_string();
    }
    iv.source.kind().unwrap_or("?").to_string()
}

fn describe_source(source: &InputSource, ctx: &ResolutionContext) -> Option<String> {
    match source {
        InputSource::Variable {
            variable_id: Some(id),
        } => Some(format!("{}:{}", VARIABLE_PREFIX, variable_name(id, ctx))),
        InputSource::DataModelSlot { slot_id: Some(id) } => {
            Some(format!("{}:{}", SLOT_PREFIX, slot_name(id, ctx)))
        }
        InputSource::TableAggregation {
            query_id,
            version_set_id,
        } => Some(format!(
            "{}:{}",
            AGGREGATION_PREFIX,
            aggregation_label(query_id.as_deref(), version_set_id.as_deref(), ctx)
        )),
        InputSource::Static { value: Some(value) } => {
            Some(format!("{}:{}", STATIC_PREFIX, literal_text(value)))
        }
        _ => None,
    }
}

/// Variable name, or the raw id when the variable is unknown or unnamed.
pub fn variable_name<'a>(id: &'a str, ctx: &'a ResolutionContext) -> &'a str {
    ctx.variables
        .get(id)
        .and_then(|v| v.name.as_deref())
        .unwrap_or(id)
}

/// Data-model slot name, or the raw id when the slot is unknown or unnamed.
pub fn slot_name<'a>(id: &'a str, ctx: &'a ResolutionContext) -> &'a str {
    ctx.data_model_slots
        .get(id)
        .and_then(|s| s.name.as_deref())
        .unwrap_or(id)
}

fn aggregation_label(
    query_id: Option<&str>,
    version_set_id: Option<&str>,
    ctx: &ResolutionContext,
) -> String {
    let Some(query_id) = query_id else {
        return "?".to_string();
    };
    let Some(query) = ctx.table_queries.get(query_id) else {
        tracing::debug!(query_id, "table query not found");
        return query_id.to_string();
    };
    matching_aggregation_label(query, version_set_id)
        .or(query.label.as_deref())
        .unwrap_or(query_id)
        .to_string()
}

fn matching_aggregation_label<'a>(
    query: &'a TableQuery,
    version_set_id: Option<&str>,
) -> Option<&'a str> {
    let agg = query
        .aggregations
        .iter()
        .find(|agg| agg.version_set_id.as_deref() == version_set_id)?;
    agg.label.as_deref().or(agg.aggregation_id.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{Aggregation, NamedRef};
    use serde_json::json;

    fn iv(value: serde_json::Value) -> InputValue {
        InputValue::from_value(&value).unwrap()
    }

    fn variables() -> Vec<NamedRef> {
        vec![NamedRef {
            id: Some("v1".into()),
            name: Some("Count".into()),
        }]
    }

    #[test]
    fn variable_resolves_to_name() {
        let vars = variables();
        let mut ctx = ResolutionContext::default();
        ctx.variables = crate::lower::index::index_by_id(&vars);
        let desc = describe_input_value(&iv(json!({"datasourceType": "variable", "variableId": "v1"})), &ctx);
        assert_eq!(desc, "var:Count");
    }

    #[test]
    fn unknown_variable_falls_back_to_id() {
        let ctx = ResolutionContext::default();
        let desc = describe_input_value(&iv(json!({"datasourceType": "variable", "variableId": "v1"})), &ctx);
        assert_eq!(desc, "var:v1");
    }

    #[test]
    fn slot_uses_dms_prefix() {
        let ctx = ResolutionContext::default();
        let desc = describe_input_value(&iv(json!({"datasourceType": "dataModelSlot", "dataModelSlot": "slot9"})), &ctx);
        assert_eq!(desc, "dms:slot9");
    }

    #[test]
    fn aggregation_matches_version_set() {
        let queries = vec![TableQuery {
            id: Some("q1".into()),
            label: Some("Shift query".into()),
            aggregations: vec![
                Aggregation {
                    aggregation_id: Some("agg-a".into()),
                    version_set_id: Some("vs-a".into()),
                    label: Some("ShiftID Day".into()),
                },
                Aggregation {
                    aggregation_id: Some("agg-b".into()),
                    version_set_id: Some("vs-b".into()),
                    label: None,
                },
            ],
        }];
        let mut ctx = ResolutionContext::default();
        ctx.table_queries = crate::lower::index::index_by_id(&queries);

        let hit = iv(json!({"datasourceType": "tableAggregation", "appTableQueryId": "q1", "tableAggregationVersionSetId": "vs-a"}));
        assert_eq!(describe_input_value(&hit, &ctx), "agg:ShiftID Day");

        let unlabeled = iv(json!({"datasourceType": "tableAggregation", "appTableQueryId": "q1", "tableAggregationVersionSetId": "vs-b"}));
        assert_eq!(describe_input_value(&unlabeled, &ctx), "agg:agg-b");

        let miss = iv(json!({"datasourceType": "tableAggregation", "appTableQueryId": "q1", "tableAggregationVersionSetId": "zzz"}));
        assert_eq!(describe_input_value(&miss, &ctx), "agg:Shift query");

        let unknown = iv(json!({"datasourceType": "tableAggregation", "appTableQueryId": "q404"}));
        assert_eq!(describe_input_value(&unknown, &ctx), "agg:q404");
    }

    #[test]
    fn static_values() {
        let ctx = ResolutionContext::default();
        assert_eq!(describe_input_value(&iv(json!({"datasourceType": "static", "value": 5})), &ctx), "static:5");
        assert_eq!(describe_input_value(&iv(json!({"datasourceType": "static", "value": "abc"})), &ctx), "static:abc");
        assert_eq!(describe_input_value(&iv(json!({"datasourceType": "static", "value": null})), &ctx), "static:null");
    }

    #[test]
    fn expressions_are_redacted() {
        let ctx = ResolutionContext::default();
        let desc = describe_input_value(&iv(json!({"datasourceType": "expression", "exprStr": "secret()"})), &ctx);
        assert_eq!(desc, EXPRESSION_MARKER);
    }

    #[test]
    fn resolver_is_total() {
        let ctx = ResolutionContext::default();
        let shapes = [
            json!({}),
            json!({"datasourceType": "variable"}),
            json!({"datasourceType": "dataModelSlot"}),
            json!({"datasourceType": "tableAggregation"}),
            json!({"datasourceType": "static"}),
            json!({"datasourceType": "machineAttribute"}),
            json!({"expression": "x"}),
        ];
        for shape in shapes {
            let desc = describe_input_value(&iv(shape.clone()), &ctx);
            assert!(!desc.is_empty(), "empty description for {shape}");
        }
        assert_eq!(describe_input_value(&iv(json!({})), &ctx), "?");
        assert_eq!(describe_input_value(&iv(json!({"datasourceType": "variable"})), &ctx), "variable");
        assert_eq!(describe_input_value(&iv(json!({"datasourceType": "machineAttribute"})), &ctx), "machineAttribute");
    }
}
