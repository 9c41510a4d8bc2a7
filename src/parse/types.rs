//! Typed entity model for the application export.
//!
//! Every entity is read from a `serde_json::Value` once, here, using the key
//! chains in `fields`. Everything downstream works on these structs only.

use serde_json::Value;

use super::fields::{self, Object};

/// Anything that can be keyed in an identifier index.
pub trait Identified {
    fn id(&self) -> Option<&str>;
}

// =============================================================================
// STEP
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub id: String,
    pub name: Option<String>,
    pub trigger_ids: Vec<String>,
    pub widget_ids: Vec<String>,
    pub parent_process: Option<String>,
    pub parent_step_group: Option<String>,
    pub takt_time: Option<Value>,
    /// The step object as found in the document, kept for content search.
    pub raw: Value,
}

impl Step {
    /// Only objects carrying a non-empty identifier are steps.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let id = fields::entity_id(obj)?;
        Some(Step {
            id,
            name: fields::first_str(obj, &["name"]),
            trigger_ids: fields::string_list(obj, "triggers"),
            widget_ids: fields::string_list(obj, "widgets"),
            parent_process: fields::first_str(obj, &["parent_process"]),
            parent_step_group: fields::first_str(obj, &["parent_step_group"]),
            takt_time: obj.get("takt_time").filter(|v| !v.is_null()).cloned(),
            raw: value.clone(),
        })
    }

    /// Name if present, otherwise the identifier.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// True when `id` matches any identifier key of the raw step, not only
    /// the one chosen as [`Step::id`].
    pub fn answers_to(&self, id: &str) -> bool {
        self.id == id
            || fields::ID_KEYS
                .iter()
                .any(|key| self.raw.get(*key).and_then(Value::as_str) == Some(id))
    }
}

impl Identified for Step {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

// =============================================================================
// TRIGGER
// =============================================================================

pub const UNKNOWN_EVENT_TYPE: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    pub id: Option<String>,
    pub label: Option<String>,
    pub event_type: String,
    pub logic: Option<String>,
    pub clauses: Vec<Clause>,
}

impl Trigger {
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Trigger {
            id: fields::entity_id(obj),
            label: fields::first_str(obj, fields::TRIGGER_LABEL_KEYS),
            event_type: fields::event_type(obj).unwrap_or_else(|| UNKNOWN_EVENT_TYPE.to_string()),
            logic: fields::first_str(obj, fields::TRIGGER_LOGIC_KEYS),
            clauses: parse_list(obj, &["clauses"], Clause::from_value),
        })
    }

    /// Label for graph nodes and logic blocks: description/label/name, else
    /// the identifier.
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or_default()
    }
}

impl Identified for Trigger {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Clause {
    pub logic: Option<String>,
    pub conditions: Vec<Condition>,
    pub actions: Vec<Action>,
}

impl Clause {
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Clause {
            logic: fields::first_str(obj, fields::CLAUSE_LOGIC_KEYS),
            conditions: parse_list(obj, &["conditions"], Condition::from_value),
            actions: parse_list(obj, &["actions"], Action::from_value),
        })
    }

    /// A clause without conditions is the default branch.
    pub fn is_default(&self) -> bool {
        self.conditions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Condition {
    pub kind: Option<String>,
    pub input_values: Vec<InputValue>,
    pub left: Option<Value>,
    pub operator: Option<String>,
    pub right: Option<Value>,
    pub raw: Value,
}

impl Condition {
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Condition {
            kind: fields::first_str(obj, fields::CONDITION_TYPE_KEYS),
            input_values: parse_list(obj, fields::INPUT_VALUES_KEYS, InputValue::from_value),
            left: fields::first_truthy(obj, fields::CONDITION_LEFT_KEYS).cloned(),
            operator: fields::first_str(obj, fields::CONDITION_OPERATOR_KEYS),
            right: fields::first_truthy(obj, fields::CONDITION_RIGHT_KEYS).cloned(),
            raw: value.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Action {
    pub kind: Option<String>,
    pub name: Option<String>,
    pub is_transition: bool,
    pub input_values: Vec<InputValue>,
}

impl Action {
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Action {
            kind: fields::first_str(obj, fields::ACTION_TYPE_KEYS),
            name: fields::first_str(obj, &["name"]),
            is_transition: fields::first_truthy(obj, fields::ACTION_TRANSITION_KEYS).is_some(),
            input_values: parse_list(obj, fields::INPUT_VALUES_KEYS, InputValue::from_value),
        })
    }

    /// Target step identifiers carried by this action's input values.
    pub fn target_step_ids(&self) -> impl Iterator<Item = &str> {
        self.input_values
            .iter()
            .filter_map(|iv| iv.target_step_id.as_deref())
    }
}

// =============================================================================
// INPUT VALUE
// =============================================================================

/// Where an input value reads from.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    Variable { variable_id: Option<String> },
    DataModelSlot { slot_id: Option<String> },
    TableAggregation {
        query_id: Option<String>,
        version_set_id: Option<String>,
    },
    /// `value` is `None` when the key is absent, which is not the same as a null literal.
    Static { value: Option<Value> },
    /// A source kind this tool does not model.
    Other(String),
    /// No source kind at all.
    Missing,
}

impl InputSource {
    /// The source kind as written in the document, if any.
    pub fn kind(&self) -> Option<&str> {
        match self {
            InputSource::Variable { .. } => Some("variable"),
            InputSource::DataModelSlot { .. } => Some("dataModelSlot"),
            InputSource::TableAggregation { .. } => Some("tableAggregation"),
            InputSource::Static { .. } => Some("static"),
            InputSource::Other(kind) => Some(kind.as_str()),
            InputSource::Missing => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputValue {
    pub source: InputSource,
    pub expression: Option<String>,
    pub path: Vec<String>,
    pub target_step_id: Option<String>,
    /// Slot and variable ids as written, regardless of source kind.
    pub slot_ref: Option<String>,
    pub variable_ref: Option<String>,
}

impl InputValue {
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let variable_ref = fields::first_str(obj, fields::VARIABLE_ID_KEYS);
        let slot_ref = fields::first_str(obj, fields::SLOT_ID_KEYS);
        let source = match fields::first_str(obj, fields::DATASOURCE_KEYS).as_deref() {
            Some("variable") => InputSource::Variable {
                variable_id: variable_ref.clone(),
            },
            Some("dataModelSlot") => InputSource::DataModelSlot {
                slot_id: slot_ref.clone(),
            },
            Some("tableAggregation") => InputSource::TableAggregation {
                query_id: fields::first_str(obj, fields::TABLE_QUERY_ID_KEYS),
                version_set_id: fields::first_str(obj, fields::VERSION_SET_ID_KEYS),
            },
            Some("static") => InputSource::Static {
                value: obj.get("value").cloned(),
            },
            Some(other) => InputSource::Other(other.to_string()),
            None => InputSource::Missing,
        };
        Some(InputValue {
            source,
            expression: fields::first_str(obj, fields::EXPRESSION_KEYS),
            path: fields::string_list(obj, "path"),
            target_step_id: fields::first_str(obj, fields::TARGET_STEP_KEYS),
            slot_ref,
            variable_ref,
        })
    }
}

// =============================================================================
// WIDGET
// =============================================================================

pub const UNKNOWN_WIDGET_TYPE: &str = "UnknownWidgetType";
pub const UNNAMED: &str = "(no name)";

#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub id: Option<String>,
    pub name: Option<String>,
    pub widget_type: String,
    pub button_text: Option<String>,
    pub trigger_ids: Vec<String>,
}

impl Widget {
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Widget {
            id: fields::entity_id(obj),
            name: fields::first_str(obj, fields::WIDGET_NAME_KEYS),
            widget_type: fields::WIDGET_TYPE_KEYS
                .iter()
                .find_map(|k| obj.get(*k).and_then(Value::as_str))
                .unwrap_or(UNKNOWN_WIDGET_TYPE)
                .to_string(),
            button_text: button_text(obj),
            trigger_ids: widget_trigger_ids(obj),
        })
    }

    pub fn is_button(&self) -> bool {
        self.widget_type.to_lowercase().contains("button")
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    /// Graph label: `Button: <text>` for buttons with text, else the name.
    pub fn graph_label(&self) -> String {
        match (&self.button_text, self.is_button()) {
            (Some(text), true) => format!("Button: {}", text),
            _ => self.display_name().to_string(),
        }
    }
}

impl Identified for Widget {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

fn button_text(obj: &Object) -> Option<String> {
    if let Some(text) = fields::first_str(obj, fields::BUTTON_TEXT_KEYS) {
        return Some(text);
    }
    fields::WIDGET_CONTAINER_KEYS
        .iter()
        .filter_map(|k| obj.get(*k).and_then(Value::as_object))
        .find_map(|props| fields::first_str(props, fields::NESTED_BUTTON_TEXT_KEYS))
}

fn widget_trigger_ids(obj: &Object) -> Vec<String> {
    let containers = std::iter::once(obj).chain(
        fields::WIDGET_CONTAINER_KEYS
            .iter()
            .filter_map(|k| obj.get(*k).and_then(Value::as_object)),
    );

    let mut ids: Vec<String> = Vec::new();
    for container in containers {
        for key in fields::WIDGET_TRIGGER_KEYS {
            for id in fields::string_list(container, key) {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
    }
    ids
}

// =============================================================================
// REFERENCE TABLES
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    pub id: Option<String>,
    pub label: Option<String>,
    pub aggregations: Vec<Aggregation>,
}

impl TableQuery {
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(TableQuery {
            id: fields::entity_id(obj),
            label: fields::first_str(obj, &["label"]),
            aggregations: parse_list(obj, &["aggregations"], Aggregation::from_value),
        })
    }
}

impl Identified for TableQuery {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub aggregation_id: Option<String>,
    pub version_set_id: Option<String>,
    pub label: Option<String>,
}

impl Aggregation {
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Aggregation {
            aggregation_id: fields::first_str(obj, &["aggregationId"]),
            version_set_id: fields::first_str(obj, &["aggregationVersionSetId"]),
            label: fields::first_str(obj, &["label"]),
        })
    }
}

/// A variable or data-model slot: only the name matters for display.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl NamedRef {
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(NamedRef {
            id: fields::entity_id(obj),
            name: fields::first_str(obj, &["name"]),
        })
    }
}

impl Identified for NamedRef {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

pub type Variable = NamedRef;
pub type DataModelSlot = NamedRef;

// =============================================================================
// HELPERS
// =============================================================================

fn parse_list<T>(obj: &Object, keys: &[&str], parse: fn(&Value) -> Option<T>) -> Vec<T> {
    fields::first_list(obj, keys)
        .iter()
        .filter_map(parse)
        .collect()
}
