//! Parse phase: export JSON → typed entity collections.

pub mod extract;
pub mod fields;
pub mod types;

pub use types::*;

use serde_json::Value;

use crate::error::InspectError;

/// Every collection this tool reads out of one application export.
#[derive(Debug, Clone, Default)]
pub struct AppDocument {
    pub steps: Vec<Step>,
    pub triggers: Vec<Trigger>,
    pub widgets: Vec<Widget>,
    pub table_queries: Vec<TableQuery>,
    pub variables: Vec<Variable>,
    pub data_model_slots: Vec<DataModelSlot>,
}

/// Deserialize an export JSON string and extract its collections.
pub fn parse(json: &str) -> Result<AppDocument, Vec<InspectError>> {
    let root: Value = serde_json::from_str(json).map_err(|e| {
        vec![InspectError::parse(
            "P001",
            format!("Failed to parse application JSON: {}", e),
        )]
    })?;
    extract(&root)
}

/// Extract all collections from an already-parsed JSON value.
pub fn extract(root: &Value) -> Result<AppDocument, Vec<InspectError>> {
    let triggers = extract::collect_triggers(root).map_err(|e| vec![e])?;

    let doc = AppDocument {
        steps: extract::collect_steps(root),
        triggers,
        widgets: extract::collect_widgets(root),
        table_queries: extract::collect_table_queries(root),
        variables: extract::collect_variables(root),
        data_model_slots: extract::collect_data_model_slots(root),
    };

    tracing::debug!(
        steps = doc.steps.len(),
        triggers = doc.triggers.len(),
        widgets = doc.widgets.len(),
        table_queries = doc.table_queries.len(),
        variables = doc.variables.len(),
        data_model_slots = doc.data_model_slots.len(),
        "extracted collections"
    );

    Ok(doc)
}
