//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::InspectError;
use crate::select;

/// List the steps of an export JSON, sorted the way the CLI prompt shows them.
/// Returns `{status: "success", steps: [...]}` or `{status: "errors", errors: [...]}`.
#[wasm_bindgen]
pub fn list_steps(json: &str) -> JsValue {
    let result = list_steps_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn list_steps_inner(json: &str) -> ListResult {
    let doc = match crate::parse::parse(json) {
        Ok(doc) => doc,
        Err(errors) => return ListResult::Errors { errors: to_dtos(errors) },
    };

    let steps = select::sorted_steps(&doc.steps)
        .into_iter()
        .map(|s| StepDto {
            id: s.id.clone(),
            name: s.name.clone(),
            parent_process: s.parent_process.clone(),
            parent_step_group: s.parent_step_group.clone(),
        })
        .collect();
    ListResult::Success { steps }
}

/// Full pipeline for one step: parse → lower → report + diagram.
/// Returns `{status: "success", report, diagram}` or `{status: "errors", errors: [...]}`.
#[wasm_bindgen]
pub fn inspect_step(json: &str, step_id: &str) -> JsValue {
    let result = inspect_step_inner(json, step_id);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn inspect_step_inner(json: &str, step_id: &str) -> InspectResult {
    match crate::inspect_json(json, step_id.trim()) {
        Ok(inspection) => InspectResult::Success {
            report: inspection.report,
            diagram: inspection.diagram.map(|d| d.to_mermaid()),
        },
        Err(errors) => InspectResult::Errors { errors: to_dtos(errors) },
    }
}

fn to_dtos(errors: Vec<InspectError>) -> Vec<ErrorDto> {
    errors.into_iter().map(ErrorDto::from).collect()
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    code: String,
    phase: String,
    message: String,
    entity_id: Option<String>,
}

impl From<InspectError> for ErrorDto {
    fn from(e: InspectError) -> Self {
        ErrorDto {
            code: e.code,
            phase: e.phase.to_string(),
            message: e.message,
            entity_id: e.entity_id,
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct StepDto {
    id: String,
    name: Option<String>,
    parent_process: Option<String>,
    parent_step_group: Option<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum ListResult {
    #[serde(rename = "success")]
    Success { steps: Vec<StepDto> },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum InspectResult {
    #[serde(rename = "success")]
    Success {
        report: String,
        diagram: Option<String>,
    },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
