//! Step selection: sorted listing, numeric choice and lookup by identifier.

use crate::error::InspectError;
use crate::parse::{Step, UNNAMED};

/// How many known ids the "not found" diagnostic lists.
pub const SAMPLE_SIZE: usize = 10;

/// Steps ordered by lower-cased name (missing names first), then identifier.
pub fn sorted_steps(steps: &[Step]) -> Vec<&Step> {
    let mut sorted: Vec<&Step> = steps.iter().collect();
    sorted.sort_by_cached_key(|s| {
        (
            s.name.as_deref().unwrap_or_default().to_lowercase(),
            s.id.clone(),
        )
    });
    sorted
}

/// `  1. Pack  [id=s1] (process=P, group=G)`
pub fn listing_line(n: usize, step: &Step) -> String {
    let mut extras = Vec::new();
    if let Some(process) = &step.parent_process {
        extras.push(format!("process={}", process));
    }
    if let Some(group) = &step.parent_step_group {
        extras.push(format!("group={}", group));
    }
    let extra = if extras.is_empty() {
        String::new()
    } else {
        format!(" ({})", extras.join(", "))
    };
    format!(
        "{:3}. {}  [id={}]{}",
        n,
        step.name.as_deref().unwrap_or(UNNAMED),
        step.id,
        extra
    )
}

/// Interpret a prompt answer as a 1-based index into `sorted`.
/// An empty answer means no selection.
pub fn choose_by_number<'a>(
    sorted: &[&'a Step],
    answer: &str,
) -> Result<Option<&'a Step>, InspectError> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(None);
    }
    let n: i64 = answer.parse().map_err(|_| {
        InspectError::select(
            "S001",
            format!("'{}' is not a valid integer index.", answer),
            None,
        )
    })?;
    if n < 1 || n as usize > sorted.len() {
        return Err(InspectError::select(
            "S002",
            format!("Step number {} is out of range (1-{}).", n, sorted.len()),
            None,
        ));
    }
    Ok(Some(sorted[n as usize - 1]))
}

/// Look a step up by identifier. The error carries a diagnostic listing of
/// known ids and of steps whose JSON mentions `step_id`.
pub fn find_step<'a>(steps: &'a [Step], step_id: &str) -> Result<&'a Step, InspectError> {
    if let Some(step) = steps.iter().find(|s| s.answers_to(step_id)) {
        return Ok(step);
    }
    tracing::debug!(step_id, known = steps.len(), "step id not found");
    Err(InspectError::select(
        "S003",
        not_found_message(steps, step_id),
        Some(step_id.to_string()),
    ))
}

/// Ids of steps whose serialized JSON contains `needle`.
pub fn steps_mentioning<'a>(steps: &'a [Step], needle: &str) -> Vec<&'a str> {
    steps
        .iter()
        .filter(|s| s.raw.to_string().contains(needle))
        .map(|s| s.id.as_str())
        .collect()
}

fn not_found_message(steps: &[Step], step_id: &str) -> String {
    let mut lines = vec![
        format!("Step with ID '{}' not found in loaded steps.", step_id),
        format!("Here are some step IDs I did find (first up to {}):", SAMPLE_SIZE),
    ];
    lines.extend(steps.iter().take(SAMPLE_SIZE).map(|s| format!("  - {}", s.id)));

    let hits = steps_mentioning(steps, step_id);
    if hits.is_empty() {
        lines.push("Did not even find the ID string inside any step objects.".to_string());
    } else {
        lines.push("Found the ID string inside these step objects:".to_string());
        lines.extend(hits.iter().map(|id| format!("  - {}", id)));
    }
    lines.join("\n")
}
